use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Board, Cell, Coord, GameState, Placement, Player};

use super::app::GameKind;

pub fn render_menu(frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Game list
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Gridmind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let games = Paragraph::new(vec![
        Line::from(""),
        Line::from("1. Tic-Tac-Toe   (3x3, perfect play)"),
        Line::from("2. Connect Four  (6x7, depth-limited search)"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Choose a game"));
    frame.render_widget(games, chunks[1]);

    let controls = Paragraph::new("1/2: Select  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

pub fn render_game(
    frame: &mut Frame,
    state: &GameState,
    kind: GameKind,
    cursor: Coord,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, state, kind, chunks[0]);
    render_board(frame, state.board(), cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, kind, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &GameState, kind: GameKind, area: Rect) {
    let (status, color) = if state.is_terminal() {
        ("Game Over".to_string(), Color::Yellow)
    } else {
        match state.current_player() {
            Player::X => ("Your turn (X)".to_string(), Color::Red),
            Player::O => ("AI is thinking...".to_string(), Color::Yellow),
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(kind.title()));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, cursor: Coord, area: Rect) {
    let gravity = board.placement() == Placement::Gravity;
    let mut lines = Vec::new();

    // Column numbers, highlighting the selected column under gravity.
    let mut col_line = vec![Span::raw("  ")];
    for col in 0..board.cols() {
        let label = format!(" {} ", col + 1);
        if gravity && col == cursor.col {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw(" |")];
        for col in 0..board.cols() {
            let selected = !gravity && cursor == Coord { row, col };
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if selected {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw("| "));
        lines.push(Line::from(row_spans));
    }

    // Drop indicator under the selected column.
    if gravity {
        let mut indicator = vec![Span::raw("  ")];
        for col in 0..board.cols() {
            if col == cursor.col {
                indicator.push(Span::styled(" ^ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator.push(Span::raw("   "));
            }
        }
        lines.push(Line::from(indicator));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, kind: GameKind, area: Rect) {
    let keys = match kind {
        GameKind::TicTacToe => "Arrows: Move  |  Enter: Place  |  R: Restart  |  Esc: Menu  |  Q: Quit",
        GameKind::ConnectFour => "Left/Right: Column  |  Enter: Drop  |  R: Restart  |  Esc: Menu  |  Q: Quit",
    };

    let controls = Paragraph::new(keys)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
