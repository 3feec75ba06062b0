use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::engine::{SearchConfig, WindowHeuristic};
use crate::game::{Coord, GameOutcome, GameState, Placement, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TicTacToe,
    ConnectFour,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::ConnectFour => "Connect Four",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
}

/// The human plays X and moves first; the engine answers as O.
pub struct App {
    config: AppConfig,
    screen: Screen,
    kind: GameKind,
    state: GameState,
    agent: MinimaxAgent,
    cursor: Coord,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let search = SearchConfig::tic_tac_toe();
        App {
            config,
            screen: Screen::Menu,
            kind: GameKind::TicTacToe,
            state: GameState::new(search.board()),
            agent: MinimaxAgent::new(search),
            cursor: Coord { row: 1, col: 1 },
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The engine replies synchronously right after the human move has
            // been drawn, with a short pause so it reads as "thinking".
            if self.ai_to_move() {
                std::thread::sleep(Duration::from_millis(self.config.ui.ai_delay_ms));
                self.ai_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn ai_to_move(&self) -> bool {
        self.screen == Screen::Playing
            && !self.state.is_terminal()
            && self.state.current_player() == Player::O
    }

    fn ai_turn(&mut self) {
        if let Some(at) = self.agent.select_move(&self.state) {
            // Engine moves come from the legal-move generator, so this only
            // fails if the live state diverged from the searched one.
            if let Err(err) = self.state.apply_move_mut(at) {
                self.message = Some(format!("AI move rejected: {err}"));
                return;
            }
        }
        self.announce_outcome();
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.start_game(GameKind::TicTacToe),
            KeyCode::Char('2') => self.start_game(GameKind::ConnectFour),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.screen = Screen::Menu;
            }
            KeyCode::Char('r') => {
                let kind = self.kind;
                self.start_game(kind);
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.col + 1 < self.state.board().cols() {
                    self.cursor.col += 1;
                }
            }
            KeyCode::Up => {
                if self.kind == GameKind::TicTacToe && self.cursor.row > 0 {
                    self.cursor.row -= 1;
                }
            }
            KeyCode::Down => {
                if self.kind == GameKind::TicTacToe
                    && self.cursor.row + 1 < self.state.board().rows()
                {
                    self.cursor.row += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_turn();
            }
            _ => {}
        }
    }

    fn start_game(&mut self, kind: GameKind) {
        let search = match kind {
            GameKind::TicTacToe => SearchConfig::tic_tac_toe(),
            GameKind::ConnectFour => self.config.connect_four_search(),
        };
        self.kind = kind;
        self.state = GameState::new(search.board());
        self.agent = MinimaxAgent::with_heuristic(
            search,
            Box::new(WindowHeuristic::new(self.config.connect_four.center_bonus)),
        );
        self.cursor = Coord {
            row: search.rows / 2,
            col: search.cols / 2,
        };
        self.screen = Screen::Playing;
        self.message = None;
    }

    fn human_turn(&mut self) {
        if self.state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let result = match self.state.board().placement() {
            Placement::Anywhere => self.state.apply_move_mut(self.cursor),
            Placement::Gravity => self.state.play_column(self.cursor.col).map(|_| ()),
        };

        match result {
            Ok(()) => self.announce_outcome(),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(Player::X) => "You win!".to_string(),
                GameOutcome::Winner(Player::O) => "The AI wins!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::game_view::render_menu(frame),
            Screen::Playing => super::game_view::render_game(
                frame,
                &self.state,
                self.kind,
                self.cursor,
                &self.message,
            ),
        }
    }
}
