use crate::error::MoveError;

use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

/// How pieces enter the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Any empty cell may be taken directly (tic-tac-toe).
    Anywhere,
    /// Pieces fall to the lowest empty cell of their column (Connect Four).
    Gravity,
}

/// A single cell position. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    Ongoing,
    Won(Player),
    Draw,
}

/// A rectangular grid board with a runtime-configured size, win length, and
/// placement rule. Both game variants share this one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_length: usize,
    placement: Placement,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize, win_length: usize, placement: Placement) -> Self {
        assert!(rows > 0 && cols > 0, "board must have at least one cell");
        assert!(
            win_length <= rows.max(cols),
            "win length cannot exceed the larger board dimension"
        );
        Board {
            rows,
            cols,
            win_length,
            placement,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row * self.cols + at.col] = cell;
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Lowest empty row in a column, or `None` if the column is full.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Every currently legal placement, in a fixed order: row-major empty
    /// cells for free placement, or the landing cell of each non-full column
    /// left to right under gravity.
    pub fn legal_moves(&self) -> Vec<Coord> {
        match self.placement {
            Placement::Anywhere => (0..self.rows)
                .flat_map(|row| (0..self.cols).map(move |col| Coord { row, col }))
                .filter(|&c| self.get(c.row, c.col) == Cell::Empty)
                .collect(),
            Placement::Gravity => (0..self.cols)
                .filter_map(|col| self.landing_row(col).map(|row| Coord { row, col }))
                .collect(),
        }
    }

    /// Place a piece at an exact cell. The cell must be empty, and under
    /// gravity it must be the landing cell of its column.
    pub fn place(&mut self, at: Coord, player: Player) -> Result<(), MoveError> {
        if !self.in_bounds(at.row, at.col) {
            return Err(MoveError::OutOfBounds {
                row: at.row,
                col: at.col,
            });
        }
        if self.get(at.row, at.col) != Cell::Empty {
            return Err(MoveError::Occupied {
                row: at.row,
                col: at.col,
            });
        }
        if self.placement == Placement::Gravity {
            match self.landing_row(at.col) {
                Some(row) if row == at.row => {}
                Some(_) => {
                    return Err(MoveError::FloatingPiece {
                        row: at.row,
                        col: at.col,
                    })
                }
                None => return Err(MoveError::ColumnFull(at.col)),
            }
        }
        self.set(at, player.to_cell());
        Ok(())
    }

    /// Drop a piece into a column, returning the cell where it landed.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Coord, MoveError> {
        if col >= self.cols {
            return Err(MoveError::OutOfBounds { row: 0, col });
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let at = Coord { row, col };
        self.set(at, player.to_cell());
        Ok(at)
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, at: Coord) {
        self.set(at, Cell::Empty);
    }

    /// Place a piece for the duration of a closure, then take it back. The
    /// cell is restored on every exit path, so search code can never forget
    /// the undo half of an apply/undo pair.
    pub fn with_move<T>(&mut self, at: Coord, player: Player, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert_eq!(self.get(at.row, at.col), Cell::Empty, "move target must be empty");
        self.set(at, player.to_cell());
        let result = f(self);
        self.set(at, Cell::Empty);
        result
    }

    /// Whether the player has a completed run of `win_length` anywhere on the
    /// board, in any of the four orientations.
    pub fn has_win(&self, player: Player) -> bool {
        let token = player.to_cell();
        let n = self.win_length as isize;
        // Right, down, down-right, down-left: each window is visited exactly once.
        const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..self.rows as isize {
            for col in 0..self.cols as isize {
                for (dr, dc) in DIRS {
                    let end_row = row + (n - 1) * dr;
                    let end_col = col + (n - 1) * dc;
                    if end_row >= self.rows as isize || end_col < 0 || end_col >= self.cols as isize
                    {
                        continue;
                    }
                    let run = (0..n).all(|k| {
                        self.get((row + k * dr) as usize, (col + k * dc) as usize) == token
                    });
                    if run {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Terminal status of the board. Win detection runs before the full-board
    /// draw check, with X checked ahead of O as a fixed priority.
    pub fn status(&self) -> BoardStatus {
        if self.has_win(Player::X) {
            return BoardStatus::Won(Player::X);
        }
        if self.has_win(Player::O) {
            return BoardStatus::Won(Player::O);
        }
        if self.is_full() {
            return BoardStatus::Draw;
        }
        BoardStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tic_tac_toe_board() -> Board {
        Board::new(3, 3, 3, Placement::Anywhere)
    }

    fn connect_four_board() -> Board {
        Board::new(6, 7, 4, Placement::Gravity)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = connect_four_board();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.status(), BoardStatus::Ongoing);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = connect_four_board();

        let at = board.drop_piece(3, Player::X).unwrap();
        assert_eq!(at, Coord { row: 5, col: 3 });
        assert_eq!(board.get(5, 3), Cell::X);

        let at = board.drop_piece(3, Player::O).unwrap();
        assert_eq!(at, Coord { row: 4, col: 3 });
        assert_eq!(board.get(4, 3), Cell::O);
    }

    #[test]
    fn test_column_full() {
        let mut board = connect_four_board();
        for _ in 0..6 {
            board.drop_piece(0, Player::X).unwrap();
        }
        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Player::O),
            Err(MoveError::ColumnFull(0))
        );
    }

    #[test]
    fn test_drop_invalid_column() {
        let mut board = connect_four_board();
        assert_eq!(
            board.drop_piece(7, Player::X),
            Err(MoveError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = tic_tac_toe_board();
        board.place(Coord { row: 1, col: 1 }, Player::X).unwrap();
        assert_eq!(
            board.place(Coord { row: 1, col: 1 }, Player::O),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_place_rejects_floating_piece() {
        let mut board = connect_four_board();
        assert_eq!(
            board.place(Coord { row: 2, col: 0 }, Player::X),
            Err(MoveError::FloatingPiece { row: 2, col: 0 })
        );
        // The landing cell itself is fine.
        board.place(Coord { row: 5, col: 0 }, Player::X).unwrap();
    }

    #[test]
    fn test_legal_moves_row_major_for_free_placement() {
        let mut board = tic_tac_toe_board();
        board.place(Coord { row: 0, col: 0 }, Player::X).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Coord { row: 0, col: 1 });
        assert_eq!(moves[7], Coord { row: 2, col: 2 });
    }

    #[test]
    fn test_legal_moves_are_landing_cells_under_gravity() {
        let mut board = connect_four_board();
        board.drop_piece(2, Player::X).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Coord { row: 5, col: 0 });
        assert_eq!(moves[2], Coord { row: 4, col: 2 });
    }

    #[test]
    fn test_place_then_clear_round_trips() {
        let mut board = tic_tac_toe_board();
        let before = board.clone();
        let at = Coord { row: 2, col: 1 };
        board.place(at, Player::O).unwrap();
        board.clear(at);
        assert_eq!(board, before);
    }

    #[test]
    fn test_with_move_restores_board() {
        let mut board = connect_four_board();
        board.drop_piece(3, Player::X).unwrap();
        let before = board.clone();

        for at in board.legal_moves() {
            board.with_move(at, Player::O, |b| {
                assert_eq!(b.get(at.row, at.col), Cell::O);
            });
            assert_eq!(board, before, "with_move must restore the prior board");
        }
    }

    #[test]
    fn test_with_move_restores_on_early_return() {
        let mut board = tic_tac_toe_board();
        let before = board.clone();
        let at = Coord { row: 0, col: 0 };
        let found: Option<i32> = board.with_move(at, Player::X, |_| Some(1));
        assert_eq!(found, Some(1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = connect_four_board();
        for col in 0..4 {
            board.drop_piece(col, Player::X).unwrap();
        }
        assert!(board.has_win(Player::X));
        assert!(!board.has_win(Player::O));
        assert_eq!(board.status(), BoardStatus::Won(Player::X));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = connect_four_board();
        for _ in 0..4 {
            board.drop_piece(3, Player::O).unwrap();
        }
        assert_eq!(board.status(), BoardStatus::Won(Player::O));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = connect_four_board();
        // Staircase so O lands on rows 5, 4, 3, 2 going right.
        board.drop_piece(0, Player::O).unwrap();
        board.drop_piece(1, Player::X).unwrap();
        board.drop_piece(1, Player::O).unwrap();
        board.drop_piece(2, Player::X).unwrap();
        board.drop_piece(2, Player::X).unwrap();
        board.drop_piece(2, Player::O).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        assert!(board.has_win(Player::O));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = connect_four_board();
        board.drop_piece(6, Player::O).unwrap();
        board.drop_piece(5, Player::X).unwrap();
        board.drop_piece(5, Player::O).unwrap();
        board.drop_piece(4, Player::X).unwrap();
        board.drop_piece(4, Player::X).unwrap();
        board.drop_piece(4, Player::O).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::X).unwrap();
        board.drop_piece(3, Player::O).unwrap();
        assert!(board.has_win(Player::O));
    }

    #[test]
    fn test_no_win_with_short_run() {
        let mut board = connect_four_board();
        for col in 0..3 {
            board.drop_piece(col, Player::X).unwrap();
        }
        assert!(!board.has_win(Player::X));
        assert_eq!(board.status(), BoardStatus::Ongoing);
    }

    #[test]
    fn test_tic_tac_toe_lines() {
        let mut board = tic_tac_toe_board();
        for col in 0..3 {
            board.place(Coord { row: 1, col }, Player::X).unwrap();
        }
        assert_eq!(board.status(), BoardStatus::Won(Player::X));

        let mut board = tic_tac_toe_board();
        for i in 0..3 {
            board.place(Coord { row: i, col: i }, Player::O).unwrap();
        }
        assert_eq!(board.status(), BoardStatus::Won(Player::O));

        let mut board = tic_tac_toe_board();
        for i in 0..3 {
            board.place(Coord { row: i, col: 2 - i }, Player::O).unwrap();
        }
        assert_eq!(board.status(), BoardStatus::Won(Player::O));
    }

    #[test]
    fn test_draw_requires_full_board_without_win() {
        // X O X
        // X O O
        // O X X
        let mut board = tic_tac_toe_board();
        let layout = [
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 0, Player::X),
            (1, 1, Player::O),
            (1, 2, Player::O),
            (2, 0, Player::O),
            (2, 1, Player::X),
            (2, 2, Player::X),
        ];
        for (row, col, player) in layout {
            board.place(Coord { row, col }, player).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.status(), BoardStatus::Draw);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        // Full board where X has the top row.
        let mut board = tic_tac_toe_board();
        let layout = [
            (0, 0, Player::X),
            (0, 1, Player::X),
            (0, 2, Player::X),
            (1, 0, Player::O),
            (1, 1, Player::O),
            (1, 2, Player::X),
            (2, 0, Player::X),
            (2, 1, Player::O),
            (2, 2, Player::O),
        ];
        for (row, col, player) in layout {
            board.place(Coord { row, col }, player).unwrap();
        }
        assert_eq!(board.status(), BoardStatus::Won(Player::X));
    }
}
