use crate::error::MoveError;

use super::{Board, BoardStatus, Coord, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress: board, side to move, and cached outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on the given board. X moves first.
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::X,
            outcome: None,
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal placements for the side to move, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Apply a move for the current player and advance the turn.
    pub fn apply_move_mut(&mut self, at: Coord) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.place(at, self.current_player)?;
        self.update_outcome();
        self.current_player = self.current_player.other();
        Ok(())
    }

    /// Drop a piece in a column for the current player (gravity boards).
    pub fn play_column(&mut self, col: usize) -> Result<Coord, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let at = self.board.drop_piece(col, self.current_player)?;
        self.update_outcome();
        self.current_player = self.current_player.other();
        Ok(at)
    }

    fn update_outcome(&mut self) {
        self.outcome = match self.board.status() {
            BoardStatus::Won(player) => Some(GameOutcome::Winner(player)),
            BoardStatus::Draw => Some(GameOutcome::Draw),
            BoardStatus::Ongoing => None,
        };
    }
}
