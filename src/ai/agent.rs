use crate::game::{Coord, GameState};

/// Interface for anything that can pick a move in a game.
pub trait Agent {
    /// Select a placement for the side to move, or `None` if the game is
    /// already over.
    fn select_move(&mut self, state: &GameState) -> Option<Coord>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
