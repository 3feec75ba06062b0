//! Core game logic shared by both grid games: board representation, player
//! types, and the turn-taking state machine.

mod board;
mod player;
mod state;

pub use board::{Board, BoardStatus, Cell, Coord, Placement};
pub use player::Player;
pub use state::{GameOutcome, GameState};
