//! Terminal UI: game-select menu and a play view for both grid games.

mod app;
mod game_view;

pub use app::{App, GameKind};
