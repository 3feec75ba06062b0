//! Adversarial search: minimax with alpha-beta pruning over a shared mutable
//! board. One driver serves both the exhaustive 3x3 game and the depth-bounded
//! Connect Four game; they differ only in their [`SearchConfig`].

mod config;
mod heuristic;
mod search;

pub use config::SearchConfig;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use search::{Engine, SearchMove};
