use crate::engine::{Engine, Heuristic, SearchConfig};
use crate::game::{Coord, GameState};

use super::agent::Agent;

/// Agent backed by the minimax search engine. Searches on a scratch copy of
/// the game board so the live game state is never disturbed.
pub struct MinimaxAgent {
    engine: Engine,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        MinimaxAgent {
            engine: Engine::new(config),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            engine: Engine::with_heuristic(config, heuristic),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Coord> {
        if state.is_terminal() {
            return None;
        }
        let mut board = state.board().clone();
        self.engine
            .find_best_move(&mut board, state.current_player())
            .coord
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
