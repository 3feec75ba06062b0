use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Coord, GameState};

use super::agent::Agent;

/// An agent that picks uniformly at random from the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Coord> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchConfig;
    use crate::game::GameState;

    #[test]
    fn test_selects_legal_moves() {
        let mut agent = RandomAgent::new();
        let state = GameState::new(SearchConfig::connect_four().board());
        let legal = state.legal_moves();

        for _ in 0..100 {
            let at = agent.select_move(&state).unwrap();
            assert!(legal.contains(&at), "move {at:?} is not legal");
        }
    }

    #[test]
    fn test_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::new(SearchConfig::connect_four().board());

        let mut turn = 0;
        while !state.is_terminal() {
            let agent = if turn % 2 == 0 { &mut agent1 } else { &mut agent2 };
            let at = agent.select_move(&state).unwrap();
            state.apply_move_mut(at).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
