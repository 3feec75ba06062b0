use crate::game::{Board, BoardStatus, Coord, Player};

use super::config::SearchConfig;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Result of a search: the chosen placement and its score. `coord` is `None`
/// when the board was already terminal and no legal move existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMove {
    pub coord: Option<Coord>,
    pub score: i32,
}

/// Minimax search driver with alpha-beta pruning.
///
/// The engine explores by mutating the caller's board in place and always
/// restores it before returning; permanently applying the chosen move is the
/// caller's job.
pub struct Engine {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl Engine {
    pub fn new(config: SearchConfig) -> Self {
        Engine {
            config,
            heuristic: Box::new(WindowHeuristic::default()),
        }
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        Engine { config, heuristic }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score of an immediate win found before searching.
    fn shortcut_win_score(&self) -> i32 {
        self.config.win_score * 10
    }

    /// Floor score assigned to blocking an opponent's one-ply win. Only a
    /// strictly greater searched score overrides the block.
    fn block_score(&self) -> i32 {
        self.config.win_score - self.config.win_score / 10
    }

    /// Find the best move for `ai` on a board where `ai` is to move.
    ///
    /// With a finite depth limit configured, two tactical checks run first:
    /// a move that wins on the spot is returned immediately, and a move that
    /// denies the opponent a win on their next turn becomes a provisional
    /// answer that the full search must strictly beat.
    pub fn find_best_move(&self, board: &mut Board, ai: Player) -> SearchMove {
        // Already-terminal boards are a predictable boundary condition, not a
        // failure: report that no move exists.
        if board.status() != BoardStatus::Ongoing {
            return SearchMove {
                coord: None,
                score: 0,
            };
        }
        let legal = board.legal_moves();

        let mut best: Option<Coord> = None;
        let mut best_score = i32::MIN;

        if self.config.max_depth.is_some() {
            if let Some(at) = self.winning_move(board, &legal, ai) {
                return SearchMove {
                    coord: Some(at),
                    score: self.shortcut_win_score(),
                };
            }
            if let Some(at) = self.winning_move(board, &legal, ai.other()) {
                best = Some(at);
                best_score = self.block_score();
            }
        }

        for &at in &legal {
            let score =
                board.with_move(at, ai, |b| self.minimax(b, ai, 1, i32::MIN, i32::MAX, false));
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(at);
            }
        }

        // Unreachable when at least one move was scored above; kept as the
        // documented fallback: center-most legal move, else the first.
        let coord = best.or_else(|| {
            let center = self.config.cols / 2;
            legal
                .iter()
                .copied()
                .find(|c| c.col == center)
                .or_else(|| legal.first().copied())
        });

        SearchMove {
            coord,
            score: best_score,
        }
    }

    /// A legal move that completes a winning line for `player`, if any.
    fn winning_move(&self, board: &mut Board, legal: &[Coord], player: Player) -> Option<Coord> {
        legal
            .iter()
            .copied()
            .find(|&at| board.with_move(at, player, |b| b.has_win(player)))
    }

    /// Recursive minimax. `depth` is the ply distance from the root move;
    /// `maximizing` is true when `ai` is on the move.
    fn minimax(
        &self,
        board: &mut Board,
        ai: Player,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        // A position reached by the previous move may already be decided, so
        // the terminal check comes before anything else.
        match board.status() {
            BoardStatus::Won(winner) if winner == ai => return self.config.win_score - depth,
            BoardStatus::Won(_) => return -self.config.win_score + depth,
            BoardStatus::Draw => return 0,
            BoardStatus::Ongoing => {}
        }

        if let Some(limit) = self.config.max_depth {
            if depth as usize >= limit {
                return self.heuristic.evaluate(board, ai);
            }
        }

        let mover = if maximizing { ai } else { ai.other() };

        if maximizing {
            let mut best = i32::MIN;
            for at in board.legal_moves() {
                let score = board.with_move(at, mover, |b| {
                    self.minimax(b, ai, depth + 1, alpha, beta, false)
                });
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for at in board.legal_moves() {
                let score = board.with_move(at, mover, |b| {
                    self.minimax(b, ai, depth + 1, alpha, beta, true)
                });
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
