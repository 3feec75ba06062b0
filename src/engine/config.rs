use crate::game::{Board, Placement};

/// Immutable parameters for one engine instance. The same driver serves both
/// game variants; only this bundle differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub placement: Placement,
    /// Ply limit for the search, or `None` to search to terminal states.
    /// A finite limit also enables the pre-search win/block shortcut.
    pub max_depth: Option<usize>,
    /// Magnitude of the win sentinel; wins score `win_score - depth`.
    pub win_score: i32,
}

impl SearchConfig {
    /// 3x3 free placement, searched exhaustively.
    pub fn tic_tac_toe() -> Self {
        SearchConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            placement: Placement::Anywhere,
            max_depth: None,
            win_score: 10,
        }
    }

    /// 6x7 gravity board, depth-bounded with static evaluation at the cutoff.
    pub fn connect_four() -> Self {
        SearchConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            placement: Placement::Gravity,
            max_depth: Some(5),
            win_score: 100_000,
        }
    }

    /// An empty board matching this configuration.
    pub fn board(&self) -> Board {
        Board::new(self.rows, self.cols, self.win_length, self.placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let ttt = SearchConfig::tic_tac_toe();
        assert_eq!((ttt.rows, ttt.cols, ttt.win_length), (3, 3, 3));
        assert_eq!(ttt.max_depth, None);

        let c4 = SearchConfig::connect_four();
        assert_eq!((c4.rows, c4.cols, c4.win_length), (6, 7, 4));
        assert_eq!(c4.max_depth, Some(5));
        assert_eq!(c4.placement, Placement::Gravity);
    }

    #[test]
    fn test_board_matches_config() {
        let board = SearchConfig::connect_four().board();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
        assert_eq!(board.win_length(), 4);
        assert!(board.is_empty());
    }
}
