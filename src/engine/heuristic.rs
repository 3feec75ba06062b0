use crate::game::{Board, Cell, Player};

/// Trait for statically scoring a non-terminal board from a player's
/// perspective. Positive favors `player`.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default evaluator: scans every window of `win_length` consecutive cells in
/// all four orientations, plus a center-column occupancy bonus.
pub struct WindowHeuristic {
    center_bonus: i32,
}

impl WindowHeuristic {
    pub fn new(center_bonus: i32) -> Self {
        WindowHeuristic { center_bonus }
    }

    /// Score one window for one side. A window the opponent has entered is
    /// dead and scores 0 no matter how many own tokens it holds; otherwise
    /// the score grows by a factor of ten per own token (1, 10, 100, ...).
    fn score_window(own: usize, opp: usize) -> i32 {
        if opp > 0 || own == 0 {
            0
        } else {
            10_i32.pow(own as u32 - 1)
        }
    }
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        WindowHeuristic::new(3)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus
        let center = board.cols() / 2;
        for row in 0..board.rows() {
            let cell = board.get(row, center);
            if cell == own_cell {
                score += self.center_bonus;
            } else if cell == opp_cell {
                score -= self.center_bonus;
            }
        }

        // Window scan: right, down, down-right, down-left.
        let n = board.win_length() as isize;
        const DIRS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        for row in 0..board.rows() as isize {
            for col in 0..board.cols() as isize {
                for (dr, dc) in DIRS {
                    let end_row = row + (n - 1) * dr;
                    let end_col = col + (n - 1) * dc;
                    if end_row >= board.rows() as isize
                        || end_col < 0
                        || end_col >= board.cols() as isize
                    {
                        continue;
                    }

                    let mut own = 0;
                    let mut opp = 0;
                    for k in 0..n {
                        match board.get((row + k * dr) as usize, (col + k * dc) as usize) {
                            c if c == own_cell => own += 1,
                            c if c == opp_cell => opp += 1,
                            Cell::Empty => {}
                            _ => unreachable!(),
                        }
                    }
                    score += Self::score_window(own, opp);
                    score -= Self::score_window(opp, own);
                }
            }
        }

        score
    }
}
