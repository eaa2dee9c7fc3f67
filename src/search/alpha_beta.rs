//! Minimax with alpha-beta pruning

use super::{
    Evaluation, NEG_INFINITY, POS_INFINITY, Score, SearchEngine, SearchStats, check_side,
    log_search,
};
use crate::tictactoe::Board;

/// Exhaustive minimax with alpha-beta cut-offs.
///
/// `alpha` is the score the maximizer is already guaranteed, `beta` the score
/// the minimizer is already guaranteed. Once `beta <= alpha` the remaining
/// siblings cannot change the result at the root and are skipped. Scores of
/// cut-off subtrees are bounds rather than exact values, but the root score
/// and the first optimal root move match [`super::Minimax`].
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        maximizing: bool,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
    ) -> Evaluation {
        self.stats.visit(depth);

        if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            return Evaluation::leaf(board);
        }

        let mut best_move = None;

        if maximizing {
            let mut best_value = NEG_INFINITY;
            for mv in board.legal_moves() {
                let Ok(next) = board.apply_move(mv) else {
                    continue;
                };
                let value = self.alpha_beta(&next, false, depth + 1, alpha, beta).score;
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Evaluation {
                score: best_value,
                best_move,
            }
        } else {
            let mut best_value = POS_INFINITY;
            for mv in board.legal_moves() {
                let Ok(next) = board.apply_move(mv) else {
                    continue;
                };
                let value = self.alpha_beta(&next, true, depth + 1, alpha, beta).score;
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Evaluation {
                score: best_value,
                best_move,
            }
        }
    }
}

impl SearchEngine for AlphaBeta {
    fn search(&mut self, board: &Board, maximizing: bool) -> Evaluation {
        check_side(board, maximizing, self.name());
        self.stats = SearchStats::default();
        let evaluation = self.alpha_beta(board, maximizing, 0, NEG_INFINITY, POS_INFINITY);
        log_search(self.name(), &evaluation, &self.stats);
        evaluation
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn name(&self) -> &'static str {
        "alpha-beta"
    }
}
