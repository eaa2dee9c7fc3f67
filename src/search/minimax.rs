//! Plain minimax without pruning

use super::{
    Evaluation, NEG_INFINITY, POS_INFINITY, SearchEngine, SearchStats, check_side, log_search,
};
use crate::tictactoe::Board;

/// Exhaustive minimax search.
///
/// Visits every position reachable from the root. Kept alongside
/// [`super::AlphaBeta`] as the reference the pruned search must agree with.
#[derive(Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    fn minimax(&mut self, board: &Board, maximizing: bool, depth: usize) -> Evaluation {
        self.stats.visit(depth);

        if board.is_terminal() {
            self.stats.terminal_nodes += 1;
            return Evaluation::leaf(board);
        }

        let mut best_value = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut best_move = None;

        for mv in board.legal_moves() {
            let Ok(next) = board.apply_move(mv) else {
                continue;
            };
            let value = self.minimax(&next, !maximizing, depth + 1).score;

            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_move = Some(mv);
            }
        }

        Evaluation {
            score: best_value,
            best_move,
        }
    }
}

impl SearchEngine for Minimax {
    fn search(&mut self, board: &Board, maximizing: bool) -> Evaluation {
        check_side(board, maximizing, self.name());
        self.stats = SearchStats::default();
        let evaluation = self.minimax(board, maximizing, 0);
        log_search(self.name(), &evaluation, &self.stats);
        evaluation
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}
