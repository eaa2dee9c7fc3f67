//! Board reachability checks
//!
//! Every constructor already enforces the piece-count invariant. These checks
//! go further and reject boards that could not arise from legal play, such
//! as both players owning a line or a win followed by more moves.

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check if the board could be reached by legal alternating play from an
    /// empty board with X moving first.
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all lines completed by a player share at least one cell.
    ///
    /// A single move can complete several lines only through the cell it
    /// occupies, so disjoint completed lines mean play continued after a win.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let completed: Vec<Vec<usize>> = LineAnalyzer::lines(self.size())
            .filter(|line| line.owner(self.cells()) == Some(player))
            .map(|line| line.indices().collect())
            .collect();

        if completed.len() < 2 {
            return true;
        }

        (0..self.cells().len()).any(|pos| completed.iter().all(|line| line.contains(&pos)))
    }
}
