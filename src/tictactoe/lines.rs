//! Winning line analysis for N×N boards
//!
//! A line is a full row, a full column or one of the two main diagonals.
//! Lines shorter than the board side never win, so each line is described
//! by its first cell and a constant stride through the flat cell vector.

use super::board::{Cell, Player};

/// One full-length line of an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: usize,
    stride: usize,
    len: usize,
}

impl Line {
    /// Row `row` of a board with side `size`
    pub fn row(size: usize, row: usize) -> Self {
        Line {
            start: row * size,
            stride: 1,
            len: size,
        }
    }

    /// Column `col` of a board with side `size`
    pub fn column(size: usize, col: usize) -> Self {
        Line {
            start: col,
            stride: size,
            len: size,
        }
    }

    /// Top-left to bottom-right diagonal
    pub fn diagonal(size: usize) -> Self {
        Line {
            start: 0,
            stride: size + 1,
            len: size,
        }
    }

    /// Top-right to bottom-left diagonal
    pub fn anti_diagonal(size: usize) -> Self {
        Line {
            start: size - 1,
            stride: size - 1,
            len: size,
        }
    }

    /// Flat cell indices covered by this line, in order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |k| self.start + k * self.stride)
    }

    /// The player whose mark fills every cell of the line, if any.
    pub fn owner(self, cells: &[Cell]) -> Option<Player> {
        let first = cells[self.start].to_player()?;
        let target = first.to_cell();
        self.indices()
            .all(|idx| cells[idx] == target)
            .then_some(first)
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Every winning line of a board with side `size`: rows, then columns,
    /// then the main diagonal and the anti-diagonal.
    pub fn lines(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(move |row| Line::row(size, row))
            .chain((0..size).map(move |col| Line::column(size, col)))
            .chain([Line::diagonal(size), Line::anti_diagonal(size)])
    }

    /// First completed line in scan order, with its owner.
    pub fn completed_line(cells: &[Cell], size: usize) -> Option<(Player, Line)> {
        Self::lines(size).find_map(|line| line.owner(cells).map(|player| (player, line)))
    }

    /// Check if a player fully occupies any line
    pub fn has_won(cells: &[Cell], size: usize, player: Player) -> bool {
        Self::lines(size).any(|line| line.owner(cells) == Some(player))
    }

    /// Number of lines the player fully occupies
    pub fn completed_count(cells: &[Cell], size: usize, player: Player) -> usize {
        Self::lines(size)
            .filter(|line| line.owner(cells) == Some(player))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_has_eight_lines() {
        assert_eq!(LineAnalyzer::lines(3).count(), 8);
    }

    #[test]
    fn line_count_grows_with_board_side() {
        assert_eq!(LineAnalyzer::lines(4).count(), 10);
        assert_eq!(LineAnalyzer::lines(5).count(), 12);
    }

    #[test]
    fn diagonals_cover_expected_indices() {
        let main: Vec<usize> = Line::diagonal(4).indices().collect();
        assert_eq!(main, vec![0, 5, 10, 15]);

        let anti: Vec<usize> = Line::anti_diagonal(4).indices().collect();
        assert_eq!(anti, vec![3, 6, 9, 12]);
    }

    #[test]
    fn column_covers_every_row() {
        let col: Vec<usize> = Line::column(3, 2).indices().collect();
        assert_eq!(col, vec![2, 5, 8]);
    }

    #[test]
    fn empty_line_has_no_owner() {
        let cells = [Cell::Empty; 9];
        assert_eq!(Line::row(3, 0).owner(&cells), None);
    }

    #[test]
    fn mixed_line_has_no_owner() {
        let mut cells = [Cell::X; 9];
        cells[1] = Cell::O;
        assert_eq!(Line::row(3, 0).owner(&cells), None);
        assert_eq!(Line::row(3, 1).owner(&cells), Some(Player::X));
    }

    #[test]
    fn has_won_detects_column() {
        let mut cells = [Cell::Empty; 16];
        for row in 0..4 {
            cells[row * 4 + 1] = Cell::O;
        }
        assert!(LineAnalyzer::has_won(&cells, 4, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, 4, Player::X));
    }

    #[test]
    fn partial_run_does_not_win_on_larger_board() {
        // Three in a row is not enough on a 4x4 board
        let mut cells = [Cell::Empty; 16];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;
        assert!(!LineAnalyzer::has_won(&cells, 4, Player::X));
    }

    #[test]
    fn completed_line_reports_rows_before_columns() {
        let cells = [Cell::X; 9];
        let (player, line) = LineAnalyzer::completed_line(&cells, 3).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(line, Line::row(3, 0));
        assert_eq!(LineAnalyzer::completed_count(&cells, 3, Player::X), 8);
    }
}
