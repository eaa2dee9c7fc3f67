//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Smallest supported board side
pub const MIN_SIZE: usize = 3;
/// Largest supported board side
pub const MAX_SIZE: usize = 5;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[serde(alias = "X")]
    X,
    #[serde(alias = "O")]
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// X maximizes the utility, O minimizes it
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Move for a flat row-major index on a board with side `size`
    pub fn from_index(index: usize, size: usize) -> Self {
        Move {
            row: index / size,
            col: index % size,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Game outcome, always derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "{player} wins!"),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

/// N×N board.
///
/// The board never records whose turn it is: the player to move is derived
/// from the piece counts, so boards rebuilt from strings, from a replayed
/// history or after an undo always agree on the turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with side `size` (3, 4 or 5)
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        Self::check_size(size)?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    fn check_size(size: usize) -> Result<(), crate::Error> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(crate::Error::UnsupportedSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            })
        }
    }

    /// Side length for a flat cell count, if it is a supported square.
    fn size_for_len(len: usize) -> Option<usize> {
        (MIN_SIZE..=MAX_SIZE).find(|size| size * size == len)
    }

    /// Build a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not 9, 16 or 25, or the piece
    /// counts break the X-moves-first invariant.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self, crate::Error> {
        let size = Self::size_for_len(cells.len()).ok_or_else(|| {
            crate::Error::InvalidBoardLength {
                got: cells.len(),
                context: "cell vector".to_string(),
            }
        })?;

        let board = Board { size, cells };
        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        Ok(board)
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace and `/` row separators are ignored; the remaining characters
    /// must number 9, 16 or 25, which fixes the board side. `X`, `O` and `.`
    /// (also `_` or `-`) mark the cells.
    ///
    /// # Errors
    ///
    /// Returns error if the length is not a supported square, a character is
    /// not a valid cell, or the piece counts are invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if Self::size_for_len(chars.len()).is_none() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let cells = chars
            .iter()
            .enumerate()
            .map(|(position, &character)| {
                Cell::from_char(character).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_cells(cells)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index_of(&self, mv: Move) -> Result<usize, crate::Error> {
        if mv.row >= self.size || mv.col >= self.size {
            return Err(crate::Error::OutOfRange {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        Ok(mv.row * self.size + mv.col)
    }

    /// Cell at a move's coordinates
    pub fn get(&self, mv: Move) -> Result<Cell, crate::Error> {
        self.index_of(mv).map(|idx| self.cells[idx])
    }

    /// Cell at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, crate::Error> {
        self.get(Move::new(row, col))
    }

    /// The player whose turn it is: X when both have placed the same number
    /// of marks, O otherwise.
    pub fn current_player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// No empty cells remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Every empty cell, in row-major order.
    ///
    /// Search relies on this order for its first-found tie-break.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i, self.size))
            .collect()
    }

    /// Place the current player's mark and return the new board
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board, crate::Error> {
        let idx = self.index_of(mv)?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = self.clone();
        next.cells[idx] = self.current_player().to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, self.size, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::completed_line(&self.cells, self.size).map(|(player, _)| player)
    }

    /// The first completed line and its owner, as board coordinates
    pub fn winning_line(&self) -> Option<(Player, Vec<Move>)> {
        LineAnalyzer::completed_line(&self.cells, self.size).map(|(player, line)| {
            let moves = line
                .indices()
                .map(|idx| Move::from_index(idx, self.size))
                .collect();
            (player, moves)
        })
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 when X has won, -1 when O has won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Compact single-line encoding with `/` between rows, accepted by
    /// [`Board::from_string`].
    pub fn encode(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        for size in MIN_SIZE..=MAX_SIZE {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.cells().len(), size * size);
            assert!(board.cells().iter().all(|&c| c == Cell::Empty));
            assert_eq!(board.current_player(), Player::X);
        }
    }

    #[test]
    fn test_unsupported_sizes() {
        assert!(matches!(
            Board::new(2),
            Err(crate::Error::UnsupportedSize { size: 2, .. })
        ));
        assert!(Board::new(6).is_err());
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new(3).unwrap();

        let next = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(next.cell(1, 1).unwrap(), Cell::X);
        assert_eq!(next.current_player(), Player::O);
        assert_eq!(board.cell(1, 1).unwrap(), Cell::Empty);

        let err = next.apply_move(Move::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let board = Board::new(4).unwrap();
        let err = board.apply_move(Move::new(0, 4)).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::OutOfRange {
                row: 0,
                col: 4,
                size: 4
            }
        ));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_string("X.O/.X./O..").unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(board.current_player(), Player::X);

        board = board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Player::O);

        board = board.apply_move(Move::new(0, 1)).unwrap();
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_win_detection_anti_diagonal() {
        let board = Board::from_string("OOX/.X./X..").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 1);
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_o_win_utility() {
        let board = Board::from_string("XX./OOO/X.X").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_winning_line_coordinates() {
        let board = Board::from_string("XOO./X.../X.O./X...").unwrap();
        let (player, line) = board.winning_line().unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(
            line,
            vec![
                Move::new(0, 0),
                Move::new(1, 0),
                Move::new(2, 0),
                Move::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
        assert!(matches!(
            Board::from_string("XX......."),
            Err(crate::Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            })
        ));
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO.. .X.. ..O. ....").unwrap();
        assert_eq!(board.encode(), "XO../.X../..O./....");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O....").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\n...");
    }
}
