//! Pixel layout of a board for presentation layers
//!
//! Geometry travels alongside the board it describes. Two games of different
//! sizes each carry their own `BoardGeometry`, so nothing about the layout is
//! process-wide.

use serde::Serialize;

use super::board::{Board, Move};

/// Default board width in pixels
pub const DEFAULT_BOARD_WIDTH: u32 = 400;

/// Square-cell layout of an N×N board drawn `board_width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardGeometry {
    size: usize,
    board_width: u32,
    cell_size: u32,
}

impl BoardGeometry {
    /// Layout for a board of side `size` drawn `board_width` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns error if the board is narrower than one pixel per cell.
    pub fn new(size: usize, board_width: u32) -> Result<Self, crate::Error> {
        let cell_size = u32::try_from(size)
            .ok()
            .filter(|&n| n > 0)
            .map(|n| board_width / n)
            .unwrap_or(0);
        if cell_size == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "board width {board_width}px cannot fit {size} cells per row"
                ),
            });
        }

        Ok(BoardGeometry {
            size,
            board_width,
            cell_size,
        })
    }

    /// Layout matching a board's size
    pub fn for_board(board: &Board, board_width: u32) -> Result<Self, crate::Error> {
        Self::new(board.size(), board_width)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn board_width(&self) -> u32 {
        self.board_width
    }

    /// Side of one square cell in pixels
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Height of the playing area in pixels
    pub fn board_height(&self) -> u32 {
        self.cell_size * self.size as u32
    }

    /// Map a pointer position to the cell under it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfRange`] when the position falls outside
    /// the grid, such as the strip below the board or the right-hand margin
    /// left over by integer division.
    pub fn cell_at(&self, x: u32, y: u32) -> Result<Move, crate::Error> {
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        if row >= self.size || col >= self.size {
            return Err(crate::Error::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(Move::new(row, col))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, mv: Move) -> (u32, u32) {
        (
            mv.col as u32 * self.cell_size,
            mv.row as u32 * self.cell_size,
        )
    }

    /// Center pixel of a cell
    pub fn cell_center(&self, mv: Move) -> (u32, u32) {
        let (x, y) = self.cell_origin(mv);
        (x + self.cell_size / 2, y + self.cell_size / 2)
    }
}
