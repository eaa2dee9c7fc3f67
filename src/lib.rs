//! Generalized Tic-Tac-Toe with exhaustive game-tree search
//!
//! This crate provides:
//! - N×N boards (3×3 to 5×5) whose turn is derived from the marks placed
//! - Full-length row, column and diagonal win detection
//! - Minimax and alpha-beta search with a deterministic row-major tie-break
//! - Game sessions with undo/redo and pixel geometry for pointer input
//! - A terminal front end (`noughts` binary)

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod tictactoe;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use search::{
    AlphaBeta, EngineKind, Evaluation, Minimax, Score, SearchEngine, SearchStats, best_move,
    best_move_for_side_to_move,
};
pub use tictactoe::{Board, BoardGeometry, Cell, Game, Move, Outcome, Player};
