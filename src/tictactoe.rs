//! Generalized N×N Tic-Tac-Toe

pub mod board;
pub mod game;
pub mod geometry;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, MAX_SIZE, MIN_SIZE, Move, Outcome, Player};
pub use game::Game;
pub use geometry::{BoardGeometry, DEFAULT_BOARD_WIDTH};
pub use lines::{Line, LineAnalyzer};
