//! Game-tree search over N×N boards
//!
//! Both engines walk the full tree from the given board down to terminal
//! positions, reading the win/lose/draw utility only at the leaves. Moves are
//! tried in row-major order and a child only replaces the current best when
//! it is strictly better, so among equally good moves the first one in
//! row-major order is returned.
//!
//! - [`Minimax`]: plain exhaustive minimax
//! - [`AlphaBeta`]: the same search with alpha-beta cut-offs
//!
//! Neither engine keeps a transposition table or reorders moves. A search
//! from an empty 5×5 board is far beyond interactive reach.

pub mod alpha_beta;
pub mod minimax;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Move};

pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;

/// Minimax score of a position: +1 X wins, -1 O wins, 0 draw
pub type Score = i32;

/// Stand-in for -∞ at the root of a search
pub const NEG_INFINITY: Score = Score::MIN;
/// Stand-in for +∞ at the root of a search
pub const POS_INFINITY: Score = Score::MAX;

/// Result of searching one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub score: Score,
    /// `None` when the searched board was already terminal
    pub best_move: Option<Move>,
}

impl Evaluation {
    fn leaf(board: &Board) -> Self {
        Evaluation {
            score: board.utility(),
            best_move: None,
        }
    }
}

/// Counters collected while searching one position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, root included
    pub nodes: u64,
    /// Visited positions that were terminal
    pub terminal_nodes: u64,
    /// Sibling loops abandoned by a cut-off
    pub cutoffs: u64,
    /// Deepest ply reached below the root
    pub max_depth: usize,
}

impl SearchStats {
    fn visit(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }
}

/// A search algorithm that picks moves for either side.
pub trait SearchEngine {
    /// Search `board` with X maximizing when `maximizing` is true and O
    /// minimizing otherwise.
    fn search(&mut self, board: &Board, maximizing: bool) -> Evaluation;

    /// Counters from the most recent [`SearchEngine::search`] call
    fn stats(&self) -> SearchStats;

    fn name(&self) -> &'static str;
}

/// Which search algorithm to run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    Minimax,
    #[default]
    AlphaBeta,
}

impl EngineKind {
    /// Creates a boxed engine for this kind
    pub fn into_engine(self) -> Box<dyn SearchEngine> {
        match self {
            EngineKind::Minimax => Box::new(Minimax::new()),
            EngineKind::AlphaBeta => Box::new(AlphaBeta::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Minimax => "minimax",
            EngineKind::AlphaBeta => "alpha-beta",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best move for the maximizing (X) or minimizing (O) side, found with
/// alpha-beta search.
///
/// A terminal board yields its utility and no move.
pub fn best_move(board: &Board, maximizing: bool) -> Evaluation {
    AlphaBeta::new().search(board, maximizing)
}

/// Best move for whichever side is to move on `board`.
pub fn best_move_for_side_to_move(board: &Board) -> Evaluation {
    best_move(board, board.current_player().is_maximizing())
}

/// Warn when the caller's maximizing flag contradicts the piece counts. The
/// search still runs as asked; marks are always placed for the side to move.
fn check_side(board: &Board, maximizing: bool, engine: &'static str) {
    if board.is_terminal() {
        return;
    }
    let to_move = board.current_player();
    if to_move.is_maximizing() != maximizing {
        tracing::warn!(
            engine,
            %to_move,
            maximizing,
            "search side disagrees with the player to move"
        );
    }
}

fn log_search(engine: &'static str, evaluation: &Evaluation, stats: &SearchStats) {
    tracing::debug!(
        engine,
        score = evaluation.score,
        best_move = ?evaluation.best_move,
        nodes = stats.nodes,
        terminal_nodes = stats.terminal_nodes,
        cutoffs = stats.cutoffs,
        max_depth = stats.max_depth,
        "search finished"
    );
}
