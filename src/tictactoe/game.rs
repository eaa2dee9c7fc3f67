//! High-level game management

use tracing::info;

use super::board::{Board, Move, Outcome, Player};
use crate::search::SearchEngine;

/// A game in progress with undo/redo history.
///
/// The current board is always the initial board with `moves` replayed on
/// top, so the player to move after an undo is recomputed from the marks on
/// the board like everywhere else.
#[derive(Debug, Clone)]
pub struct Game {
    initial: Board,
    current: Board,
    moves: Vec<Move>,
    undone: Vec<Move>,
}

impl Game {
    /// Start a game on an empty board of side `size`
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Continue play from an existing position
    pub fn from_board(board: Board) -> Self {
        Game {
            initial: board.clone(),
            current: board,
            moves: Vec::new(),
            undone: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    /// Moves played since the initial board, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn current_player(&self) -> Player {
        self.current.current_player()
    }

    pub fn outcome(&self) -> Outcome {
        self.current.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.current.is_terminal()
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has ended, and the
    /// board's errors for occupied or out-of-range cells.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current_player();
        self.current = self.current.apply_move(mv)?;
        self.moves.push(mv);
        self.undone.clear();

        let outcome = self.outcome();
        info!(%player, %mv, ply = self.moves.len(), "move played");
        if outcome != Outcome::InProgress {
            info!(%outcome, "game over");
        }
        Ok(outcome)
    }

    /// Let a search engine pick and play the move for the side to move.
    ///
    /// X searches as the maximizer and O as the minimizer. Returns the move
    /// played, or `None` if the engine found nothing to play.
    pub fn play_engine_move(
        &mut self,
        engine: &mut dyn SearchEngine,
    ) -> Result<Option<Move>, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let maximizing = self.current_player().is_maximizing();
        let evaluation = engine.search(&self.current, maximizing);
        match evaluation.best_move {
            Some(mv) => {
                self.play(mv)?;
                Ok(Some(mv))
            }
            None => Ok(None),
        }
    }

    fn replay(&self, moves: &[Move]) -> Result<Board, crate::Error> {
        moves
            .iter()
            .try_fold(self.initial.clone(), |board, &mv| board.apply_move(mv))
    }

    /// Take back the most recent move.
    pub fn undo(&mut self) -> Result<Move, crate::Error> {
        let mv = self.moves.pop().ok_or(crate::Error::NothingToUndo)?;
        self.current = self.replay(&self.moves)?;
        self.undone.push(mv);
        info!(%mv, ply = self.moves.len(), "move undone");
        Ok(mv)
    }

    /// Replay the most recently undone move.
    pub fn redo(&mut self) -> Result<Move, crate::Error> {
        let mv = *self.undone.last().ok_or(crate::Error::NothingToRedo)?;
        self.current = self.current.apply_move(mv)?;
        self.undone.pop();
        self.moves.push(mv);
        info!(%mv, ply = self.moves.len(), "move redone");
        Ok(mv)
    }

    /// Back to the initial board with an empty history
    pub fn restart(&mut self) {
        self.current = self.initial.clone();
        self.moves.clear();
        self.undone.clear();
        info!(size = self.initial.size(), "game restarted");
    }

    /// Board after each move, starting with the initial board
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial.clone();
        states.push(board.clone());
        for &mv in &self.moves {
            board = board.apply_move(mv)?;
            states.push(board.clone());
        }
        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{AlphaBeta, Minimax};
    use crate::tictactoe::Cell;

    #[test]
    fn play_alternates_players() {
        let mut game = Game::new(3).unwrap();
        game.play(Move::new(0, 0)).unwrap();
        game.play(Move::new(1, 1)).unwrap();
        assert_eq!(game.board().cell(0, 0).unwrap(), Cell::X);
        assert_eq!(game.board().cell(1, 1).unwrap(), Cell::O);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn rejected_move_leaves_history_untouched() {
        let mut game = Game::new(3).unwrap();
        game.play(Move::new(0, 0)).unwrap();
        assert!(game.play(Move::new(0, 0)).is_err());
        assert!(game.play(Move::new(3, 0)).is_err());
        assert_eq!(game.moves(), &[Move::new(0, 0)]);
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn no_moves_after_game_over() {
        let mut game = Game::from_board(Board::from_string("XX./OO./...").unwrap());
        assert_eq!(game.play(Move::new(0, 2)).unwrap(), Outcome::Win(Player::X));
        assert!(matches!(
            game.play(Move::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
        let mut engine = AlphaBeta::new();
        assert!(matches!(
            game.play_engine_move(&mut engine),
            Err(crate::Error::GameOver)
        ));
    }

    #[test]
    fn undo_and_redo_restore_positions() {
        let mut game = Game::new(3).unwrap();
        game.play(Move::new(1, 1)).unwrap();
        game.play(Move::new(0, 0)).unwrap();
        let after_two = game.board().clone();

        assert_eq!(game.undo().unwrap(), Move::new(0, 0));
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.board().cell(0, 0).unwrap(), Cell::Empty);

        assert_eq!(game.redo().unwrap(), Move::new(0, 0));
        assert_eq!(game.board(), &after_two);
        assert!(matches!(game.redo(), Err(crate::Error::NothingToRedo)));
    }

    #[test]
    fn new_move_clears_redo_stack() {
        let mut game = Game::new(3).unwrap();
        game.play(Move::new(1, 1)).unwrap();
        game.undo().unwrap();
        game.play(Move::new(0, 0)).unwrap();
        assert!(matches!(game.redo(), Err(crate::Error::NothingToRedo)));
    }

    #[test]
    fn undo_on_fresh_game_fails() {
        let mut game = Game::new(4).unwrap();
        assert!(matches!(game.undo(), Err(crate::Error::NothingToUndo)));
    }

    #[test]
    fn restart_returns_to_initial_board() {
        let start = Board::from_string("X.../..../..../...O").unwrap();
        let mut game = Game::from_board(start.clone());
        game.play(Move::new(1, 1)).unwrap();
        game.restart();
        assert_eq!(game.board(), &start);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn engine_move_completes_winning_row() {
        let mut game = Game::from_board(Board::from_string("XX./OO./...").unwrap());
        let mut engine = Minimax::new();
        let mv = game.play_engine_move(&mut engine).unwrap();
        assert_eq!(mv, Some(Move::new(0, 2)));
        assert_eq!(game.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn state_sequence_includes_initial_board() {
        let mut game = Game::new(3).unwrap();
        game.play(Move::new(0, 0)).unwrap();
        game.play(Move::new(0, 1)).unwrap();
        let states = game.state_sequence().unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states[0], Board::new(3).unwrap());
        assert_eq!(&states[2], game.board());
    }
}
