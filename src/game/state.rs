use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress: the board, its outcome once decided, and the
/// columns played so far.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    outcome: Option<GameOutcome>,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            outcome: None,
            moves: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.board.turn()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns played so far, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Get list of legal columns (not full)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves()
    }

    /// Play a column for the current player and update the outcome.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let row = self.board.place(column)?;
        self.moves.push(column);

        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
