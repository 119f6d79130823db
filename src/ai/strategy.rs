use crate::error::SearchError;
use crate::game::{Board, Player};

/// Universal interface for anything that picks columns.
///
/// A strategy is bound to one side for its whole lifetime and must leave
/// the board it is handed untouched.
pub trait Strategy: Send {
    /// Select a legal column for `side()` on `board`.
    fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;

    /// The side this strategy plays.
    fn side(&self) -> Player;
}
