//! Core Connect Four game logic: the board with gravity and win detection,
//! the two sides, and a game record that tracks the outcome.

mod board;
mod player;
mod state;

pub use board::{line_from, windows, Board, Cell, COLS, CONNECT, DIRECTIONS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
