//! Match driver: plays strategies against each other and tallies results.

mod game;
mod tally;

pub use game::{play_game, play_game_with, GameRecord};
pub use tally::MatchTally;
