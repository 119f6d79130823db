use std::path::PathBuf;

use crate::game::Player;

/// Errors from applying a move to a board or game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors a strategy can report instead of a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Errors that can occur while playing a match between two strategies.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{side} could not choose a move: {source}")]
    Search { side: Player, source: SearchError },

    #[error("{side} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        side: Player,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("strategy '{name}' plays as {bound} but was seated as {seat}")]
    SideMismatch {
        name: String,
        bound: Player,
        seat: Player,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
