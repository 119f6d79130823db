//! # Connect Four Search
//!
//! Adversarial search for Connect Four: a board with gravity and win
//! detection, a static window evaluator, and a depth-limited minimax
//! searcher that runs with or without alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, game state
//! - [`ai`]: Strategy trait, evaluators, minimax/alpha-beta, random baseline
//! - [`arena`]: Match driver and result tally
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
