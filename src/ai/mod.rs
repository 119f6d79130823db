//! Move selection: the `Strategy` trait, static evaluators, the
//! minimax/alpha-beta searcher and a random baseline.

pub mod evaluator;
pub mod minimax;
mod random;
mod strategy;

pub use evaluator::{Evaluator, PatternEvaluator, PatternWeights, ThreatEvaluator, WindowPattern};
pub use minimax::{
    MinimaxStrategy, MoveOrder, SearchConfig, SearchOutcome, SearchStats, Window, DEFAULT_DEPTH,
    WIN_SCORE,
};
pub use random::RandomStrategy;
pub use strategy::Strategy;
