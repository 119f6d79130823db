use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::strategy::Strategy;

/// A strategy that selects uniformly at random from legal columns.
pub struct RandomStrategy {
    side: Player,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(side: Player) -> Self {
        RandomStrategy {
            side,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(side: Player, seed: u64) -> Self {
        RandomStrategy {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn side(&self) -> Player {
        self.side
    }
}
