use crate::game::Player;

use super::game::GameRecord;

/// Running results over a series of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchTally {
    wins_one: usize,
    wins_two: usize,
    draws: usize,
    total_plies: usize,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        match record.winner() {
            Some(Player::One) => self.wins_one += 1,
            Some(Player::Two) => self.wins_two += 1,
            None => self.draws += 1,
        }
        self.total_plies += record.moves.len();
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::One => self.wins_one,
            Player::Two => self.wins_two,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn total_games(&self) -> usize {
        self.wins_one + self.wins_two + self.draws
    }

    /// Fraction of games won by `player`, 0.0 before any game.
    pub fn win_rate(&self, player: Player) -> f32 {
        match self.total_games() {
            0 => 0.0,
            n => self.wins(player) as f32 / n as f32,
        }
    }

    /// Average plies per game, 0.0 before any game.
    pub fn average_game_length(&self) -> f32 {
        match self.total_games() {
            0 => 0.0,
            n => self.total_plies as f32 / n as f32,
        }
    }
}
