use serde::{Deserialize, Serialize};

use crate::game::{windows, Board, Cell, Player, CONNECT, ROWS};

/// Static evaluation of a position from one side's point of view.
/// Higher is better for `player`.
pub trait Evaluator: Send {
    fn score(&self, board: &Board, player: Player) -> i32;

    fn name(&self) -> &str;
}

/// The contents of one window, counted from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPattern {
    pub own: usize,
    pub empty: usize,
}

impl WindowPattern {
    fn count(board: &Board, window: &[(usize, usize); CONNECT], own_cell: Cell) -> Self {
        let mut pattern = WindowPattern { own: 0, empty: 0 };
        for &(row, col) in window {
            match board.get(row, col) {
                Cell::Empty => pattern.empty += 1,
                c if c == own_cell => pattern.own += 1,
                _ => {}
            }
        }
        pattern
    }
}

/// Scores for windows holding only one side's pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternWeights {
    /// Four own pieces.
    pub four: i32,
    /// Three own pieces and one empty cell.
    pub three: i32,
    /// Two own pieces and two empty cells.
    pub two: i32,
    /// One own piece and three empty cells.
    pub one: i32,
}

impl Default for PatternWeights {
    fn default() -> Self {
        PatternWeights {
            four: 100,
            three: 10,
            two: 5,
            one: 1,
        }
    }
}

impl PatternWeights {
    /// The weights as an ordered pattern table, strongest pattern first.
    pub fn table(&self) -> [(WindowPattern, i32); CONNECT] {
        [
            (WindowPattern { own: 4, empty: 0 }, self.four),
            (WindowPattern { own: 3, empty: 1 }, self.three),
            (WindowPattern { own: 2, empty: 2 }, self.two),
            (WindowPattern { own: 1, empty: 3 }, self.one),
        ]
    }

    /// Weight of a single window; 0 for any pattern not in the table.
    pub fn weight(&self, pattern: WindowPattern) -> i32 {
        self.table()
            .iter()
            .find(|(p, _)| *p == pattern)
            .map_or(0, |&(_, w)| w)
    }
}

/// Symmetric window evaluator: scores every window once for each side and
/// returns the difference.
#[derive(Debug, Clone, Default)]
pub struct PatternEvaluator {
    weights: PatternWeights,
}

impl PatternEvaluator {
    pub fn new(weights: PatternWeights) -> Self {
        PatternEvaluator { weights }
    }

    /// Sum of window weights for one side, ignoring the opponent's windows.
    pub fn pattern_score(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        windows()
            .map(|window| self.weights.weight(WindowPattern::count(board, &window, own_cell)))
            .sum()
    }
}

impl Evaluator for PatternEvaluator {
    fn score(&self, board: &Board, player: Player) -> i32 {
        self.pattern_score(board, player) - self.pattern_score(board, player.other())
    }

    fn name(&self) -> &str {
        "pattern"
    }
}

const CENTER_COL: usize = 3;

/// Threat-oriented evaluator: rewards center control and own windows, and
/// penalizes opponent windows one move from completion. Not differenced
/// against the opponent's score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        let mut score = if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else {
            0
        };
        if opp == 3 && empty == 1 {
            score -= 4;
        }
        score
    }
}

impl Evaluator for ThreatEvaluator {
    fn score(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        // Center column bonus
        let mut score = (0..ROWS)
            .filter(|&row| board.get(row, CENTER_COL) == own_cell)
            .count() as i32
            * 3;

        for window in windows() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for &(row, col) in &window {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    _ => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        }

        score
    }

    fn name(&self) -> &str {
        "threat"
    }
}
