use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::evaluator::{Evaluator, PatternEvaluator, ThreatEvaluator};
use super::strategy::Strategy;

/// Value of a position already won by the searching side.
pub const WIN_SCORE: i32 = 100_000;

pub const DEFAULT_DEPTH: usize = 4;

/// Depth of the threat-evaluator variant, see [`MinimaxStrategy::threat`].
pub const THREAT_DEPTH: usize = 5;

/// Order in which a node's children are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOrder {
    #[default]
    Ascending,
    /// Center column first; yields earlier cutoffs with pruning enabled.
    CenterFirst,
}

impl MoveOrder {
    fn moves(self, board: &Board) -> Vec<usize> {
        match self {
            MoveOrder::Ascending => board.legal_moves(),
            MoveOrder::CenterFirst => board.legal_moves_center_first(),
        }
    }
}

/// Search parameters. `pruning: false` is plain minimax, `pruning: true`
/// is alpha-beta; both return the same value and, for the same move
/// order, the same column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    pub pruning: bool,
    pub move_order: MoveOrder,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: true,
            move_order: MoveOrder::Ascending,
        }
    }
}

/// Bounds of the values still relevant to the ancestors of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    pub fn unbounded() -> Self {
        Window {
            alpha: i32::MIN,
            beta: i32::MAX,
        }
    }
}

/// Result of searching one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub value: i32,
    /// `None` at terminal and depth-limited nodes.
    pub best_move: Option<usize>,
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax player, with optional alpha-beta pruning.
pub struct MinimaxStrategy {
    side: Player,
    config: SearchConfig,
    evaluator: Box<dyn Evaluator>,
    stats: SearchStats,
}

impl MinimaxStrategy {
    pub fn new(side: Player, config: SearchConfig) -> Self {
        Self::with_evaluator(side, config, Box::new(PatternEvaluator::default()))
    }

    pub fn with_evaluator(side: Player, config: SearchConfig, evaluator: Box<dyn Evaluator>) -> Self {
        MinimaxStrategy {
            side,
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Unpruned minimax over all columns in ascending order.
    pub fn plain(side: Player, depth: usize) -> Self {
        Self::new(
            side,
            SearchConfig {
                depth,
                pruning: false,
                move_order: MoveOrder::Ascending,
            },
        )
    }

    /// Alpha-beta over all columns in ascending order.
    pub fn alpha_beta(side: Player, depth: usize) -> Self {
        Self::new(
            side,
            SearchConfig {
                depth,
                pruning: true,
                move_order: MoveOrder::Ascending,
            },
        )
    }

    /// Alpha-beta with the threat evaluator, searching center first to
    /// `THREAT_DEPTH`.
    pub fn threat(side: Player) -> Self {
        Self::with_evaluator(
            side,
            SearchConfig {
                depth: THREAT_DEPTH,
                pruning: true,
                move_order: MoveOrder::CenterFirst,
            },
            Box::new(ThreatEvaluator),
        )
    }

    /// Counters from the last `search` or `choose_move` call.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` to `depth` plies. `maximizing` is true when the node
    /// is this strategy's own move.
    ///
    /// Pieces are dropped for the side implied by `maximizing`, never for
    /// `board.turn()`, and every move is undone before returning, so the
    /// board comes back exactly as it went in.
    pub fn search(&mut self, board: &mut Board, depth: usize, maximizing: bool, window: Window) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let outcome = self.search_node(board, depth, maximizing, window, &mut stats);
        self.stats = stats;
        outcome
    }

    fn search_node(
        &self,
        board: &mut Board,
        depth: usize,
        maximizing: bool,
        mut window: Window,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        stats.nodes += 1;

        // A decided game outranks any heuristic score
        if let Some(winner) = board.winner() {
            let value = if winner == self.side { WIN_SCORE } else { -WIN_SCORE };
            return SearchOutcome { value, best_move: None };
        }

        if depth == 0 || board.is_full() {
            return SearchOutcome {
                value: self.evaluator.score(board, self.side),
                best_move: None,
            };
        }

        let mover = if maximizing { self.side } else { self.side.other() };
        let mut best: Option<(i32, usize)> = None;

        for col in self.config.move_order.moves(board) {
            if board.drop_piece(col, mover).is_err() {
                continue;
            }
            let child = self.search_node(board, depth - 1, !maximizing, window, stats);
            board.undo_top_of(col);

            // Strict comparison: ties keep the first column seen
            let improves = match best {
                None => true,
                Some((value, _)) if maximizing => child.value > value,
                Some((value, _)) => child.value < value,
            };
            if improves {
                best = Some((child.value, col));
            }

            if self.config.pruning {
                if let Some((value, _)) = best {
                    if maximizing {
                        window.alpha = window.alpha.max(value);
                    } else {
                        window.beta = window.beta.min(value);
                    }
                }
                if window.beta <= window.alpha {
                    stats.cutoffs += 1;
                    break;
                }
            }
        }

        match best {
            Some((value, col)) => SearchOutcome {
                value,
                best_move: Some(col),
            },
            None => SearchOutcome {
                value: self.evaluator.score(board, self.side),
                best_move: None,
            },
        }
    }
}

/// First column, in ascending order, where dropping a piece for `side`
/// completes a line. The board is restored before returning.
fn winning_move(board: &mut Board, side: Player) -> Option<usize> {
    board.legal_moves().into_iter().find(|&col| {
        if board.drop_piece(col, side).is_err() {
            return false;
        }
        let wins = board.winner() == Some(side);
        board.undo_top_of(col);
        wins
    })
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, board: &Board) -> Result<usize, SearchError> {
        let legal = board.legal_moves();
        let fallback = *legal.first().ok_or(SearchError::NoLegalMoves)?;

        let mut scratch = *board;

        // Win scores carry no depth term: take an immediate win before searching
        if board.winner().is_none() {
            if let Some(column) = winning_move(&mut scratch, self.side) {
                debug!(side = %self.side, column, ply = board.move_count(), "{} takes the win", self.name());
                return Ok(column);
            }
        }

        let outcome = self.search(&mut scratch, self.config.depth, true, Window::unbounded());
        let column = outcome.best_move.unwrap_or(fallback);

        debug!(
            side = %self.side,
            column,
            ply = board.move_count(),
            value = outcome.value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "{} chose a move",
            self.name()
        );
        Ok(column)
    }

    fn name(&self) -> &str {
        if self.config.pruning {
            "AlphaBeta"
        } else {
            "Minimax"
        }
    }

    fn side(&self) -> Player {
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomStrategy;
    use crate::arena::play_game;
    use crate::game::GameOutcome;

    fn both_variants(side: Player, depth: usize) -> [MinimaxStrategy; 2] {
        [MinimaxStrategy::plain(side, depth), MinimaxStrategy::alpha_beta(side, depth)]
    }

    // --- Move selection ---

    #[test]
    fn selects_legal_move() {
        let board = Board::from_moves(&[3, 3, 3, 3, 3]).unwrap();
        for mut strategy in both_variants(Player::Two, 3) {
            let col = strategy.choose_move(&board).unwrap();
            assert!(board.legal_moves().contains(&col), "column {col} is not legal");
        }
    }

    #[test]
    fn opens_in_center_column() {
        let board = Board::new();
        for mut strategy in both_variants(Player::One, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn takes_immediate_vertical_win() {
        // One holds column 0 rows 0-2, Two has scattered replies
        let board = Board::from_moves(&[0, 1, 0, 1, 0, 2]).unwrap();
        assert_eq!(board.turn(), Player::One);
        for mut strategy in both_variants(Player::One, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 0, "{}", strategy.name());
        }
    }

    #[test]
    fn takes_win_now_over_slower_forced_win() {
        // One has column 3 rows 0-2; the search alone scores column 2 as an
        // equal forced win and keeps it as the lower column
        let mut board = Board::from_moves(&[1, 0, 3, 1, 3, 1, 3, 0]).unwrap();
        assert_eq!(board.turn(), Player::One);

        let mut plain = MinimaxStrategy::plain(Player::One, 4);
        let outcome = plain.search(&mut board, 4, true, Window::unbounded());
        assert_eq!(outcome, SearchOutcome { value: WIN_SCORE, best_move: Some(2) });

        for mut strategy in both_variants(Player::One, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn winning_move_leaves_board_untouched() {
        let original = Board::from_moves(&[1, 0, 3, 1, 3, 1, 3, 0]).unwrap();
        let mut board = original;
        assert_eq!(winning_move(&mut board, Player::One), Some(3));
        assert_eq!(winning_move(&mut board, Player::Two), None);
        assert_eq!(board, original);
    }

    #[test]
    fn prefers_win_over_block() {
        // One holds the bottom row 0..3, Two the row above; both threaten col 3
        let board = Board::from_moves(&[0, 0, 1, 1, 2, 2]).unwrap();
        for mut strategy in both_variants(Player::One, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn blocks_opponent_win() {
        // Two threatens the bottom row at col 3 and One has nothing better
        let board = Board::from_moves(&[6, 0, 6, 1, 5, 2]).unwrap();
        for mut strategy in both_variants(Player::One, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 3, "{}", strategy.name());
        }
    }

    #[test]
    fn win_value_is_reported() {
        let mut board = Board::from_moves(&[0, 1, 0, 1, 0, 2]).unwrap();
        let mut strategy = MinimaxStrategy::plain(Player::One, 4);
        let outcome = strategy.search(&mut board, 4, true, Window::unbounded());
        assert_eq!(outcome.value, WIN_SCORE);
        assert_eq!(outcome.best_move, Some(0));
    }

    // --- Terminal and boundary handling ---

    #[test]
    fn terminal_check_precedes_depth_limit() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::Two).unwrap();
        }
        let mut strategy = MinimaxStrategy::plain(Player::One, 4);
        for depth in [0, 3] {
            let outcome = strategy.search(&mut board, depth, true, Window::unbounded());
            assert_eq!(outcome, SearchOutcome { value: -WIN_SCORE, best_move: None });
        }
    }

    #[test]
    fn falls_back_to_first_legal_move_when_already_decided() {
        let board = Board::from_moves(&[1, 2, 1, 2, 1, 2, 1]).unwrap();
        assert_eq!(board.winner(), Some(Player::One));
        for mut strategy in both_variants(Player::Two, 4) {
            assert_eq!(strategy.choose_move(&board).unwrap(), 0);
        }
    }

    #[test]
    fn zero_depth_falls_back_to_first_legal_move() {
        let board = Board::from_moves(&[0, 0, 0, 0, 0, 0]).unwrap();
        let mut strategy = MinimaxStrategy::plain(Player::One, 0);
        assert_eq!(strategy.choose_move(&board).unwrap(), 1);
    }

    #[test]
    fn full_board_has_no_move() {
        let board = Board::from_moves(&[
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4,
            5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
        ])
        .unwrap();
        let mut strategy = MinimaxStrategy::alpha_beta(Player::One, 4);
        assert_eq!(strategy.choose_move(&board), Err(SearchError::NoLegalMoves));
    }

    // --- Board discipline ---

    #[test]
    fn search_restores_board() {
        let original = Board::from_moves(&[3, 2, 4, 4, 1]).unwrap();
        for mut strategy in both_variants(Player::Two, 4) {
            let mut board = original;
            strategy.search(&mut board, 4, true, Window::unbounded());
            assert_eq!(board, original);
        }
    }

    #[test]
    fn search_ignores_board_turn() {
        // Same grid, opposite turn flags: the search role alone decides who moves
        let mut board = Board::from_moves(&[3, 2, 4]).unwrap();
        let mut flipped = board;
        flipped.place(6).unwrap();
        flipped.undo_top_of(6);
        assert_ne!(board.turn(), flipped.turn());

        let mut strategy = MinimaxStrategy::plain(Player::Two, 3);
        let a = strategy.search(&mut board, 3, true, Window::unbounded());
        let b = strategy.search(&mut flipped, 3, true, Window::unbounded());
        assert_eq!(a, b);
    }

    // --- Pruning ---

    #[test]
    fn plain_minimax_visits_every_node() {
        let mut strategy = MinimaxStrategy::plain(Player::One, 4);
        strategy.choose_move(&Board::new()).unwrap();
        assert_eq!(strategy.last_stats().nodes, 1 + 7 + 49 + 343 + 2401);
        assert_eq!(strategy.last_stats().cutoffs, 0);
    }

    #[test]
    fn alpha_beta_visits_fewer_nodes() {
        let board = Board::from_moves(&[3, 3, 2]).unwrap();
        let [mut plain, mut pruned] = both_variants(Player::Two, 5);
        let a = plain.choose_move(&board).unwrap();
        let b = pruned.choose_move(&board).unwrap();
        assert_eq!(a, b);
        assert!(pruned.last_stats().cutoffs > 0);
        assert!(pruned.last_stats().nodes < plain.last_stats().nodes);
    }

    #[test]
    fn center_first_ordering_keeps_value() {
        let mut board = Board::from_moves(&[3, 4, 2, 2]).unwrap();
        let mut ascending = MinimaxStrategy::alpha_beta(Player::One, 4);
        let mut centered = MinimaxStrategy::new(
            Player::One,
            SearchConfig {
                depth: 4,
                pruning: true,
                move_order: MoveOrder::CenterFirst,
            },
        );
        let a = ascending.search(&mut board, 4, true, Window::unbounded());
        let b = centered.search(&mut board, 4, true, Window::unbounded());
        assert_eq!(a.value, b.value);
    }

    // --- Strategy trait ---

    #[test]
    fn names_reflect_pruning() {
        let [plain, pruned] = both_variants(Player::One, 4);
        assert_eq!(plain.name(), "Minimax");
        assert_eq!(pruned.name(), "AlphaBeta");
        assert_eq!(pruned.side(), Player::One);
    }

    #[test]
    fn custom_evaluator_plays_legal_moves() {
        let mut strategy = MinimaxStrategy::with_evaluator(
            Player::One,
            SearchConfig::default(),
            Box::new(ThreatEvaluator),
        );
        let board = Board::from_moves(&[3, 3]).unwrap();
        let col = strategy.choose_move(&board).unwrap();
        assert!(board.legal_moves().contains(&col));
    }

    #[test]
    fn threat_variant_searches_center_first_to_depth_five() {
        let mut strategy = MinimaxStrategy::threat(Player::Two);
        assert_eq!(strategy.config.depth, THREAT_DEPTH);
        assert_eq!(strategy.config.move_order, MoveOrder::CenterFirst);
        assert_eq!(strategy.name(), "AlphaBeta");
        assert_eq!(strategy.evaluator.name(), "threat");

        // Blocks the vertical threat in column 0
        let board = Board::from_moves(&[0, 6, 0, 6, 0]).unwrap();
        assert_eq!(strategy.choose_move(&board).unwrap(), 0);
    }

    // --- Integration ---

    #[test]
    fn full_game_between_variants_completes() {
        let mut first = MinimaxStrategy::plain(Player::One, 4);
        let mut second = MinimaxStrategy::alpha_beta(Player::Two, 4);
        let record = play_game(&mut first, &mut second).unwrap();
        assert!(record.final_board.winner().is_some() || record.final_board.is_full());
    }

    #[test]
    fn beats_random_strategy() {
        let games_per_side = 10;
        let mut wins = 0;

        for seed in 0..games_per_side {
            let mut search = MinimaxStrategy::alpha_beta(Player::One, 4);
            let mut random = RandomStrategy::seeded(Player::Two, seed);
            let record = play_game(&mut search, &mut random).unwrap();
            if record.outcome == GameOutcome::Winner(Player::One) {
                wins += 1;
            }
        }
        for seed in 0..games_per_side {
            let mut random = RandomStrategy::seeded(Player::One, seed);
            let mut search = MinimaxStrategy::alpha_beta(Player::Two, 4);
            let record = play_game(&mut random, &mut search).unwrap();
            if record.outcome == GameOutcome::Winner(Player::Two) {
                wins += 1;
            }
        }

        let total = games_per_side * 2;
        assert!(
            wins * 10 >= total * 8,
            "search should beat random at least 80% of the time, won {wins}/{total}"
        );
    }
}
