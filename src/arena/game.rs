use tracing::{debug, info, trace};

use crate::ai::Strategy;
use crate::error::MatchError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Everything worth keeping from one finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    pub final_board: Board,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

/// Play one game from the empty board, `first` as `Player::One` and
/// `second` as `Player::Two`, until a line is completed or the board fills.
pub fn play_game(first: &mut dyn Strategy, second: &mut dyn Strategy) -> Result<GameRecord, MatchError> {
    play_game_with(first, second, |_, _| {})
}

/// Like `play_game`, calling `on_move` with the mover and the game after
/// every move.
pub fn play_game_with<F>(
    first: &mut dyn Strategy,
    second: &mut dyn Strategy,
    mut on_move: F,
) -> Result<GameRecord, MatchError>
where
    F: FnMut(Player, &GameState),
{
    check_seat(&*first, Player::One)?;
    check_seat(&*second, Player::Two)?;

    let mut state = GameState::initial();

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }

        let player = state.current_player();
        let strategy: &mut dyn Strategy = match player {
            Player::One => &mut *first,
            Player::Two => &mut *second,
        };

        let column = strategy
            .choose_move(state.board())
            .map_err(|source| MatchError::Search { side: player, source })?;
        state.apply_move(column).map_err(|_| MatchError::IllegalMove {
            side: player,
            column,
            legal: state.legal_moves(),
        })?;

        debug!(%player, column, ply = state.moves().len(), "move played");
        trace!("\n{}", state.board());
        on_move(player, &state);
    };

    match outcome {
        GameOutcome::Winner(p) => info!(winner = %p, plies = state.moves().len(), "game over"),
        GameOutcome::Draw => info!(plies = state.moves().len(), "game drawn"),
    }

    Ok(GameRecord {
        moves: state.moves().to_vec(),
        outcome,
        final_board: *state.board(),
    })
}

fn check_seat(strategy: &dyn Strategy, seat: Player) -> Result<(), MatchError> {
    if strategy.side() == seat {
        Ok(())
    } else {
        Err(MatchError::SideMismatch {
            name: strategy.name().to_string(),
            bound: strategy.side(),
            seat,
        })
    }
}
