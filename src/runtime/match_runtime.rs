use crate::runtime::{process_turn, send_updates, Seat};
use crate::{MatchStatus, Points, TurnEngine};
use derive_more::{Display, Error};
use tracing::{info, instrument};

/// How a match [played](play_match) by the runtime ended.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum MatchOutcome {
    /// `player` placed their last [tile](crate::Tile).
    Won {
        /// The index of the winning player.
        player: usize,
    },
    /// Every player passed in turn and the match was
    /// [scored](TurnEngine::score_blocked_match).
    Blocked {
        /// The index of the player with the lowest points.
        winner: usize,
        /// The sum of pips left in each player's hand.
        points: Points,
    },
}

/// Describes the reason why the runtime stopped before the match ended.
#[derive(Debug, Display, Error)]
pub enum RuntimeError<E> {
    /// Attempting [to play](play_match) with a different number of seats than players.
    #[display("{seats_len} seats for {players_len} players")]
    SeatCountMismatch {
        /// The number of seats given.
        seats_len: usize,
        /// The number of players in the match.
        players_len: usize,
    },
    /// Attempting [to play](play_match) a match that has already ended.
    #[display("the match is {status}")]
    MatchOver {
        /// How the match ended.
        status: MatchStatus,
    },
    /// The current player failed to send a move or receive an error update.
    #[display("the current player failed: {error:?}")]
    Turn {
        /// The error returned by the current player's [seat](Seat).
        error: E,
    },
    /// Some players failed to receive the state of the match.
    #[display("updates failed: {errors:?}")]
    Updates {
        /// The errors returned by [`Seat::update_view`].
        errors: Vec<E>,
    },
}

/// Sends the state of the match to every [`Seat`] and processes the turn of the current player
/// until the match is won or blocked. A blocked match is
/// [scored](TurnEngine::score_blocked_match). The final state is sent to every [`Seat`] before
/// returning.
///
/// # Arguments
///
/// * `seats`: One seat per player in turn order.
/// * `turn_engine`: A match in progress.
///
/// # Errors
///
/// * [RuntimeError::SeatCountMismatch] Attempting to play with a different number of seats than
/// players.
/// * [RuntimeError::MatchOver] Attempting to play a match that has already ended.
/// * [RuntimeError::Turn] The current player failed to send a move or receive an error update.
/// * [RuntimeError::Updates] Some players failed to receive the state of the match.
///
/// # Returns
///
/// How the match ended.
#[instrument(skip_all)]
pub async fn play_match<S, E>(
    seats: &[S],
    turn_engine: &mut TurnEngine,
) -> Result<MatchOutcome, RuntimeError<E>>
where
    S: Seat<E>,
{
    let players_len = turn_engine.players().len();
    if seats.len() != players_len {
        return Err(RuntimeError::SeatCountMismatch {
            seats_len: seats.len(),
            players_len,
        });
    }
    if turn_engine.match_status().is_over() {
        return Err(RuntimeError::MatchOver {
            status: turn_engine.match_status(),
        });
    }

    while !turn_engine.match_status().is_over() {
        send_updates(seats, turn_engine)
            .await
            .map_err(|errors| RuntimeError::Updates { errors })?;
        process_turn(seats, turn_engine).map_err(|error| RuntimeError::Turn { error })?;
    }

    let match_outcome = match turn_engine.match_status() {
        MatchStatus::Won { player } => MatchOutcome::Won { player },
        MatchStatus::Blocked => {
            let winner = turn_engine
                .score_blocked_match()
                .unwrap_or_else(|_| unreachable!("a blocked match can be scored"));
            MatchOutcome::Blocked {
                winner,
                points: turn_engine.points(),
            }
        }
        MatchStatus::InProgress => unreachable!("the loop only ends once the match is over"),
    };
    send_updates(seats, turn_engine)
        .await
        .map_err(|errors| RuntimeError::Updates { errors })?;
    info!(?match_outcome, "match played");

    Ok(match_outcome)
}
