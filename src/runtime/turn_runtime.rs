use crate::runtime::Seat;
use crate::{Passed, Placed, TurnEngine};
use either::Either;
use futures::future;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Either the current player [passed](TurnEngine::pass_turn) or
/// [placed a tile](TurnEngine::attempt_move).
pub type TurnOutcome = Either<Passed, Placed>;

/// When the current player has no [tile](crate::Tile) to place, passes for them. Otherwise,
/// it repeatedly asks the current player for a move, and if the move is illegal, it tells
/// the player about the error and asks again. If the move is legal, stops asking for a move
/// and returns the placement.
///
/// Calls [`Seat::get_move`] for an input, attempts [`TurnEngine::attempt_move`], and if
/// the input is rejected, calls [`Seat::update_move_error`].
///
/// # Arguments
///
/// * `seats`: One seat per player in turn order.
/// * `turn_engine`: The match in progress.
///
/// # Errors
///
/// When the current player fails to send input or receive an error update.
///
/// # Panics
///
/// When the match has ended or there are fewer seats than players.
#[instrument(skip_all, fields(current_player = turn_engine.current_player()))]
pub fn process_turn<S, E>(seats: &[S], turn_engine: &mut TurnEngine) -> Result<TurnOutcome, E>
where
    S: Seat<E>,
{
    assert!(
        !turn_engine.match_status().is_over(),
        "a turn is only processed while the match is in progress"
    );
    let current_player = turn_engine.current_player();
    let seat = &seats[current_player];

    if !turn_engine.legal_move_exists(current_player) {
        let passed = turn_engine
            .pass_turn(current_player)
            .unwrap_or_else(|_| unreachable!("a player without a legal move may pass"));
        return Ok(Either::Left(passed));
    }

    loop {
        let attempted = seat.get_move(
            &turn_engine.match_view(),
            turn_engine.players()[current_player].hand(),
        )?;
        match turn_engine.attempt_move(current_player, attempted.tile_index, attempted.side) {
            Ok(placed) => return Ok(Either::Right(placed)),
            Err(error) => {
                debug!(%attempted, %error, "asking again");
                // cannot use map_err since E needs to be propagated here
                seat.update_move_error(
                    &turn_engine.match_view(),
                    turn_engine.players()[current_player].hand(),
                    attempted,
                    error,
                )?;
            }
        }
    }
}

/// Asynchronously sends the current state of the match to every [`Seat`].
///
/// # Arguments
///
/// * `seats`: One seat per player in turn order.
/// * `turn_engine`: The current match.
///
/// # Errors
///
/// Accumulates all errors from [`Seat::update_view`] into a vector.
pub async fn send_updates<S, E>(seats: &[S], turn_engine: &TurnEngine) -> Result<(), Vec<E>>
where
    S: Seat<E>,
{
    let match_view = turn_engine.match_view();
    let update_tasks = seats
        .iter()
        .zip(turn_engine.players())
        .map(|(seat, player)| seat.update_view(&match_view, player.hand()));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::test_seats::{FirstPlayableSeat, ScriptedSeat, SeatError};
    use crate::{MatchStatus, Move, MoveError, PlacedTile, Side, Tile};
    use futures::executor::block_on;

    #[test]
    fn process_turn_passes_without_legal_move() {
        let seats = [ScriptedSeat::default(), ScriptedSeat::default()];
        let mut turn_engine = TurnEngine::scenario(&[(4, 5)], &[&[(0, 1)], &[(2, 2)]]);

        let outcome = process_turn::<_, SeatError>(&seats, &mut turn_engine)
            .expect("process_turn should return Ok");

        assert_eq!(
            Either::Left(Passed {
                player: 0,
                passes: 1,
                status: MatchStatus::InProgress,
            }),
            outcome
        );
        assert_eq!(1, turn_engine.current_player());
    }

    #[test]
    fn process_turn_retries_until_legal() {
        let seats = [
            ScriptedSeat::new([
                Move {
                    tile_index: 5,
                    side: Side::Left,
                },
                Move {
                    tile_index: 0,
                    side: Side::Left,
                },
                Move {
                    tile_index: 1,
                    side: Side::Right,
                },
            ]),
            ScriptedSeat::default(),
        ];
        let mut turn_engine = TurnEngine::scenario(&[(4, 5)], &[&[(0, 1), (5, 6)], &[(2, 2)]]);

        let outcome = process_turn::<_, SeatError>(&seats, &mut turn_engine)
            .expect("process_turn should return Ok");

        assert_eq!(
            Either::Right(Placed {
                player: 0,
                placed: PlacedTile { left: 5, right: 6 },
                side: Side::Right,
                status: MatchStatus::InProgress,
            }),
            outcome
        );
        let move_errors = seats[0].move_errors.lock().unwrap();
        assert_eq!(2, move_errors.len());
        assert_eq!(
            MoveError::TileIndexOutOfRange {
                index: 5,
                hand_len: 2,
            },
            move_errors[0].1
        );
        assert_eq!(
            MoveError::PlacementMismatch {
                tile: Tile::new(0, 1),
                side: Side::Left,
                end: 4,
            },
            move_errors[1].1
        );
        assert_eq!(1, turn_engine.current_player());
    }

    #[test]
    fn process_turn_propagates_seat_error() {
        let seats = [ScriptedSeat::default(), ScriptedSeat::default()];
        let mut turn_engine = TurnEngine::scenario(&[], &[&[(0, 1)], &[(2, 2)]]);

        let error = process_turn::<_, SeatError>(&seats, &mut turn_engine)
            .expect_err("process_turn should return Err");

        assert_eq!(SeatError::OutOfMoves, error);
        assert!(turn_engine.board().is_empty());
    }

    #[test]
    fn process_turn_first_playable() {
        let seats = [FirstPlayableSeat::default(), FirstPlayableSeat::default()];
        let mut turn_engine = TurnEngine::scenario(&[(3, 4)], &[&[(0, 0), (4, 6)], &[(2, 2)]]);

        let outcome = process_turn::<_, SeatError>(&seats, &mut turn_engine)
            .expect("process_turn should return Ok");

        assert!(outcome.is_right());
        assert_eq!((Some(3), Some(6)), turn_engine.board_ends());
    }

    #[test]
    fn send_updates_every_seat() {
        let seats = [
            ScriptedSeat::default(),
            ScriptedSeat::default(),
            ScriptedSeat::default(),
        ];
        let turn_engine = TurnEngine::scenario(&[], &[&[(0, 1)], &[(2, 2)], &[(3, 3)]]);

        block_on(send_updates::<_, SeatError>(&seats, &turn_engine))
            .expect("send_updates should return Ok");

        for seat in &seats {
            assert_eq!(1, *seat.views.lock().unwrap());
        }
    }

    #[test]
    fn send_updates_accumulates_errors() {
        let seats = [
            ScriptedSeat::disconnected(),
            ScriptedSeat::default(),
            ScriptedSeat::disconnected(),
        ];
        let turn_engine = TurnEngine::scenario(&[], &[&[(0, 1)], &[(2, 2)], &[(3, 3)]]);

        let errors = block_on(send_updates::<_, SeatError>(&seats, &turn_engine))
            .expect_err("send_updates should return Err");

        assert_eq!(vec![SeatError::Disconnected, SeatError::Disconnected], errors);
        assert_eq!(1, *seats[1].views.lock().unwrap());
    }
}
