//! Drives a match from start to end by asking each player for moves through a [`Seat`] and
//! sending every player the state of the match between turns.

use crate::{Hand, MatchView, Move, MoveError};
use async_trait::async_trait;
pub use match_runtime::*;
pub use turn_runtime::*;

mod match_runtime;
mod turn_runtime;

/// Defines how the runtime asks a player for [moves](Move) and tells them about the match.
/// There is one seat per player in turn order.
///
/// `get_move` and `update_move_error` block execution until getting input or updating output.
/// `update_view` may execute in parallel with the updates of other seats.
///
/// # Errors
///
/// The implementor of [`Seat`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated illegal moves. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Seat<E> {
    /// On their turn, gets a [`Move`] from the current player holding `hand`.
    fn get_move(&self, match_view: &MatchView<'_>, hand: &Hand) -> Result<Move, E>;

    /// When a call to [`TurnEngine::attempt_move`](crate::TurnEngine::attempt_move) fails,
    /// updates the current player with the state of the match, their hand, their move, and
    /// the reason why their move was rejected.
    fn update_move_error(
        &self,
        match_view: &MatchView<'_>,
        hand: &Hand,
        attempted: Move,
        error: MoveError,
    ) -> Result<(), E>;

    /// Before every turn and once the match has ended, updates each player with the state of
    /// the match and their hand.
    async fn update_view(&self, match_view: &MatchView<'_>, hand: &Hand) -> Result<(), E>;
}
