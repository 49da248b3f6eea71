use crate::{HandError, MatchStatus, Pip, PlacedTile, PlacementMismatch, Side, Tile, TurnEngine};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// A request to place the [tile](Tile) at `tile_index` of the current player's hand at `side`
/// of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("tile {tile_index} on the {side}")]
pub struct Move {
    /// The index of the [tile](Tile) in the current player's hand.
    pub tile_index: usize,
    /// The end of the board to place the [tile](Tile) on.
    pub side: Side,
}

/// Describes an accepted [move](TurnEngine::attempt_move).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placed {
    /// The index of the player who moved.
    pub player: usize,
    /// The [tile](Tile) in its final orientation on the board.
    pub placed: PlacedTile,
    /// The end of the board the [tile](Tile) was placed on.
    pub side: Side,
    /// The status of the match after the move.
    pub status: MatchStatus,
}

/// Describes the reason why a [move](TurnEngine::attempt_move) was rejected. The match is not
/// changed by a rejected move.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum MoveError {
    /// Attempting [to move](TurnEngine::attempt_move) after the match has ended.
    #[display("the match is {status}")]
    MatchOver {
        /// How the match ended.
        status: MatchStatus,
    },
    /// Attempting [to move](TurnEngine::attempt_move) out of turn.
    #[display("player {player} moved during the turn of player {current_player}")]
    NotCurrentPlayer {
        /// The index of the player who attempted to move.
        player: usize,
        /// The index of the player whose turn it is.
        current_player: usize,
    },
    /// Attempting [to move](TurnEngine::attempt_move) a [tile](Tile) past the end of
    /// the current player's hand.
    #[display("tile index {index} is out of range for a hand of {hand_len} tiles")]
    TileIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of [tiles](Tile) in the current player's hand.
        hand_len: usize,
    },
    /// Attempting [to move](TurnEngine::attempt_move) a [tile](Tile) with no pip equal to
    /// the open end at `side`.
    #[display("{tile} does not match the {side} end {end}")]
    PlacementMismatch {
        /// The [tile](Tile) being placed.
        tile: Tile,
        /// The end of the board the [tile](Tile) was placed on.
        side: Side,
        /// The open pip at `side`.
        end: Pip,
    },
}

impl MoveError {
    /// Whether the move broke the protocol of the match rather than the rules of placement.
    /// [MoveError::MatchOver] and [MoveError::NotCurrentPlayer] are precondition violations of
    /// the caller, the others are ordinary illegal moves the current player can retry.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            MoveError::MatchOver { .. } | MoveError::NotCurrentPlayer { .. }
        )
    }
}

impl From<HandError> for MoveError {
    fn from(error: HandError) -> MoveError {
        match error {
            HandError::IndexOutOfRange { index, hand_len } => {
                MoveError::TileIndexOutOfRange { index, hand_len }
            }
        }
    }
}

impl From<PlacementMismatch> for MoveError {
    fn from(PlacementMismatch { tile, side, end }: PlacementMismatch) -> MoveError {
        MoveError::PlacementMismatch { tile, side, end }
    }
}

impl TurnEngine {
    /// Checks that the match is in progress, that `player` is the current player, that
    /// `tile_index` is in their hand, and that the [tile](Tile) matches the open end at `side`.
    /// Then it moves the [tile](Tile) from the hand onto the board and resets the passes.
    /// When the hand becomes empty, the match is won by `player` and their victories increase.
    /// Otherwise, the turn advances to the next player.
    ///
    /// # Arguments
    ///
    /// * `player`: The index of the player moving.
    /// * `tile_index`: The index of the [tile](Tile) in the player's hand.
    /// * `side`: The end of the board to place the [tile](Tile) on. Ignored on an empty board.
    ///
    /// # Errors
    ///
    /// * [MoveError::MatchOver] Attempting to move after the match has ended.
    /// * [MoveError::NotCurrentPlayer] Attempting to move out of turn.
    /// * [MoveError::TileIndexOutOfRange] Attempting to move a [tile](Tile) past the end of
    /// the hand.
    /// * [MoveError::PlacementMismatch] Attempting to move a [tile](Tile) with no pip equal to
    /// the open end at `side`.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) as placed and the status of the match after the move.
    #[instrument(skip(self), fields(current_player = self.current_player))]
    pub fn attempt_move(
        &mut self,
        player: usize,
        tile_index: usize,
        side: Side,
    ) -> Result<Placed, MoveError> {
        let tile = self.check_move(player, tile_index, side).map_err(|error| {
            debug!(%error, "rejected move");
            error
        })?;

        let placed = self
            .board
            .place(tile, side)
            .unwrap_or_else(|_| unreachable!("checked placement should match"));
        let hand = self.players[player].mut_hand();
        hand.remove(tile_index)
            .unwrap_or_else(|_| unreachable!("checked index should be in range"));
        self.passes = 0;
        debug!(%placed, %side, "placed tile");

        if self.players[player].hand().is_empty() {
            self.status = MatchStatus::Won { player };
            self.players[player].add_victory();
            info!(player, name = self.players[player].name(), "match won");
        } else {
            self.advance();
        }

        Ok(Placed {
            player,
            placed,
            side,
            status: self.status,
        })
    }

    /// Checks every condition of [attempt_move](TurnEngine::attempt_move) without changing
    /// the match.
    ///
    /// # Errors
    ///
    /// * [MoveError::MatchOver] Attempting to move after the match has ended.
    /// * [MoveError::NotCurrentPlayer] Attempting to move out of turn.
    /// * [MoveError::TileIndexOutOfRange] Attempting to move a [tile](Tile) past the end of
    /// the hand.
    /// * [MoveError::PlacementMismatch] Attempting to move a [tile](Tile) with no pip equal to
    /// the open end at `side`.
    ///
    /// # Returns
    ///
    /// The [tile](Tile) at `tile_index`.
    pub fn check_move(
        &self,
        player: usize,
        tile_index: usize,
        side: Side,
    ) -> Result<Tile, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::MatchOver {
                status: self.status,
            });
        }
        if player != self.current_player {
            return Err(MoveError::NotCurrentPlayer {
                player,
                current_player: self.current_player,
            });
        }

        let hand = self.players[player].hand();
        let tile = *hand.get(tile_index).ok_or(MoveError::TileIndexOutOfRange {
            index: tile_index,
            hand_len: hand.len(),
        })?;
        self.board.check(tile, side)?;

        Ok(tile)
    }
}
