use crate::{MatchStatus, TurnEngine};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Describes an accepted [pass](TurnEngine::pass_turn).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Passed {
    /// The index of the player who passed.
    pub player: usize,
    /// The number of consecutive passes including this one.
    pub passes: usize,
    /// The status of the match after the pass.
    pub status: MatchStatus,
}

/// Describes the reason why a [pass](TurnEngine::pass_turn) was rejected. The match is not
/// changed by a rejected pass.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PassError {
    /// Attempting [to pass](TurnEngine::pass_turn) after the match has ended.
    #[display("the match is {status}")]
    MatchOver {
        /// How the match ended.
        status: MatchStatus,
    },
    /// Attempting [to pass](TurnEngine::pass_turn) out of turn.
    #[display("player {player} passed during the turn of player {current_player}")]
    NotCurrentPlayer {
        /// The index of the player who attempted to pass.
        player: usize,
        /// The index of the player whose turn it is.
        current_player: usize,
    },
    /// Attempting [to pass](TurnEngine::pass_turn) while holding a [tile](crate::Tile) that
    /// can be placed.
    #[display("player {player} can place a tile and may not pass")]
    LegalMoveExists {
        /// The index of the player who attempted to pass.
        player: usize,
    },
}

impl PassError {
    /// Whether the pass broke the protocol of the match. Only [PassError::LegalMoveExists] is
    /// an ordinary illegal pass.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            PassError::MatchOver { .. } | PassError::NotCurrentPlayer { .. }
        )
    }
}

impl TurnEngine {
    /// Checks that the match is in progress, that `player` is the current player, and that
    /// none of their [tiles](crate::Tile) can be placed. Then it counts the pass and advances
    /// to the next player. When every player has passed in a row, the match is blocked.
    ///
    /// # Errors
    ///
    /// * [PassError::MatchOver] Attempting to pass after the match has ended.
    /// * [PassError::NotCurrentPlayer] Attempting to pass out of turn.
    /// * [PassError::LegalMoveExists] Attempting to pass while holding a [tile](crate::Tile)
    /// that can be placed.
    ///
    /// # Returns
    ///
    /// The number of consecutive passes and the status of the match after the pass.
    #[instrument(skip(self), fields(current_player = self.current_player))]
    pub fn pass_turn(&mut self, player: usize) -> Result<Passed, PassError> {
        self.check_pass(player).map_err(|error| {
            debug!(%error, "rejected pass");
            error
        })?;

        self.passes += 1;
        self.advance();
        debug!(passes = self.passes, "passed");

        if self.passes >= self.players.len() {
            self.status = MatchStatus::Blocked;
            info!(passes = self.passes, "match blocked");
        }

        Ok(Passed {
            player,
            passes: self.passes,
            status: self.status,
        })
    }

    /// Checks every condition of [pass_turn](TurnEngine::pass_turn) without changing the match.
    ///
    /// # Errors
    ///
    /// * [PassError::MatchOver] Attempting to pass after the match has ended.
    /// * [PassError::NotCurrentPlayer] Attempting to pass out of turn.
    /// * [PassError::LegalMoveExists] Attempting to pass while holding a [tile](crate::Tile)
    /// that can be placed.
    pub fn check_pass(&self, player: usize) -> Result<(), PassError> {
        if self.status.is_over() {
            return Err(PassError::MatchOver {
                status: self.status,
            });
        }
        if player != self.current_player {
            return Err(PassError::NotCurrentPlayer {
                player,
                current_player: self.current_player,
            });
        }
        if self.legal_move_exists(player) {
            return Err(PassError::LegalMoveExists { player });
        }

        Ok(())
    }
}
