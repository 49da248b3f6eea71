use crate::{MatchStatus, TurnEngine};
use derive_more::{Display, Error};
use itertools::Itertools;
use tracing::{info, instrument};

/// Describes the reason why a match could not be [scored](TurnEngine::score_blocked_match).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum ScoreError {
    /// Attempting [to score](TurnEngine::score_blocked_match) a match that is not blocked.
    #[display("only a blocked match is scored, this match is {status}")]
    NotBlocked {
        /// The status of the match.
        status: MatchStatus,
    },
}

impl TurnEngine {
    /// Sums the pips left in each hand and awards the victory to the player with the lowest
    /// sum. Ties go to the earliest player in turn order. Scoring again returns the same
    /// winner without awarding another victory.
    ///
    /// # Errors
    ///
    /// * [ScoreError::NotBlocked] Attempting to score a match that is in progress or was won.
    ///
    /// # Returns
    ///
    /// The index of the winning player.
    ///
    /// # See Also
    ///
    /// * [TurnEngine::points]
    #[instrument(skip(self))]
    pub fn score_blocked_match(&mut self) -> Result<usize, ScoreError> {
        if self.status != MatchStatus::Blocked {
            return Err(ScoreError::NotBlocked {
                status: self.status,
            });
        }
        if let Some(winner) = self.blocked_winner {
            return Ok(winner);
        }

        let winner = self
            .players
            .iter()
            .map(|player| player.hand().points_sum())
            .position_min()
            .unwrap_or_else(|| unreachable!("a match has at least two players"));
        self.players[winner].add_victory();
        self.blocked_winner = Some(winner);
        info!(
            winner,
            name = self.players[winner].name(),
            points = ?self.points(),
            "blocked match scored"
        );

        Ok(winner)
    }

    /// The winner of a blocked match once it has been [scored](TurnEngine::score_blocked_match).
    #[inline]
    pub fn blocked_winner(&self) -> Option<usize> {
        self.blocked_winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn blocked(hands: &[&[(u8, u8)]]) -> TurnEngine {
        let mut turn_engine = TurnEngine::scenario(&[(0, 0)], hands);
        *turn_engine.mut_status() = MatchStatus::Blocked;
        turn_engine
    }

    #[test]
    fn score_blocked_match_lowest_points() {
        let mut turn_engine = blocked(&[&[(6, 6)], &[(1, 2), (1, 1)], &[(3, 4)]]);

        let winner = turn_engine
            .score_blocked_match()
            .expect("score_blocked_match should return Ok");

        assert_eq!(1, winner);
        assert_eq!(Some(1), turn_engine.blocked_winner());
        assert_eq!([0, 1, 0].as_slice(), turn_engine.victories().as_slice());
    }

    #[test]
    fn score_blocked_match_tie_first_index() {
        let mut turn_engine = blocked(&[&[(6, 6)], &[(2, 3)], &[(1, 4)], &[(5, 0)]]);

        let winner = turn_engine
            .score_blocked_match()
            .expect("score_blocked_match should return Ok");

        assert_eq!(1, winner);
    }

    #[test]
    fn score_blocked_match_idempotent() {
        let mut turn_engine = blocked(&[&[(1, 1)], &[(2, 3)]]);

        let first = turn_engine
            .score_blocked_match()
            .expect("score_blocked_match should return Ok");
        let second = turn_engine
            .score_blocked_match()
            .expect("score_blocked_match should return Ok");

        assert_eq!(first, second);
        assert_eq!(1, turn_engine.victories()[0]);
    }

    #[test]
    fn score_blocked_match_not_blocked() {
        let mut turn_engine = TurnEngine::scenario(&[], &[&[(1, 2)], &[(2, 3)]]);

        assert_eq!(
            Err(ScoreError::NotBlocked {
                status: MatchStatus::InProgress,
            }),
            turn_engine.score_blocked_match()
        );

        turn_engine
            .attempt_move(0, 0, Side::Left)
            .expect("attempt_move should return Ok");

        assert_eq!(
            Err(ScoreError::NotBlocked {
                status: MatchStatus::Won { player: 0 },
            }),
            turn_engine.score_blocked_match()
        );
        assert_eq!(None, turn_engine.blocked_winner());
    }

    #[test]
    fn score_blocked_match_after_rotation() {
        let mut turn_engine =
            TurnEngine::scenario(&[(4, 5)], &[&[(0, 1), (6, 6)], &[(2, 2)], &[(0, 3)]]);
        for player in 0..3 {
            turn_engine
                .pass_turn(player)
                .expect("pass_turn should return Ok");
        }

        let winner = turn_engine
            .score_blocked_match()
            .expect("score_blocked_match should return Ok");

        assert_eq!(2, winner);
        assert_eq!(Some(2), turn_engine.blocked_winner());
        assert_eq!(1, turn_engine.victories()[2]);
    }
}
