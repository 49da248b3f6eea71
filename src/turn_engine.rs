use crate::{
    shuffled_tiles, Board, Boneyard, Ends, Player, Players, Points, TileSet, Victories, HAND_LEN,
    MAX_PLAYERS, MIN_PLAYERS, TILES_LEN,
};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{info, instrument};

pub use attempt_move::*;
pub use blocked_score::*;
pub use match_view::*;
pub use pass_turn::*;

mod attempt_move;
mod blocked_score;
mod match_view;
mod pass_turn;
#[cfg(test)]
mod test_setup;

/// Owns the state of one match and the players who carry their victories from match to match.
/// Created from [TurnEngine::new_match].
///
/// The tiles are dealt as soon as the match is created, so the match is observed in the
/// `InProgress` phase first and then ends as either `Won` or `Blocked`. A blocked match is
/// [scored](TurnEngine::score_blocked_match) by the points left in each hand.
/// [TurnEngine::next_match] deals a new match to the same players.
#[derive(Debug)]
pub struct TurnEngine {
    /// The players in turn order.
    players: Players,
    /// The chain of tiles placed in this match.
    board: Board,
    /// The tiles left over after dealing.
    boneyard: Boneyard,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The number of consecutive passes since the last placement.
    passes: usize,
    /// Whether the match is still being played and how it ended.
    status: MatchStatus,
    /// The winner of a blocked match once it has been scored.
    blocked_winner: Option<usize>,
}

/// Describes whether a match is still being played and how it ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum MatchStatus {
    /// The current player must either place a [tile](crate::Tile) or pass.
    #[display("in progress")]
    InProgress,
    /// `player` placed their last [tile](crate::Tile).
    #[display("won by player {player}")]
    Won {
        /// The index of the winning player.
        player: usize,
    },
    /// Every player passed in turn with no placement in between.
    #[display("blocked")]
    Blocked,
}

impl MatchStatus {
    /// Whether the match has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}

/// Describes the reason why [a match](TurnEngine::new_match) could not be started.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum NewMatchError {
    /// Attempting [to start](TurnEngine::new_match) with fewer than [MIN_PLAYERS] or more
    /// than [MAX_PLAYERS] players.
    #[display("a match is played by 2 to 4 players, not {players_len}")]
    InvalidPlayerCount {
        /// The number of players given.
        players_len: usize,
    },
}

impl TurnEngine {
    /// Checks the number of players, shuffles [every tile](crate::tiles) with `rng`, deals
    /// [HAND_LEN] tiles to each player in turn order, and keeps the rest as
    /// the [boneyard](Boneyard). The first player takes the first turn.
    ///
    /// # Arguments
    ///
    /// * `players`: The players in turn order. Their victories are kept.
    /// * `rng`: The only source of randomness for the match.
    ///
    /// # Errors
    ///
    /// * [NewMatchError::InvalidPlayerCount] Attempting to start with fewer than
    /// [MIN_PLAYERS] or more than [MAX_PLAYERS] players.
    ///
    /// # See Also
    ///
    /// * [TurnEngine::new_random_match]
    #[instrument(skip_all)]
    pub fn new_match<R: Rng + ?Sized>(
        players: impl IntoIterator<Item = Player>,
        rng: &mut R,
    ) -> Result<TurnEngine, NewMatchError> {
        let players: Players = players.into_iter().collect();
        TurnEngine::check(players.len())?;

        let mut turn_engine = TurnEngine {
            players,
            board: Board::new(),
            boneyard: Boneyard::with_capacity(TILES_LEN),
            current_player: 0,
            passes: 0,
            status: MatchStatus::InProgress,
            blocked_winner: None,
        };
        turn_engine.deal(shuffled_tiles(rng));

        Ok(turn_engine)
    }

    /// Starts a match shuffled by the thread-local generator.
    ///
    /// # Errors
    ///
    /// * [NewMatchError::InvalidPlayerCount] Attempting to start with fewer than
    /// [MIN_PLAYERS] or more than [MAX_PLAYERS] players.
    ///
    /// # See Also
    ///
    /// * [TurnEngine::new_match]
    pub fn new_random_match(
        players: impl IntoIterator<Item = Player>,
    ) -> Result<TurnEngine, NewMatchError> {
        TurnEngine::new_match(players, &mut rand::thread_rng())
    }

    /// Deals a new match to the same players, whether or not the current match has ended.
    /// Every hand, the board, and the boneyard are replaced by a freshly shuffled set.
    /// Victories are kept.
    #[instrument(skip_all)]
    pub fn next_match<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deal(shuffled_tiles(rng));
    }

    /// Checks that the number of players is in `MIN_PLAYERS..=MAX_PLAYERS`.
    ///
    /// # Errors
    ///
    /// * [NewMatchError::InvalidPlayerCount] Attempting to start with fewer than
    /// [MIN_PLAYERS] or more than [MAX_PLAYERS] players.
    fn check(players_len: usize) -> Result<(), NewMatchError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players_len) {
            return Err(NewMatchError::InvalidPlayerCount { players_len });
        }

        Ok(())
    }

    /// Clears every container, then deals [HAND_LEN] tiles to each player in turn order and
    /// moves the rest into the boneyard.
    fn deal(&mut self, tile_set: TileSet) {
        self.board.clear();
        self.boneyard.clear();

        let mut tiles = tile_set.into_iter();
        for player in &mut self.players {
            let hand = player.mut_hand();
            hand.clear();
            hand.extend(tiles.by_ref().take(HAND_LEN));
        }
        self.boneyard.extend(tiles);

        self.current_player = 0;
        self.passes = 0;
        self.status = MatchStatus::InProgress;
        self.blocked_winner = None;

        info!(
            players = self.players.len(),
            boneyard = self.boneyard.len(),
            "dealt a new match"
        );
    }

    /// Advances to the next player, looping back to the first.
    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
    }

    /// The players in turn order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player at `index` or [None] if out of bounds.
    #[inline]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The chain of tiles placed in this match.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tiles left over after dealing.
    #[inline]
    pub fn boneyard(&self) -> &Boneyard {
        &self.boneyard
    }

    /// The open [ends](Ends) of the board.
    #[inline]
    pub fn board_ends(&self) -> Ends {
        self.board.ends()
    }

    /// The number of consecutive passes since the last placement.
    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the match is still being played and how it ended.
    #[inline]
    pub fn match_status(&self) -> MatchStatus {
        self.status
    }

    /// # Returns
    ///
    /// Whether the player at index `player` holds some tile that can be placed on the board.
    /// [false] when `player` is out of bounds.
    pub fn legal_move_exists(&self, player: usize) -> bool {
        self.players
            .get(player)
            .map_or(false, |player| {
                player.hand().has_playable_move(self.board.ends())
            })
    }

    /// The sum of pips left in each player's hand.
    pub fn points(&self) -> Points {
        self.players
            .iter()
            .map(|player| player.hand().points_sum())
            .collect()
    }

    /// The number of matches won by each player.
    pub fn victories(&self) -> Victories {
        self.players.iter().map(Player::victories).collect()
    }

    /// The number of tiles across every hand, the board, and the boneyard. Always
    /// [TILES_LEN] during a match.
    pub fn tiles_len(&self) -> usize {
        self.players
            .iter()
            .map(|player| player.hand().len())
            .sum::<usize>()
            + self.board.len()
            + self.boneyard.len()
    }

    /// Gives up the players with their victories, ending the session.
    #[inline]
    pub fn into_players(self) -> Players {
        self.players
    }
}
