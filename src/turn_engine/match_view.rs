use crate::{
    Board, Ends, Hand, HandLens, MatchStatus, Player, TurnEngine, Victories, PLAYER_CAPACITY,
};
use smallvec::SmallVec;

/// Immutably borrows the public information of a [`TurnEngine`] that every player may see.
#[derive(Debug)]
pub struct MatchView<'a> {
    /// The chain of tiles placed in this match.
    pub board: &'a Board,
    /// The number of tiles left over after dealing.
    pub boneyard_len: usize,
    /// A vector of hand lengths.
    pub hand_lens: HandLens,
    /// The name of each player in turn order.
    pub names: SmallVec<[&'a str; PLAYER_CAPACITY]>,
    /// The number of matches won by each player.
    pub victories: Victories,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The number of consecutive passes since the last placement.
    pub passes: usize,
    /// Whether the match is still being played and how it ended.
    pub status: MatchStatus,
}

impl MatchView<'_> {
    /// The open [ends](Ends) of the board.
    #[inline]
    pub fn board_ends(&self) -> Ends {
        self.board.ends()
    }
}

impl TurnEngine {
    /// # Returns
    ///
    /// A new [`MatchView`] struct, which immutably borrows the board from [`TurnEngine`], but
    /// with `boneyard` replaced by `boneyard.len()` and each hand replaced by its number
    /// of tiles.
    pub fn match_view(&self) -> MatchView<'_> {
        MatchView {
            board: &self.board,
            boneyard_len: self.boneyard.len(),
            hand_lens: self
                .players
                .iter()
                .map(|player| player.hand().len())
                .collect(),
            names: self.players.iter().map(Player::name).collect(),
            victories: self.victories(),
            current_player: self.current_player,
            passes: self.passes,
            status: self.status,
        }
    }

    /// # Returns
    ///
    /// The [hand](Hand) held by the requesting player or `None` if out of bounds.
    pub fn get_hand(&self, index: usize) -> Option<&Hand> {
        self.players.get(index).map(Player::hand)
    }
}
