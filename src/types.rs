use crate::{Pip, Player, Tile, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// The [tiles](Tile) not dealt to any player. Held for the rest of the match but never drawn
/// from during play.
///
/// # See Also
///
/// * [Tile]
/// * [HAND_LEN](crate::HAND_LEN)
/// * [TurnEngine::boneyard](crate::TurnEngine::boneyard)
pub type Boneyard = Vec<Tile>;
/// A vector of [players](Player) in turn order.
///
/// # See Also
///
/// * [Player]
/// * [PLAYER_CAPACITY]
/// * [TurnEngine::new_match](crate::TurnEngine::new_match)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// The pips at the left and right open ends of the board, both [None] while
/// the board is empty.
///
/// # See Also
///
/// * [Board::ends](crate::Board::ends)
/// * [Hand::has_playable_move](crate::Hand::has_playable_move)
pub type Ends = (Option<Pip>, Option<Pip>);
/// A vector of hand lengths.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [MatchView](crate::MatchView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of the number of matches won by each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [TurnEngine::victories](crate::TurnEngine::victories)
/// * [MatchView](crate::MatchView)
pub type Victories = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of the sum of pips held in each player's hand.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [TurnEngine::points](crate::TurnEngine::points)
/// * [MatchOutcome](crate::runtime::MatchOutcome)
pub type Points = SmallVec<[usize; PLAYER_CAPACITY]>;
