use crate::{Ends, Tile, HAND_CAPACITY};
use derive_more::{Display, Error};
use itertools::Itertools;
use smallvec::SmallVec;
use std::slice;

/// A player's [tiles](Tile) in the order they were received.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Hand {
    tiles: SmallVec<[Tile; HAND_CAPACITY]>,
}

/// Describes the reason why a [tile](Tile) could not be taken from a [`Hand`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum HandError {
    /// Attempting to take a [tile](Tile) at an index past the end of the hand.
    #[display("tile index {index} is out of range for a hand of {hand_len} tiles")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of [tiles](Tile) in the hand.
        hand_len: usize,
    },
}

impl Hand {
    /// An empty hand.
    #[inline]
    pub fn new() -> Hand {
        Hand::default()
    }

    /// Appends `tile` to the end of the hand.
    #[inline]
    pub fn receive(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Removes the [tile](Tile) at `index`, shifting later tiles down by one. The hand is not
    /// changed on failure.
    ///
    /// # Errors
    ///
    /// * [HandError::IndexOutOfRange] Attempting to take a [tile](Tile) at an index past the end
    /// of the hand.
    pub fn remove(&mut self, index: usize) -> Result<Tile, HandError> {
        let hand_len = self.tiles.len();
        if index >= hand_len {
            return Err(HandError::IndexOutOfRange { index, hand_len });
        }

        Ok(self.tiles.remove(index))
    }

    /// The [tile](Tile) at `index` or [None] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// # Returns
    ///
    /// Whether some [tile](Tile) can be placed on the board with open `ends`. Any tile opens an
    /// empty board, so this is always true when both ends are [None].
    pub fn has_playable_move(&self, ends: Ends) -> bool {
        ends == (None, None) || self.tiles.iter().any(|tile| is_playable(tile, ends))
    }

    /// # Returns
    ///
    /// The indexes of every [tile](Tile) that can be placed on the board with open `ends`.
    pub fn playable_indexes(&self, ends: Ends) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .positions(move |tile| is_playable(tile, ends))
    }

    /// The sum of both pips over every [tile](Tile) in the hand.
    #[inline]
    pub fn points_sum(&self) -> usize {
        self.tiles.iter().map(Tile::points).sum()
    }

    /// Whether the hand holds no [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The number of [tiles](Tile) in the hand.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// An [iterator](Iterator) over the [tiles](Tile) in the order they were received.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Removes every [tile](Tile) from the hand.
    #[inline]
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

/// Whether `tile` has a pip equal to some open end, or the board is empty.
fn is_playable(tile: &Tile, ends: Ends) -> bool {
    match ends {
        (None, None) => true,
        (left_end, right_end) => [left_end, right_end]
            .into_iter()
            .flatten()
            .any(|end| tile.has_pip(end)),
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Hand {
        Hand {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Tile> for Hand {
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Tile;
    type IntoIter = slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
