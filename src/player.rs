use crate::Hand;

/// A named participant with a [hand](Hand) for the current match and a count of matches won
/// since the session started.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    name: String,
    hand: Hand,
    victories: usize,
}

impl Player {
    /// A player with an empty [hand](Hand) and no victories.
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            hand: Hand::new(),
            victories: 0,
        }
    }

    /// The player's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [tiles](crate::Tile) held by the player.
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The number of matches won by the player.
    #[inline]
    pub fn victories(&self) -> usize {
        self.victories
    }

    #[inline]
    pub(crate) fn mut_hand(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[inline]
    pub(crate) fn add_victory(&mut self) {
        self.victories += 1;
    }
}
