use derive_more::Display;
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of pips on one half of a [`Tile`].
pub type Pip = u8;

/// The highest number of pips on one half of a [`Tile`]. A double-six set.
pub const MAX_PIP: Pip = 6;
/// The number of distinct [`Pip`] values. `0` through [MAX_PIP].
pub const PIPS_LEN: usize = MAX_PIP as usize + 1;
/// The number of [`Tile`] variants. 28 unordered pairs of pips.
pub const TILES_LEN: usize = PIPS_LEN * (PIPS_LEN + 1) / 2;
/// The number of doubles in a set. One for every [`Pip`] value.
pub const DOUBLES_LEN: usize = PIPS_LEN;
const _: () = assert!(TILES_LEN == 28);

/// Describes an unordered pair of [pips](Pip). `Tile::new(2, 1)` and `Tile::new(1, 2)` are the
/// same tile; the lower pip is always stored first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Display)]
#[display("[{low}|{high}]")]
pub struct Tile {
    low: Pip,
    high: Pip,
}

impl Tile {
    /// # Panics
    ///
    /// When some pip is greater than [MAX_PIP].
    ///
    /// # Returns
    ///
    /// The [`Tile`] holding both pips in either order.
    #[inline]
    pub const fn new(first: Pip, second: Pip) -> Tile {
        assert!(first <= MAX_PIP && second <= MAX_PIP, "pips must lie in 0..=MAX_PIP");
        if first <= second {
            Tile {
                low: first,
                high: second,
            }
        } else {
            Tile {
                low: second,
                high: first,
            }
        }
    }

    /// The lower pip.
    #[inline]
    pub const fn low(&self) -> Pip {
        self.low
    }

    /// The higher pip.
    #[inline]
    pub const fn high(&self) -> Pip {
        self.high
    }

    /// Whether both pips are equal.
    #[inline]
    pub const fn is_double(&self) -> bool {
        self.low == self.high
    }

    /// The sum of both pips.
    #[inline]
    pub const fn points(&self) -> usize {
        self.low as usize + self.high as usize
    }

    /// Whether either pip equals `pip`.
    #[inline]
    pub const fn has_pip(&self, pip: Pip) -> bool {
        self.low == pip || self.high == pip
    }

    /// Orients the tile against an open `end` of the board on `side` so that the matching pip
    /// touches the chain and the other pip faces outward.
    ///
    /// # Returns
    ///
    /// The oriented [`PlacedTile`] or [None] when neither pip equals `end`.
    pub const fn orient(&self, side: Side, end: Pip) -> Option<PlacedTile> {
        let (touching, outward) = if self.high == end {
            (self.high, self.low)
        } else if self.low == end {
            (self.low, self.high)
        } else {
            return None;
        };

        Some(match side {
            Side::Left => PlacedTile {
                left: outward,
                right: touching,
            },
            Side::Right => PlacedTile {
                left: touching,
                right: outward,
            },
        })
    }

    /// # Returns
    ///
    /// The tile placed as the first link of the chain, low pip on the left.
    #[inline]
    pub const fn opening(&self) -> PlacedTile {
        PlacedTile {
            left: self.low,
            right: self.high,
        }
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        // (a, b) and (b, a) fold onto the same tile, so only one order is accepted
        loop {
            let low = rng.gen_range(0..=MAX_PIP);
            let high = rng.gen_range(0..=MAX_PIP);
            if low <= high {
                return Tile { low, high };
            }
        }
    }
}

/// Describes an end of the board where a [`Tile`] is placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive, Display)]
pub enum Side {
    /// `0`.
    Left = 0,
    /// `1`.
    Right = 1,
}

impl Side {
    /// The number of [`Side`] variants. 2 sides.
    pub const SIDES_LEN: usize = 2;

    /// # Returns
    ///
    /// An array of all [`Side`] variants in order.
    #[inline]
    pub fn sides() -> [Side; Side::SIDES_LEN] {
        [Side::Left, Side::Right]
    }
}

impl Distribution<Side> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        let index = rng.gen_range(0..Side::SIDES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Side::SIDES_LEN);
            unreachable!(
                "index ({:?}) should be matched since sides cover all indexes \
                in range 0..Side::SIDES_LEN (0..{:?}).",
                index,
                Side::SIDES_LEN
            );
        })
    }
}

/// Describes a [`Tile`] on the board with a fixed left and right pip.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("[{left}|{right}]")]
pub struct PlacedTile {
    /// The pip facing the left end of the board.
    pub left: Pip,
    /// The pip facing the right end of the board.
    pub right: Pip,
}

impl PlacedTile {
    /// # Returns
    ///
    /// The unordered [`Tile`] this placement was made from.
    #[inline]
    pub const fn tile(&self) -> Tile {
        Tile::new(self.left, self.right)
    }
}
