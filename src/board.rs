use crate::{Ends, Pip, PlacedTile, Side, Tile, TILES_LEN};
use derive_more::{Display, Error};
use itertools::Itertools;
use std::collections::{vec_deque, VecDeque};
use std::fmt;

/// The chain of [placed tiles](PlacedTile) on the table, from its left end to its right end.
/// The touching pips of every pair of adjacent tiles are equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    chain: VecDeque<PlacedTile>,
}

/// Describes why a [tile](Tile) could not be [placed](Board::place): neither of its pips
/// equals the open end at `side`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
#[display("{tile} does not match the {side} end {end}")]
pub struct PlacementMismatch {
    /// The [tile](Tile) being placed.
    pub tile: Tile,
    /// The end of the board the [tile](Tile) was placed on.
    pub side: Side,
    /// The open pip at `side`.
    pub end: Pip,
}

impl Board {
    /// An empty board.
    #[inline]
    pub fn new() -> Board {
        Board {
            chain: VecDeque::with_capacity(TILES_LEN),
        }
    }

    /// The pip at the open left end or [None] while the board is empty.
    #[inline]
    pub fn left_end(&self) -> Option<Pip> {
        self.chain.front().map(|placed| placed.left)
    }

    /// The pip at the open right end or [None] while the board is empty.
    #[inline]
    pub fn right_end(&self) -> Option<Pip> {
        self.chain.back().map(|placed| placed.right)
    }

    /// Both open [ends](Ends).
    #[inline]
    pub fn ends(&self) -> Ends {
        (self.left_end(), self.right_end())
    }

    /// Checks whether `tile` can be [placed](Board::place) at `side` without changing the board.
    ///
    /// # Errors
    ///
    /// * [PlacementMismatch] Neither pip of `tile` equals the open end at `side`.
    ///
    /// # Returns
    ///
    /// The orientation `tile` would be placed in.
    pub fn check(&self, tile: Tile, side: Side) -> Result<PlacedTile, PlacementMismatch> {
        let end = match side {
            Side::Left => self.left_end(),
            Side::Right => self.right_end(),
        };
        // any tile opens an empty board and side is irrelevant
        let Some(end) = end else {
            return Ok(tile.opening());
        };

        tile.orient(side, end)
            .ok_or(PlacementMismatch { tile, side, end })
    }

    /// Places `tile` at `side` with its matching pip touching the chain, flipping it when
    /// needed. On an empty board, `side` is ignored and `tile` becomes the only link with its
    /// low pip on the left. The board is not changed on failure.
    ///
    /// # Errors
    ///
    /// * [PlacementMismatch] Neither pip of `tile` equals the open end at `side`.
    ///
    /// # Returns
    ///
    /// The [placed tile](PlacedTile) in its final orientation.
    pub fn place(&mut self, tile: Tile, side: Side) -> Result<PlacedTile, PlacementMismatch> {
        let placed = self.check(tile, side)?;
        match side {
            Side::Left => self.chain.push_front(placed),
            Side::Right => self.chain.push_back(placed),
        }

        Ok(placed)
    }

    /// Whether no [tile](Tile) has been placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// The number of [placed tiles](PlacedTile).
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// An [iterator](Iterator) over the [placed tiles](PlacedTile) from left to right.
    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, PlacedTile> {
        self.chain.iter()
    }

    /// Removes every [placed tile](PlacedTile).
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Whether every pair of adjacent [tiles](PlacedTile) touch with equal pips.
    pub fn is_chain(&self) -> bool {
        self.chain
            .iter()
            .tuple_windows()
            .all(|(left, right)| left.right == right.left)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chain.is_empty() {
            return write!(f, "(empty)");
        }
        for placed in &self.chain {
            write!(f, "{placed}")?;
        }

        Ok(())
    }
}
