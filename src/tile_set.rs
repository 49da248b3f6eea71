use crate::{Tile, MAX_PIP, TILES_LEN};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tap::Tap;

/// Every [`Tile`] of a double-six set, exactly once.
pub type TileSet = [Tile; TILES_LEN];

/// # Returns
///
/// An array of all [`Tile`] variants in low then high pip order:
/// `[0|0]`, `[0|1]`, ..., `[0|6]`, `[1|1]`, ..., `[6|6]`.
#[inline]
pub fn tiles() -> TileSet {
    let mut tiles = [Tile::new(0, 0); TILES_LEN];
    let pairs = (0..=MAX_PIP).flat_map(|low| (low..=MAX_PIP).map(move |high| Tile::new(low, high)));
    for (slot, tile) in tiles.iter_mut().zip_eq(pairs) {
        *slot = tile;
    }

    tiles
}

/// Shuffles `tiles` in place into a uniformly random permutation, consuming entropy only
/// from `rng`.
#[inline]
pub fn shuffle<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    tiles.shuffle(rng);
}

/// # Returns
///
/// A uniformly random permutation of [every tile](tiles).
pub fn shuffled_tiles<R: Rng + ?Sized>(rng: &mut R) -> TileSet {
    tiles().tap_mut(|tiles| shuffle(tiles, rng))
}

/// Shuffles [every tile](tiles) with a generator seeded by `seed`, or by the operating system
/// when `seed` is [None]. The same seed always produces the same permutation.
///
/// # Returns
///
/// A uniformly random permutation of [every tile](tiles).
///
/// # See Also
///
/// * [shuffled_tiles]
pub fn generate_shuffled_tile_set(seed: Option<u64>) -> TileSet {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffled_tiles(&mut rng)
}
