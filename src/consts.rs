use crate::TILES_LEN;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The minimum number of players in a match. `2` players.
///
/// # See Also
///
/// * [TurnEngine::new_match](crate::TurnEngine::new_match)
pub const MIN_PLAYERS: usize = 2;
/// The maximum number of players in a match. `4` players.
///
/// # See Also
///
/// * [TurnEngine::new_match](crate::TurnEngine::new_match)
pub const MAX_PLAYERS: usize = 4;
/// The number of [tiles](crate::Tile) dealt to each player at the start of a match.
/// `7` [tiles](crate::Tile) per hand.
///
/// # See Also
///
/// * [TurnEngine::new_match](crate::TurnEngine::new_match)
/// * [Boneyard](crate::Boneyard)
pub const HAND_LEN: usize = 7;
const _: () = assert!(MAX_PLAYERS * HAND_LEN <= TILES_LEN);
const _: () = assert!(MIN_PLAYERS <= MAX_PLAYERS);
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to
/// [MAX_PLAYERS].
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [HandLens](crate::HandLens)
/// * [Victories](crate::Victories)
/// * [Points](crate::Points)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PLAYERS
);
/// A [hand](crate::Hand) will be stored on the stack until the number of [tiles](crate::Tile)
/// in it becomes greater than `HAND_CAPACITY`. If the environment variable named
/// `HAND_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to [HAND_LEN].
///
/// Hands never grow past [HAND_LEN] since there is no drawing during play.
///
/// # See Also
///
/// * [Hand](crate::Hand)
pub const HAND_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    HAND_LEN
);
