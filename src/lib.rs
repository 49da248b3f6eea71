//! Concrete structs to represent and protect the state of a game of dominoes with methods to
//! progress through each match.
//!
//! ## Summary
//!
//! A session is played by `2` to `4` players with a double-six set of `28` [tiles](Tile).
//! Each match deals [HAND_LEN] [tiles](Tile) to each player and keeps the rest in an unused
//! [boneyard](Boneyard). Players take turns to extend a single chain of [tiles](Tile) on
//! the [board](Board) by placing a [tile](Tile) that matches one of its two open ends. A player
//! without a matching [tile](Tile) passes. The match is won by the first player to place their
//! last [tile](Tile), or becomes blocked once every player has passed in a row. A blocked match
//! is won by the player holding the fewest points. Victories are counted for each player
//! across matches.
//!
//! ## What are the phases of a match?
//!
//! * `InProgress`: The current player must either [place a tile](TurnEngine::attempt_move) or
//! [pass](TurnEngine::pass_turn) when none of their [tiles](Tile) match.
//! * `Won`: Some player placed their last [tile](Tile). Their victories increase immediately.
//! * `Blocked`: Every player passed in a row. The match is
//! [scored](TurnEngine::score_blocked_match) to award the victory.
//!
//! Represented by [MatchStatus].
//!
//! ## How is a match created?
//!
//! [TurnEngine::new_match] and [TurnEngine::new_random_match] check the number of players,
//! shuffle [every tile](tiles), and deal to each player in turn order. [TurnEngine::next_match]
//! deals another match to the same players and keeps their victories.
//!
//! ## How is a match advanced?
//!
//! The current player is represented as the index of the player whose turn it is in the range
//! `0`..(the number of players) which either increments or loops back to `0` when necessary.
//!
//! ### How are tiles placed?
//!
//! [Remove](Hand::remove) the selected [tile](Tile) from the current player's hand,
//! [place](Board::place) it at one end of the board with its matching pip touching the chain,
//! reset the passes, and advance to the next player unless the hand is now empty.
//! Any [tile](Tile) opens an empty board. A rejected move leaves the match unchanged and
//! the same player keeps the turn.
//!
//! ## How is a blocked match scored?
//!
//! Each hand is worth the sum of both pips of every [tile](Tile) left in it. The player with
//! the lowest sum wins. Ties go to the earliest player in turn order.
//!
//! ## How is a match viewed?
//!
//! To obtain an immutable representation of the current state of a match visible to all players,
//! call [TurnEngine::match_view]. [TurnEngine::get_hand] shares private information for each
//! individual player.
//!
//! ## How is a match played?
//!
//! The [runtime] module drives a match to its end by asking one [seat](runtime::Seat) per
//! player for moves and sending them updates.
//!
//! ## How are matches tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [TurnEngine]
//! implements methods to get mutable references to its properties and to set properties for
//! common scenarios, and helper functions generate random data.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use board::*;
pub use consts::*;
pub use hand::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use tile::*;
pub use tile_set::*;
pub use turn_engine::*;
pub use types::*;

mod board;
mod consts;
mod hand;
mod player;
#[cfg(test)]
mod random;
pub mod runtime;
mod tile;
mod tile_set;
mod turn_engine;
mod types;
