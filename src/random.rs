use crate::{shuffled_tiles, Hand, Player, HAND_LEN, MAX_PLAYERS, MIN_PLAYERS};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A [hand](Hand) of [HAND_LEN] distinct [tiles](crate::Tile) drawn from a shuffled set.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    shuffled_tiles(rng).into_iter().take(HAND_LEN).collect()
}

/// Between [MIN_PLAYERS] and [MAX_PLAYERS] distinct names in a random order.
pub fn random_player_names<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let players_len = rng.gen_range(MIN_PLAYERS..=MAX_PLAYERS);

    (0..players_len)
        .map(|index| format!("player {index}"))
        .collect::<Vec<_>>()
        .tap_mut(|names| names.shuffle(rng))
}

/// Between [MIN_PLAYERS] and [MAX_PLAYERS] [players](Player) with empty hands and no victories.
pub fn random_players<R: Rng + ?Sized>(rng: &mut R) -> Vec<Player> {
    random_player_names(rng)
        .into_iter()
        .map(Player::new)
        .collect()
}

/// A number of players outside `MIN_PLAYERS..=MAX_PLAYERS`.
pub fn random_invalid_players_len<R: Rng + ?Sized>(rng: &mut R) -> usize {
    if rng.gen() {
        rng.gen_range(0..MIN_PLAYERS)
    } else {
        rng.gen_range(MAX_PLAYERS + 1..=MAX_PLAYERS + 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn random_hand_distinct() {
        let hand = random_hand(&mut rand::thread_rng());

        assert_eq!(HAND_LEN, hand.len());
        assert_eq!(0, hand.iter().duplicates().count());
    }

    #[test]
    fn random_player_names_len() {
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let names = random_player_names(&mut rng);

            assert!((MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()));
            assert_eq!(0, names.iter().duplicates().count());
        }
    }

    #[test]
    fn random_players_empty() {
        let players = random_players(&mut rand::thread_rng());

        assert!((MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()));
        for player in &players {
            assert!(player.hand().is_empty());
            assert_eq!(0, player.victories());
        }
    }

    #[test]
    fn random_invalid_players_len_out_of_range() {
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let players_len = random_invalid_players_len(&mut rng);

            assert!(!(MIN_PLAYERS..=MAX_PLAYERS).contains(&players_len));
        }
    }
}
