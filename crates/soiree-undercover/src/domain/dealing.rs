//! Dealing words to the table.

use serde::{Deserialize, Serialize};
use soiree_core::player::{Player, PlayerId};
use soiree_core::rng::{DeterministicRng, shuffle};
use soiree_words::WordPair;

/// Minimum table size for an Undercover round.
pub const MIN_PLAYERS: usize = 3;

/// Which word a player was dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Civilian,
    Undercover,
}

/// One player's secret word, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    pub player_id: PlayerId,
    pub side: Side,
    pub word: String,
}

/// Most undercovers a table of `player_count` can hold: at least two
/// civilians, at least one undercover.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn max_undercovers(player_count: usize) -> u32 {
    (player_count.saturating_sub(2) as u32).max(1)
}

/// Brings a requested undercover count into `[1, max_undercovers]`.
#[must_use]
pub fn clamp_undercover_count(requested: u32, player_count: usize) -> u32 {
    requested.clamp(1, max_undercovers(player_count))
}

/// Shuffles the cards twice and the players once, then pairs them up. The
/// result is the turn order.
#[must_use]
pub fn deal(
    players: &[Player],
    pair: &WordPair,
    undercover_count: u32,
    rng: &mut dyn DeterministicRng,
) -> Vec<WordCard> {
    let undercovers = clamp_undercover_count(undercover_count, players.len()) as usize;
    let mut sides: Vec<Side> = (0..players.len())
        .map(|i| {
            if i < undercovers {
                Side::Undercover
            } else {
                Side::Civilian
            }
        })
        .collect();
    shuffle(&mut sides, rng);
    shuffle(&mut sides, rng);

    let mut order: Vec<&Player> = players.iter().collect();
    shuffle(&mut order, rng);

    order
        .into_iter()
        .zip(sides)
        .map(|(player, side)| WordCard {
            player_id: player.id.clone(),
            side,
            word: match side {
                Side::Civilian => pair.civilian.clone(),
                Side::Undercover => pair.undercover.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use soiree_core::rng::StdRandom;

    use super::*;

    fn table(n: usize) -> Vec<Player> {
        (1..=n).map(|i| Player::new(format!("p{i}"), format!("Player {i}"))).collect()
    }

    fn pair() -> WordPair {
        WordPair::new("Café", "Thé")
    }

    #[test]
    fn test_clamp_keeps_two_civilians() {
        assert_eq!(clamp_undercover_count(5, 5), 3);
        assert_eq!(clamp_undercover_count(2, 5), 2);
        assert_eq!(clamp_undercover_count(0, 5), 1);
        assert_eq!(clamp_undercover_count(4, 3), 1);
    }

    #[test]
    fn test_max_undercovers_never_drops_below_one() {
        assert_eq!(max_undercovers(2), 1);
        assert_eq!(max_undercovers(3), 1);
        assert_eq!(max_undercovers(10), 8);
    }

    #[test]
    fn test_deal_hands_out_the_requested_split() {
        let players = table(7);

        let cards = deal(&players, &pair(), 2, &mut StdRandom::seeded(11));

        let undercovers: Vec<&WordCard> =
            cards.iter().filter(|c| c.side == Side::Undercover).collect();
        assert_eq!(cards.len(), 7);
        assert_eq!(undercovers.len(), 2);
        assert!(undercovers.iter().all(|c| c.word == "Thé"));
        assert!(
            cards
                .iter()
                .filter(|c| c.side == Side::Civilian)
                .all(|c| c.word == "Café")
        );
    }

    #[test]
    fn test_turn_order_seats_every_player_once() {
        let players = table(6);

        let cards = deal(&players, &pair(), 1, &mut StdRandom::seeded(5));

        let seated: HashSet<&PlayerId> = cards.iter().map(|c| &c.player_id).collect();
        assert_eq!(seated.len(), 6);
        assert!(players.iter().all(|p| seated.contains(&p.id)));
    }

    #[test]
    fn test_deal_clamps_an_oversized_request() {
        let players = table(4);

        let cards = deal(&players, &pair(), 9, &mut StdRandom::seeded(1));

        assert_eq!(cards.iter().filter(|c| c.side == Side::Undercover).count(), 2);
    }
}
