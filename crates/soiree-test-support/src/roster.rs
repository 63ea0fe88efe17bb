//! Roster fixtures.

use soiree_core::player::Player;

/// Builds `names.len()` players whose ids equal their lower-cased names.
#[must_use]
pub fn roster(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .map(|name| Player::new(name.to_lowercase(), *name))
        .collect()
}
