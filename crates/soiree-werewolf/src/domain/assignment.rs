//! Dealing the deck to the table.

use serde::{Deserialize, Serialize};
use soiree_core::error::DomainError;
use soiree_core::player::{Player, PlayerId, validate_roster};
use soiree_core::rng::{DeterministicRng, shuffle};

use super::roles::{MIN_PLAYERS, Role, RoleCounts};

/// One player's hidden role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub player_id: PlayerId,
    pub role: Role,
}

/// Shuffles the deck described by `counts` and deals one card per player,
/// in roster order.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the roster is invalid or smaller than
/// [`MIN_PLAYERS`], or if the deck size differs from the table size.
pub fn assign_roles(
    players: &[Player],
    counts: &RoleCounts,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<RoleAssignment>, DomainError> {
    validate_roster(players, MIN_PLAYERS)?;
    let total = counts.total();
    if usize::try_from(total).ok() != Some(players.len()) {
        return Err(DomainError::Validation(format!(
            "the deck holds {total} roles but {} players are seated",
            players.len()
        )));
    }

    let mut deck = counts.deck();
    shuffle(&mut deck, rng);

    Ok(players
        .iter()
        .zip(deck)
        .map(|(player, role)| RoleAssignment {
            player_id: player.id.clone(),
            role,
        })
        .collect())
}
