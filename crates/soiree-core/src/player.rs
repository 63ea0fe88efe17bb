//! Roster entries shared by every game.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opaque player identifier supplied by the roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster entry. Immutable for the duration of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Creates a roster entry.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Checks a roster before a game starts: at least `min_players` entries,
/// unique ids, non-blank names.
///
/// # Errors
///
/// Returns `DomainError::Validation` describing the first problem found.
pub fn validate_roster(players: &[Player], min_players: usize) -> Result<(), DomainError> {
    if players.len() < min_players {
        return Err(DomainError::Validation(format!(
            "at least {min_players} players are required, got {}",
            players.len()
        )));
    }
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if player.name.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "player {} has a blank name",
                player.id
            )));
        }
        if !seen.insert(&player.id) {
            return Err(DomainError::Validation(format!(
                "duplicate player id {}",
                player.id
            )));
        }
    }
    Ok(())
}
