//! Who is still alive, who died and why, who holds the mayor's sash and who
//! is in love.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use soiree_core::player::{Player, PlayerId};
use tracing::debug;

use super::assignment::RoleAssignment;
use super::roles::Role;

/// Cause recorded for a werewolf (or other night) victim.
pub const CAUSE_NIGHT: &str = "night victim";
/// Cause recorded for the hunter's target.
pub const CAUSE_HUNTER_SHOT: &str = "hunter's shot";
/// Cause recorded for a lover who follows their partner.
pub const CAUSE_GRIEF: &str = "grief";
/// Cause recorded for the player banished by the day vote.
pub const CAUSE_BANISHED: &str = "banished by the village";

/// A dead player, in order of death.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadRecord {
    pub player_id: PlayerId,
    pub name: String,
    pub role: Role,
    pub cause: String,
}

/// Follow-ups a single elimination triggers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectResult {
    /// The dead player was mayor.
    pub mayor_vacated: bool,
    /// The dead player's lover, still alive and about to follow.
    pub partner_to_follow: Option<PlayerId>,
    /// The dead player was the hunter.
    pub hunter_triggered: bool,
}

impl EffectResult {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        !self.mayor_vacated && self.partner_to_follow.is_none() && !self.hunter_triggered
    }

    /// Combines the results of simultaneous deaths. Flags are OR-ed; the first
    /// partner wins.
    #[must_use]
    pub fn merge(self, other: EffectResult) -> EffectResult {
        EffectResult {
            mayor_vacated: self.mayor_vacated || other.mayor_vacated,
            partner_to_follow: self.partner_to_follow.or(other.partner_to_follow),
            hunter_triggered: self.hunter_triggered || other.hunter_triggered,
        }
    }
}

/// The table during moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    players: Vec<Player>,
    assignments: Vec<RoleAssignment>,
    alive: HashSet<PlayerId>,
    dead: Vec<DeadRecord>,
    mayor: Option<PlayerId>,
    lovers: Option<(PlayerId, PlayerId)>,
}

impl Village {
    /// Seats `players` with their dealt roles; everybody starts alive.
    #[must_use]
    pub fn new(players: Vec<Player>, assignments: Vec<RoleAssignment>) -> Self {
        let alive = assignments.iter().map(|a| a.player_id.clone()).collect();
        Self {
            players,
            assignments,
            alive,
            dead: Vec::new(),
            mayor: None,
            lovers: None,
        }
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn role_of(&self, id: &PlayerId) -> Option<Role> {
        self.assignments
            .iter()
            .find(|a| &a.player_id == id)
            .map(|a| a.role)
    }

    #[must_use]
    pub fn is_alive(&self, id: &PlayerId) -> bool {
        self.alive.contains(id)
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    /// Living players in roster order.
    pub fn alive_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| self.alive.contains(&p.id))
    }

    /// Roles still held by a living player, one entry per holder.
    pub fn alive_roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.assignments
            .iter()
            .filter(|a| self.alive.contains(&a.player_id))
            .map(|a| a.role)
    }

    #[must_use]
    pub fn is_role_alive(&self, role: Role) -> bool {
        self.alive_roles().any(|r| r == role)
    }

    #[must_use]
    pub fn dead(&self) -> &[DeadRecord] {
        &self.dead
    }

    #[must_use]
    pub fn mayor(&self) -> Option<&PlayerId> {
        self.mayor.as_ref()
    }

    #[must_use]
    pub fn lovers(&self) -> Option<&(PlayerId, PlayerId)> {
        self.lovers.as_ref()
    }

    #[must_use]
    pub fn is_lover(&self, id: &PlayerId) -> bool {
        self.lovers
            .as_ref()
            .is_some_and(|(a, b)| a == id || b == id)
    }

    /// The other half of the couple, if `id` is a lover.
    #[must_use]
    pub fn partner_of(&self, id: &PlayerId) -> Option<&PlayerId> {
        match &self.lovers {
            Some((a, b)) if a == id => Some(b),
            Some((a, b)) if b == id => Some(a),
            _ => None,
        }
    }

    pub(crate) fn set_mayor(&mut self, id: PlayerId) {
        self.mayor = Some(id);
    }

    pub(crate) fn set_lovers(&mut self, first: PlayerId, second: PlayerId) {
        self.lovers = Some((first, second));
    }

    /// Kills `id` and reports what the death sets in motion. Unknown or
    /// already-dead ids are a no-op with a quiet result.
    pub fn eliminate(&mut self, id: &PlayerId, cause: &str) -> EffectResult {
        if !self.alive.remove(id) {
            debug!(player_id = %id, "elimination ignored, player is not alive");
            return EffectResult::default();
        }
        let role = self.role_of(id).unwrap_or(Role::Villager);
        let name = self.player(id).map_or_else(|| id.to_string(), |p| p.name.clone());
        self.dead.push(DeadRecord {
            player_id: id.clone(),
            name,
            role,
            cause: cause.to_owned(),
        });

        let mayor_vacated = self.mayor.as_ref() == Some(id);
        if mayor_vacated {
            self.mayor = None;
        }
        let partner_to_follow = self
            .partner_of(id)
            .filter(|partner| self.alive.contains(*partner))
            .cloned();

        EffectResult {
            mayor_vacated,
            partner_to_follow,
            hunter_triggered: role == Role::Hunter,
        }
    }
}
