//! Domain events for the Werewolf context.

use serde::{Deserialize, Serialize};
use soiree_core::event::{DomainEvent, EventMetadata};
use soiree_core::player::{Player, PlayerId};
use uuid::Uuid;

use super::assignment::RoleAssignment;
use super::roles::RoleCounts;
use super::workflow::Fact;

/// Emitted when the deck has been shuffled and dealt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesDistributed {
    /// The game identifier.
    pub game_id: Uuid,
    /// Seated players, in roster order.
    pub players: Vec<Player>,
    /// The deck the moderator configured.
    pub role_counts: RoleCounts,
    /// One dealt role per player, in roster order.
    pub assignments: Vec<RoleAssignment>,
}

/// Emitted when one player has looked at their card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRevealed {
    /// The game identifier.
    pub game_id: Uuid,
    /// The player who saw their card.
    pub player_id: PlayerId,
    /// Zero-based position in the reveal order.
    pub position: usize,
}

/// Emitted when the phone is handed to the moderator and the first night
/// begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationStarted {
    /// The game identifier.
    pub game_id: Uuid,
}

/// Emitted when every card is turned face up after a win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalRevealShown {
    /// The game identifier.
    pub game_id: Uuid,
}

/// Emitted when the table starts over with the same roster and deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRestarted {
    /// The game identifier.
    pub game_id: Uuid,
}

/// Event payload variants for the Werewolf context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WerewolfEventKind {
    /// The deck was dealt.
    RolesDistributed(RolesDistributed),
    /// A player saw their card.
    RoleRevealed(RoleRevealed),
    /// Moderation began.
    ModerationStarted(ModerationStarted),
    /// Something happened at the moderator's table.
    Moderation(Fact),
    /// All cards were turned face up.
    FinalRevealShown(FinalRevealShown),
    /// The round was reset.
    GameRestarted(GameRestarted),
}

impl WerewolfEventKind {
    /// The stored event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            WerewolfEventKind::RolesDistributed(_) => "werewolf.roles_distributed",
            WerewolfEventKind::RoleRevealed(_) => "werewolf.role_revealed",
            WerewolfEventKind::ModerationStarted(_) => "werewolf.moderation_started",
            WerewolfEventKind::Moderation(fact) => fact.event_type(),
            WerewolfEventKind::FinalRevealShown(_) => "werewolf.final_reveal_shown",
            WerewolfEventKind::GameRestarted(_) => "werewolf.game_restarted",
        }
    }
}

/// Domain event envelope for the Werewolf context.
#[derive(Debug, Clone)]
pub struct WerewolfEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: WerewolfEventKind,
}

impl DomainEvent for WerewolfEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("WerewolfEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::village::CAUSE_GRIEF;

    #[test]
    fn test_moderation_facts_carry_their_own_event_type() {
        let kind = WerewolfEventKind::Moderation(Fact::PlayerEliminated {
            player_id: "ana".into(),
            cause: CAUSE_GRIEF.to_owned(),
        });

        assert_eq!(kind.event_type(), "werewolf.player_eliminated");
    }

    #[test]
    fn test_payload_round_trips_through_json() {
        let game_id = Uuid::new_v4();
        let event = WerewolfEvent {
            metadata: EventMetadata::new(
                "werewolf.role_revealed",
                game_id,
                2,
                Uuid::new_v4(),
                Utc::now(),
            ),
            kind: WerewolfEventKind::RoleRevealed(RoleRevealed {
                game_id,
                player_id: "ben".into(),
                position: 1,
            }),
        };

        let decoded: WerewolfEventKind = serde_json::from_value(event.to_payload()).unwrap();

        match decoded {
            WerewolfEventKind::RoleRevealed(payload) => {
                assert_eq!(payload.player_id, PlayerId::from("ben"));
                assert_eq!(payload.position, 1);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
