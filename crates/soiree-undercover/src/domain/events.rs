//! Domain events for the Undercover context.

use serde::{Deserialize, Serialize};
use soiree_core::event::{DomainEvent, EventMetadata};
use soiree_core::player::{Player, PlayerId};
use soiree_words::{Category, WordPair};
use uuid::Uuid;

use super::dealing::WordCard;

/// Emitted when the words have been dealt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStarted {
    /// The round identifier.
    pub round_id: Uuid,
    /// The category the words were drawn from.
    pub category: Category,
    /// Seated players, in roster order.
    pub players: Vec<Player>,
    /// The civilian and undercover words.
    pub words: WordPair,
    /// Undercovers dealt, after clamping.
    pub undercover_count: u32,
    /// One card per player, in turn order.
    pub turn_order: Vec<WordCard>,
}

/// Emitted when a player has looked at their word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRevealed {
    /// The round identifier.
    pub round_id: Uuid,
    /// The player who saw their word.
    pub player_id: PlayerId,
    /// Zero-based position in the turn order.
    pub position: usize,
}

/// Emitted when the words and the undercovers are disclosed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsShown {
    /// The round identifier.
    pub round_id: Uuid,
}

/// Event payload variants for the Undercover context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UndercoverEventKind {
    /// The words were dealt.
    RoundStarted(RoundStarted),
    /// A player saw their word.
    CardRevealed(CardRevealed),
    /// The table learned who was who.
    ResultsShown(ResultsShown),
}

/// Domain event envelope for the Undercover context.
#[derive(Debug, Clone)]
pub struct UndercoverEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: UndercoverEventKind,
}

impl DomainEvent for UndercoverEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            UndercoverEventKind::RoundStarted(_) => "undercover.round_started",
            UndercoverEventKind::CardRevealed(_) => "undercover.card_revealed",
            UndercoverEventKind::ResultsShown(_) => "undercover.results_shown",
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("UndercoverEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
