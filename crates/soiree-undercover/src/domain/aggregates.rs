//! Aggregate roots for the Undercover context.

use serde::Serialize;
use soiree_core::aggregate::AggregateRoot;
use soiree_core::clock::Clock;
use soiree_core::error::DomainError;
use soiree_core::event::EventMetadata;
use soiree_core::player::{Player, validate_roster};
use soiree_core::rng::DeterministicRng;
use soiree_words::{Category, WordPair};
use uuid::Uuid;

use super::dealing::{MIN_PLAYERS, WordCard, clamp_undercover_count, deal};
use super::events::{
    CardRevealed, ResultsShown, RoundStarted, UndercoverEvent, UndercoverEventKind,
};

/// Round phase state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Setup,
    Reveal,
    Playing,
    Results,
}

/// The aggregate root for an Undercover round.
#[derive(Debug)]
pub struct UndercoverRound {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) phase: RoundPhase,
    pub(crate) category: Category,
    pub(crate) players: Vec<Player>,
    pub(crate) words: Option<WordPair>,
    pub(crate) undercover_count: u32,
    pub(crate) turn_order: Vec<WordCard>,
    /// How many players have seen their word.
    pub(crate) revealed: usize,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<UndercoverEvent>,
}

impl UndercoverRound {
    /// Creates a new round waiting to be dealt.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            phase: RoundPhase::Setup,
            category: Category::default(),
            players: Vec::new(),
            words: None,
            undercover_count: 0,
            turn_order: Vec::new(),
            revealed: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Deals `words` to the table, producing a `RoundStarted` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the round was already dealt or
    /// the roster has fewer than three valid players.
    #[allow(clippy::too_many_arguments)]
    pub fn start(
        &mut self,
        players: Vec<Player>,
        category: Category,
        undercover_count: u32,
        words: WordPair,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        if self.phase != RoundPhase::Setup {
            return Err(DomainError::Validation(
                "round must be in Setup phase".to_owned(),
            ));
        }
        validate_roster(&players, MIN_PLAYERS)?;

        let undercover_count = clamp_undercover_count(undercover_count, players.len());
        let turn_order = deal(&players, &words, undercover_count, rng);

        let event = UndercoverEvent {
            metadata: EventMetadata::new(
                "undercover.round_started",
                self.id,
                self.next_sequence_number(),
                correlation_id,
                clock.now(),
            ),
            kind: UndercoverEventKind::RoundStarted(RoundStarted {
                round_id: self.id,
                category,
                players,
                words,
                undercover_count,
                turn_order,
            }),
        };
        self.uncommitted_events.push(event);
        Ok(())
    }

    /// Shows the next player in turn order their word.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `Reveal` phase.
    pub fn reveal_next(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), DomainError> {
        if self.phase != RoundPhase::Reveal {
            return Err(DomainError::Validation(
                "round must be in Reveal phase".to_owned(),
            ));
        }
        let card = self
            .turn_order
            .get(self.revealed)
            .ok_or_else(|| DomainError::validation("every word has already been revealed"))?;

        let event = UndercoverEvent {
            metadata: EventMetadata::new(
                "undercover.card_revealed",
                self.id,
                self.next_sequence_number(),
                correlation_id,
                clock.now(),
            ),
            kind: UndercoverEventKind::CardRevealed(CardRevealed {
                round_id: self.id,
                player_id: card.player_id.clone(),
                position: self.revealed,
            }),
        };
        self.uncommitted_events.push(event);
        Ok(())
    }

    /// Discloses both words and who was undercover.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `Playing` phase.
    pub fn show_results(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        if self.phase != RoundPhase::Playing {
            return Err(DomainError::Validation(
                "round must be in Playing phase".to_owned(),
            ));
        }
        let event = UndercoverEvent {
            metadata: EventMetadata::new(
                "undercover.results_shown",
                self.id,
                self.next_sequence_number(),
                correlation_id,
                clock.now(),
            ),
            kind: UndercoverEventKind::ResultsShown(ResultsShown { round_id: self.id }),
        };
        self.uncommitted_events.push(event);
        Ok(())
    }
}

impl AggregateRoot for UndercoverRound {
    type Event = UndercoverEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            UndercoverEventKind::RoundStarted(payload) => {
                self.phase = RoundPhase::Reveal;
                self.category = payload.category;
                self.players.clone_from(&payload.players);
                self.words = Some(payload.words.clone());
                self.undercover_count = payload.undercover_count;
                self.turn_order.clone_from(&payload.turn_order);
                self.revealed = 0;
            }
            UndercoverEventKind::CardRevealed(payload) => {
                self.revealed = payload.position + 1;
                if self.revealed >= self.turn_order.len() {
                    self.phase = RoundPhase::Playing;
                }
            }
            UndercoverEventKind::ResultsShown(_) => {
                self.phase = RoundPhase::Results;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
