//! Aggregate roots for the Werewolf context.

use serde::Serialize;
use soiree_core::aggregate::AggregateRoot;
use soiree_core::clock::Clock;
use soiree_core::error::DomainError;
use soiree_core::event::EventMetadata;
use soiree_core::player::Player;
use soiree_core::rng::DeterministicRng;
use uuid::Uuid;

use super::assignment::{RoleAssignment, assign_roles};
use super::events::{
    FinalRevealShown, GameRestarted, ModerationStarted, RoleRevealed, RolesDistributed,
    WerewolfEvent, WerewolfEventKind,
};
use super::roles::{Role, RoleCounts};
use super::village::Village;
use super::workflow::{Fact, Moderation, ModeratorAction, decide};

/// Where the table is in the life of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// The moderator is composing the deck.
    RoleSelection,
    /// Players look at their cards one at a time.
    Reveal,
    /// Every card was seen; the phone goes to the moderator.
    ModeratorHandover,
    /// Nights and days are being played.
    Moderation,
    /// A camp won.
    GameOver,
    /// Every card is face up.
    FinalReveal,
}

/// The aggregate root for a Werewolf game.
#[derive(Debug)]
pub struct WerewolfGame {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) phase: GamePhase,
    /// Seated players, kept across restarts.
    pub(crate) players: Vec<Player>,
    /// Deck composition, kept across restarts.
    pub(crate) role_counts: RoleCounts,
    pub(crate) assignments: Vec<RoleAssignment>,
    /// How many players have seen their card.
    pub(crate) revealed: usize,
    /// Set once moderation starts.
    pub(crate) moderation: Option<Moderation>,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<WerewolfEvent>,
}

impl WerewolfGame {
    /// Creates a new game waiting for its deck.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            phase: GamePhase::RoleSelection,
            players: Vec::new(),
            role_counts: RoleCounts::new(),
            assignments: Vec::new(),
            revealed: 0,
            moderation: None,
            uncommitted_events: Vec::new(),
        }
    }

    fn record(&mut self, kind: WerewolfEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = WerewolfEvent {
            metadata: EventMetadata::new(
                kind.event_type(),
                self.id,
                self.next_sequence_number(),
                correlation_id,
                clock.now(),
            ),
            kind,
        };
        self.uncommitted_events.push(event);
    }

    fn require_phase(&self, expected: GamePhase) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "game must be in {expected:?} phase, currently {:?}",
                self.phase
            )))
        }
    }

    /// Shuffles the deck and deals one role per player.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `RoleSelection` phase, if
    /// the roster is invalid, or if the deck size differs from the table.
    pub fn distribute_roles(
        &mut self,
        players: Vec<Player>,
        role_counts: RoleCounts,
        correlation_id: Uuid,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<(), DomainError> {
        self.require_phase(GamePhase::RoleSelection)?;
        let assignments = assign_roles(&players, &role_counts, rng)?;

        self.record(
            WerewolfEventKind::RolesDistributed(RolesDistributed {
                game_id: self.id,
                players,
                role_counts,
                assignments,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Shows the next player in roster order their card.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `Reveal` phase.
    pub fn reveal_next(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), DomainError> {
        self.require_phase(GamePhase::Reveal)?;
        let player_id = self
            .players
            .get(self.revealed)
            .map(|p| p.id.clone())
            .ok_or_else(|| DomainError::validation("every card has already been revealed"))?;

        self.record(
            WerewolfEventKind::RoleRevealed(RoleRevealed {
                game_id: self.id,
                player_id,
                position: self.revealed,
            }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Starts the first night. A deck that is already decided (no wolves,
    /// say) goes straight to game over.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `ModeratorHandover` phase.
    pub fn start_moderation(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.require_phase(GamePhase::ModeratorHandover)?;
        let opening = self.fresh_moderation().opening_facts();

        self.record(
            WerewolfEventKind::ModerationStarted(ModerationStarted { game_id: self.id }),
            correlation_id,
            clock,
        );
        for fact in opening {
            self.record(WerewolfEventKind::Moderation(fact), correlation_id, clock);
        }
        Ok(())
    }

    /// Answers the open prompt.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `Moderation` phase or if
    /// the action is not valid for the open prompt.
    pub fn moderate(
        &mut self,
        action: &ModeratorAction,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.require_phase(GamePhase::Moderation)?;
        let moderation = self
            .moderation
            .as_ref()
            .ok_or_else(|| DomainError::validation("moderation has not started"))?;
        let facts = decide(moderation, action)?;

        for fact in facts {
            self.record(WerewolfEventKind::Moderation(fact), correlation_id, clock);
        }
        Ok(())
    }

    /// Turns every card face up.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if not in `GameOver` phase.
    pub fn show_final_reveal(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        self.require_phase(GamePhase::GameOver)?;
        self.record(
            WerewolfEventKind::FinalRevealShown(FinalRevealShown { game_id: self.id }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    /// Clears the round, keeping the table and the deck.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless the game is over or in the
    /// final reveal.
    pub fn restart(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Result<(), DomainError> {
        if !matches!(self.phase, GamePhase::GameOver | GamePhase::FinalReveal) {
            return Err(DomainError::Validation(format!(
                "only a finished game can restart, currently {:?}",
                self.phase
            )));
        }
        self.record(
            WerewolfEventKind::GameRestarted(GameRestarted { game_id: self.id }),
            correlation_id,
            clock,
        );
        Ok(())
    }

    fn fresh_moderation(&self) -> Moderation {
        Moderation::new(
            Village::new(self.players.clone(), self.assignments.clone()),
            self.role_counts.contains(Role::Cupid),
        )
    }

    fn apply_fact(&mut self, fact: &Fact) {
        if let Some(moderation) = self.moderation.as_mut() {
            moderation.evolve(fact);
        }
        match fact {
            Fact::WinnerDeclared { .. } => self.phase = GamePhase::GameOver,
            Fact::ModerationEnded => self.phase = GamePhase::FinalReveal,
            _ => {}
        }
    }
}

impl AggregateRoot for WerewolfGame {
    type Event = WerewolfEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            WerewolfEventKind::RolesDistributed(payload) => {
                self.phase = GamePhase::Reveal;
                self.players.clone_from(&payload.players);
                self.role_counts.clone_from(&payload.role_counts);
                self.assignments.clone_from(&payload.assignments);
                self.revealed = 0;
                self.moderation = None;
            }
            WerewolfEventKind::RoleRevealed(payload) => {
                self.revealed = payload.position + 1;
                if self.revealed >= self.players.len() {
                    self.phase = GamePhase::ModeratorHandover;
                }
            }
            WerewolfEventKind::ModerationStarted(_) => {
                self.phase = GamePhase::Moderation;
                self.moderation = Some(self.fresh_moderation());
            }
            WerewolfEventKind::Moderation(fact) => self.apply_fact(fact),
            WerewolfEventKind::FinalRevealShown(_) => self.phase = GamePhase::FinalReveal,
            WerewolfEventKind::GameRestarted(_) => {
                self.phase = GamePhase::RoleSelection;
                self.assignments.clear();
                self.revealed = 0;
                self.moderation = None;
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
