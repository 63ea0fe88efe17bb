//! Command handlers for the Undercover context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load aggregate, execute command, persist events.

use std::sync::{Mutex, PoisonError};

use soiree_core::aggregate::AggregateRoot;
use soiree_core::clock::Clock;
use soiree_core::error::DomainError;
use soiree_core::player::validate_roster;
use soiree_core::repository::{EventRepository, StoredEvent};
use soiree_core::rng::DeterministicRng;
use soiree_words::{WordSource, generate_undercover_words};
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::UndercoverRound;
use crate::domain::commands::{RevealNextCard, ShowResults, StartRound};
use crate::domain::dealing::MIN_PLAYERS;
use crate::domain::events::UndercoverEvent;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct UndercoverCommandResult {
    /// The round affected or created by the command.
    pub aggregate_id: Uuid,
    /// The stored events produced and persisted.
    pub stored_events: Vec<StoredEvent>,
}

/// Reconstitutes an `UndercoverRound` from stored events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub(crate) fn reconstitute(
    round_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<UndercoverRound, DomainError> {
    let mut round = UndercoverRound::new(round_id);
    for stored in existing_events {
        let event = UndercoverEvent {
            metadata: stored.metadata(),
            kind: stored.decode()?,
        };
        round.apply(&event);
    }
    Ok(round)
}

async fn persist(
    round: &UndercoverRound,
    repo: &dyn EventRepository,
) -> Result<UndercoverCommandResult, DomainError> {
    let stored_events: Vec<StoredEvent> = round
        .uncommitted_events()
        .iter()
        .map(StoredEvent::from_event)
        .collect();

    repo.append_events(round.id, round.version(), &stored_events)
        .await?;

    Ok(UndercoverCommandResult {
        aggregate_id: round.id,
        stored_events,
    })
}

/// Handles the `StartRound` command: fetches a word pair (falling back to
/// static pairs), deals a new round, and persists the resulting events.
///
/// The roster is checked before the word service is called. The `Mutex` is
/// never held across the word request.
///
/// # Errors
///
/// Returns `DomainError` if validation or appending fails. Word service
/// failures are not errors.
pub async fn handle_start_round(
    command: &StartRound,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    words: &dyn WordSource,
    repo: &dyn EventRepository,
) -> Result<UndercoverCommandResult, DomainError> {
    validate_roster(&command.players, MIN_PLAYERS)?;
    let pair = generate_undercover_words(words, command.category, rng).await;

    let mut round = UndercoverRound::new(Uuid::new_v4());
    {
        let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
        round.start(
            command.players.clone(),
            command.category,
            command.undercover_count,
            pair,
            command.correlation_id,
            clock,
            &mut *rng,
        )?;
    }
    debug!(round_id = %round.id, category = %command.category, "undercover round dealt");

    persist(&round, repo).await
}

/// Handles the `RevealNextCard` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_reveal_next_card(
    command: &RevealNextCard,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<UndercoverCommandResult, DomainError> {
    let existing_events = repo.load_events(command.round_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(command.round_id));
    }
    let mut round = reconstitute(command.round_id, &existing_events)?;

    round.reveal_next(command.correlation_id, clock)?;

    persist(&round, repo).await
}

/// Handles the `ShowResults` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_show_results(
    command: &ShowResults,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<UndercoverCommandResult, DomainError> {
    let existing_events = repo.load_events(command.round_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(command.round_id));
    }
    let mut round = reconstitute(command.round_id, &existing_events)?;

    round.show_results(command.correlation_id, clock)?;

    persist(&round, repo).await
}
