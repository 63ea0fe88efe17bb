//! Command handlers for the Werewolf context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load aggregate, execute command, persist events.

use std::sync::{Mutex, PoisonError};

use soiree_core::aggregate::AggregateRoot;
use soiree_core::clock::Clock;
use soiree_core::error::DomainError;
use soiree_core::repository::{EventRepository, StoredEvent};
use soiree_core::rng::DeterministicRng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::WerewolfGame;
use crate::domain::commands::{
    DistributeRoles, Moderate, RestartGame, RevealNextRole, ShowFinalReveal, StartModeration,
};
use crate::domain::events::WerewolfEvent;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct WerewolfCommandResult {
    /// The game affected or created by the command.
    pub aggregate_id: Uuid,
    /// The stored events produced and persisted.
    pub stored_events: Vec<StoredEvent>,
}

/// Reconstitutes a `WerewolfGame` from stored events.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub(crate) fn reconstitute(
    game_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<WerewolfGame, DomainError> {
    let mut game = WerewolfGame::new(game_id);
    for stored in existing_events {
        let event = WerewolfEvent {
            metadata: stored.metadata(),
            kind: stored.decode()?,
        };
        game.apply(&event);
    }
    Ok(game)
}

async fn load(game_id: Uuid, repo: &dyn EventRepository) -> Result<WerewolfGame, DomainError> {
    let existing_events = repo.load_events(game_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(game_id));
    }
    reconstitute(game_id, &existing_events)
}

async fn persist(
    game: &WerewolfGame,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let stored_events: Vec<StoredEvent> = game
        .uncommitted_events()
        .iter()
        .map(StoredEvent::from_event)
        .collect();

    repo.append_events(game.id, game.version(), &stored_events)
        .await?;

    Ok(WerewolfCommandResult {
        aggregate_id: game.id,
        stored_events,
    })
}

/// Handles the `DistributeRoles` command: creates a game (or reloads a
/// restarted one), deals the deck, and persists the resulting events.
///
/// The `Mutex` is locked only around the synchronous domain method call to
/// avoid holding a `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_distribute_roles(
    command: &DistributeRoles,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = match command.game_id {
        Some(game_id) => load(game_id, repo).await?,
        None => WerewolfGame::new(Uuid::new_v4()),
    };

    {
        let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
        game.distribute_roles(
            command.players.clone(),
            command.role_counts.clone(),
            command.correlation_id,
            clock,
            &mut *rng,
        )?;
    }

    persist(&game, repo).await
}

/// Handles the `RevealNextRole` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_reveal_next_role(
    command: &RevealNextRole,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = load(command.game_id, repo).await?;
    game.reveal_next(command.correlation_id, clock)?;
    persist(&game, repo).await
}

/// Handles the `StartModeration` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_start_moderation(
    command: &StartModeration,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = load(command.game_id, repo).await?;
    game.start_moderation(command.correlation_id, clock)?;
    persist(&game, repo).await
}

/// Handles the `Moderate` command: reconstitutes the game, answers the open
/// prompt, and persists every resulting fact as its own event.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_moderate(
    command: &Moderate,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = load(command.game_id, repo).await?;
    game.moderate(&command.action, command.correlation_id, clock)?;
    debug!(
        game_id = %command.game_id,
        facts = game.uncommitted_events().len(),
        "moderator action decided"
    );
    persist(&game, repo).await
}

/// Handles the `ShowFinalReveal` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_show_final_reveal(
    command: &ShowFinalReveal,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = load(command.game_id, repo).await?;
    game.show_final_reveal(command.correlation_id, clock)?;
    persist(&game, repo).await
}

/// Handles the `RestartGame` command.
///
/// # Errors
///
/// Returns `DomainError` if loading, validation, or appending fails.
pub async fn handle_restart_game(
    command: &RestartGame,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<WerewolfCommandResult, DomainError> {
    let mut game = load(command.game_id, repo).await?;
    game.restart(command.correlation_id, clock)?;
    persist(&game, repo).await
}
