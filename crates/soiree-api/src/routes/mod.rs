//! Route modules organized by bounded context.

pub mod health;
pub mod undercover;
pub mod werewolf;
pub mod words;

use serde::Serialize;
use soiree_core::repository::StoredEvent;
use uuid::Uuid;

/// Response body returned after a command is successfully handled.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// The game or round the command touched.
    pub aggregate_id: Uuid,
    /// IDs of the domain events produced and persisted.
    pub event_ids: Vec<Uuid>,
}

impl CommandResponse {
    pub(crate) fn new(aggregate_id: Uuid, stored_events: &[StoredEvent]) -> Self {
        Self {
            aggregate_id,
            event_ids: stored_events.iter().map(|e| e.event_id).collect(),
        }
    }
}
