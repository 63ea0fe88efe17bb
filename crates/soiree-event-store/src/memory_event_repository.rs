//! In-memory implementation of the `EventRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use soiree_core::error::DomainError;
use soiree_core::repository::{EventRepository, StoredEvent};

/// Event repository holding every stream in process memory. Streams are
/// never evicted, so memory grows with each game played until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    streams: RwLock<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of aggregate streams currently held.
    pub async fn stream_count(&self) -> usize {
        self.streams.read().await.len()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        let streams = self.streams.read().await;
        Ok(streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        if events.is_empty() {
            return Ok(());
        }

        let mut streams = self.streams.write().await;
        let actual = streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map_or(0, |e| e.sequence_number);

        if actual != expected_version {
            tracing::warn!(%aggregate_id, expected_version, actual, "stale append rejected");
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual,
            });
        }

        let mut next = expected_version + 1;
        for event in events {
            if event.aggregate_id != aggregate_id || event.sequence_number != next {
                return Err(DomainError::Infrastructure(format!(
                    "event {} does not continue stream {aggregate_id} at sequence {next}",
                    event.event_id
                )));
            }
            next += 1;
        }

        streams
            .entry(aggregate_id)
            .or_default()
            .extend_from_slice(events);
        tracing::debug!(%aggregate_id, appended = events.len(), "events appended");
        Ok(())
    }
}
