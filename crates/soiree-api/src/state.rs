//! Shared application state.

use std::sync::{Arc, Mutex};

use soiree_core::clock::Clock;
use soiree_core::repository::EventRepository;
use soiree_core::rng::DeterministicRng;
use soiree_words::WordSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for event timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Shuffles and draws. Locked only around synchronous domain calls.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Process-local event store.
    pub event_repository: Arc<dyn EventRepository>,
    /// Generated words, with static fallback applied by the callers.
    pub words: Arc<dyn WordSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        event_repository: Arc<dyn EventRepository>,
        words: Arc<dyn WordSource>,
    ) -> Self {
        Self {
            clock,
            rng,
            event_repository,
            words,
        }
    }
}
