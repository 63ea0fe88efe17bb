//! Deterministic `Clock` implementation for tests.

use chrono::{DateTime, TimeZone, Utc};
use soiree_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A Saturday evening, the usual time for a game night.
    ///
    /// # Panics
    ///
    /// Never; the date literal is valid.
    #[must_use]
    pub fn game_night() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 10, 17, 21, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
