//! Shared test doubles for the Soirée party-game engine.

mod clock;
mod repository;
mod rng;
mod roster;
mod words;

pub use clock::FixedClock;
pub use repository::{EmptyEventRepository, FailingEventRepository, RecordingEventRepository};
pub use rng::{MockRng, SequenceRng};
pub use roster::roster;
pub use words::{FailingWordSource, StaticWordSource};
