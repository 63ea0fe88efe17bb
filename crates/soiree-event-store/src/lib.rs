//! Soirée event store.
//!
//! Games live only as long as the process, so the store keeps every
//! aggregate stream in memory behind an async lock.

pub mod memory_event_repository;
