//! Domain layer for the Undercover context.

pub mod aggregates;
pub mod commands;
pub mod dealing;
pub mod events;
