//! Domain layer for the Werewolf context.

pub mod aggregates;
pub mod assignment;
pub mod commands;
pub mod events;
pub mod roles;
pub mod victory;
pub mod village;
pub mod workflow;
