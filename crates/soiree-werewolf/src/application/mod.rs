//! Application layer for the Werewolf context.

pub mod command_handlers;
pub mod query_handlers;
