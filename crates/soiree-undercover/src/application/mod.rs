//! Application layer for the Undercover context.

pub mod command_handlers;
pub mod query_handlers;
