//! Soirée Undercover: word dealing and reveal flow.
//!
//! Every player secretly gets a word. Most share the civilian word; a few
//! undercovers hold a close but different one and must blend in.

pub mod application;
pub mod domain;
