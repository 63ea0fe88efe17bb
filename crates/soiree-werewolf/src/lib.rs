//! Soirée Werewolf: moderator assistant.
//!
//! Deals the hidden roles, then walks the moderator through the night and
//! day cycle: which prompt is open, who died and why, which follow-ups a
//! death triggers (the hunter's shot, a lover's grief, a mayor vacancy) and
//! when a camp has won.

pub mod application;
pub mod domain;
