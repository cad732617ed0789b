//! Classic-rules falling-block puzzle game for the terminal.
//!
//! The simulation (`core`) is pure and synchronous; the terminal (`term`) and
//! input (`input`) layers are external collaborators wired together by the
//! binary's poll/tick loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
