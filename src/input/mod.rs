//! Input module - key mapping and duplicate-press filtering
//!
//! Translates raw crossterm key events into the simulation's command set and
//! suppresses duplicate discrete presses within a short window so one
//! physical press never issues two commands.

pub mod debounce;
pub mod map;

pub use debounce::PressDebouncer;
pub use map::{handle_key_event, should_quit};
