//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O and is driven synchronously, so
//! tests can step the simulation without any wall clock.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use collision::collides;
pub use game_state::{GameState, Tetromino};
pub use pieces::{spawn_x, template, Shape};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
