//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: the game view draws into a plain
//! framebuffer, the renderer flushes it to the terminal with diff redraws,
//! and the chime maps drained simulation events to bell cues.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render into an inspectable framebuffer rather than straight to I/O
//! - Precise control over aspect ratio (2 chars wide per board cell)

pub mod chime;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use chime::Chime;
pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
