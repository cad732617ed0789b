//! Chime: terminal sound cues for simulation events.
//!
//! The terminal offers a single bell, so only the high-salience events ring
//! it; per-move cues would be noise. The simulation never depends on this
//! sink existing - it maps drained events and nothing more.

use std::io::{self, Write};

use anyhow::Result;

use crate::types::GameEvent;

const BEL: u8 = 0x07;

#[derive(Debug)]
pub struct Chime {
    enabled: bool,
}

impl Chime {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether this event carries a cue.
    fn rings(event: &GameEvent) -> bool {
        matches!(
            event,
            GameEvent::LinesCleared(_) | GameEvent::LeveledUp(_) | GameEvent::GameOver
        )
    }

    /// Play the cue for a drained event, if any.
    pub fn play(&mut self, event: &GameEvent) -> Result<()> {
        if self.enabled && Self::rings(event) {
            let mut stdout = io::stdout();
            stdout.write_all(&[BEL])?;
            stdout.flush()?;
        }
        Ok(())
    }
}

impl Default for Chime {
    fn default() -> Self {
        Self::new(true)
    }
}
