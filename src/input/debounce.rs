//! Duplicate-press suppression for discrete commands.
//!
//! Some input paths deliver the same logical press twice in quick succession
//! (a terminal reporting both press and repeat for one tap, or paired
//! touch/click events on hybrid devices). Re-issuing a rotate or a pause
//! toggle for one physical press is visibly wrong, so discrete commands are
//! filtered through a short window keyed by action.
//!
//! Held-style commands (movement, soft drop) are intentionally not debounced;
//! repeating those is what holding a key means.

use arrayvec::ArrayVec;

use crate::types::{GameAction, PRESS_DEBOUNCE_MS};

/// Per-action press filter with caller-supplied timestamps.
///
/// Timestamps are plain milliseconds so tests can drive the filter without a
/// wall clock.
#[derive(Debug, Clone)]
pub struct PressDebouncer {
    window_ms: u64,
    last_accepted: ArrayVec<(GameAction, u64), 8>,
}

impl PressDebouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted: ArrayVec::new(),
        }
    }

    /// Whether this action should be debounced at all
    pub fn applies_to(action: GameAction) -> bool {
        matches!(
            action,
            GameAction::Rotate | GameAction::TogglePause | GameAction::Start | GameAction::Restart
        )
    }

    /// Accept or suppress a press of `action` arriving at `now_ms`.
    ///
    /// Returns false only for a repeat of the same action inside the window.
    /// Non-discrete actions always pass.
    pub fn accept(&mut self, action: GameAction, now_ms: u64) -> bool {
        if !Self::applies_to(action) {
            return true;
        }

        if let Some(entry) = self
            .last_accepted
            .iter_mut()
            .find(|(seen, _)| *seen == action)
        {
            if now_ms.saturating_sub(entry.1) < self.window_ms {
                return false;
            }
            entry.1 = now_ms;
            return true;
        }

        let _ = self.last_accepted.try_push((action, now_ms));
        true
    }
}

impl Default for PressDebouncer {
    fn default() -> Self {
        Self::new(PRESS_DEBOUNCE_MS)
    }
}
