//! Terminal game runner (default binary).
//!
//! Wires the pure simulation to crossterm input and the framebuffer renderer.
//! Single-threaded: commands and gravity ticks strictly interleave in one
//! poll/tick loop, so no synchronization is needed anywhere.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::GameState;
use tui_blockfall::input::{handle_key_event, should_quit, PressDebouncer};
use tui_blockfall::term::{Chime, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{GameAction, GameEvent, GamePhase};

/// Deadline-based gravity scheduler.
///
/// There is exactly one live deadline: changing the interval replaces it
/// (cancel-before-reschedule), and suspension keeps pushing it forward so no
/// stale tick fires on resume.
struct GravityTimer {
    interval: Duration,
    deadline: Instant,
}

impl GravityTimer {
    fn new(interval_ms: u32, now: Instant) -> Self {
        let interval = Duration::from_millis(interval_ms as u64);
        Self {
            interval,
            deadline: now + interval,
        }
    }

    fn set_interval(&mut self, interval_ms: u32, now: Instant) {
        self.interval = Duration::from_millis(interval_ms as u64);
        self.deadline = now + self.interval;
    }

    fn due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    fn rearm(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }

    /// While the game isn't running, hold the deadline a full interval away.
    fn suspend(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }

    /// Poll timeout until the next gravity step.
    fn timeout(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);

    let mut game = GameState::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut debounce = PressDebouncer::default();
    let mut chime = Chime::default();

    let epoch = Instant::now();
    let mut gravity = GravityTimer::new(game.drop_interval(), epoch);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render(&game, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input, with a timeout that expires at the gravity deadline.
        let timeout = gravity.timeout(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if key.kind == KeyEventKind::Press && should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            let now_ms = epoch.elapsed().as_millis() as u64;
                            if debounce.accept(action, now_ms) && game.apply_action(action) {
                                // (Re)start resets the speed without a tick
                                // event, so resync the timer here.
                                if matches!(action, GameAction::Start | GameAction::Restart) {
                                    gravity.set_interval(game.drop_interval(), Instant::now());
                                }
                            }
                        }
                    }
                    KeyEventKind::Release => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        let now = Instant::now();
        if game.phase() == GamePhase::Running {
            if gravity.due(now) {
                game.gravity_tick();
                gravity.rearm(now);
            }
        } else {
            gravity.suspend(now);
        }

        // Drain simulation events into the scheduler and the sound sink.
        for ev in game.take_events() {
            if let GameEvent::DropIntervalChanged(ms) = ev {
                gravity.set_interval(ms, Instant::now());
            }
            chime.play(&ev)?;
        }
    }
}
