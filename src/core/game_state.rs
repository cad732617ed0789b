//! Game state module - the simulation orchestrator
//!
//! Owns the board, the current and next piece, the score/level/lines counters,
//! and the `Ready -> Running <-> Paused -> GameOver` phase machine. All
//! mutation flows through the command interface and the gravity tick; the
//! presentation layer only reads state and drains events.

use arrayvec::ArrayVec;

use crate::core::collision::collides;
use crate::core::pieces::{spawn_x, template, Shape};
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::core::{Board, PiecePicker};
use crate::types::{
    GameAction, GameEvent, GamePhase, PieceKind, BASE_DROP_MS, BOARD_HEIGHT, SOFT_DROP_SCORE,
};

/// Active falling piece
///
/// The shape matrix is owned and mutated in place by rotation; (x, y) is the
/// matrix's top-left corner in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece of the given kind, horizontally centered at row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        Self {
            kind,
            x: spawn_x(&shape),
            y: 0,
            shape,
        }
    }
}

/// Pending simulation events, drained by the presentation layer
///
/// Bounded so an undrained queue can never block or allocate; overflow drops
/// the newest event.
pub type EventQueue = ArrayVec<GameEvent, 8>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Tetromino>,
    next: Option<PieceKind>,
    picker: PiecePicker,
    phase: GamePhase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    events: EventQueue,
}

impl GameState {
    /// Create a new game in the `Ready` phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            picker: PiecePicker::new(seed),
            phase: GamePhase::Ready,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            events: EventQueue::new(),
        }
    }

    /// (Re)initialize all state and enter `Running`
    ///
    /// Used both for the first start and for restarting after game over. The
    /// RNG keeps its state across restarts so piece sequences don't repeat.
    pub fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.events.clear();
        self.phase = GamePhase::Running;
        self.next = Some(self.picker.pick());
        self.spawn();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::Ready
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval in milliseconds
    pub fn drop_interval(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Tetromino> {
        self.current
    }

    /// Lookahead piece shown in the preview panel
    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Drain all pending events
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    /// Apply a command from the input layer
    ///
    /// Returns whether the command changed state, so callers can decide
    /// whether to play a cue. Rejected commands are silent no-ops.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match self.phase {
            GamePhase::Ready => match action {
                GameAction::Start | GameAction::Restart => {
                    self.start();
                    true
                }
                _ => false,
            },
            // While paused, only the pause toggle is accepted.
            GamePhase::Paused => match action {
                GameAction::TogglePause => {
                    self.phase = GamePhase::Running;
                    true
                }
                _ => false,
            },
            // Terminal until an explicit restart.
            GamePhase::GameOver => match action {
                GameAction::Restart => {
                    self.start();
                    true
                }
                _ => false,
            },
            GamePhase::Running => match action {
                GameAction::MoveLeft => self.move_horizontal(-1),
                GameAction::MoveRight => self.move_horizontal(1),
                GameAction::SoftDrop => self.soft_drop(),
                GameAction::Rotate => self.rotate(),
                GameAction::TogglePause => {
                    self.phase = GamePhase::Paused;
                    true
                }
                GameAction::Restart => {
                    self.start();
                    true
                }
                GameAction::Start => false,
            },
        }
    }

    /// One gravity step: move the current piece down one row, or lock it,
    /// clear lines, and spawn the successor.
    ///
    /// Returns whether the simulation advanced. Ticks arriving while paused,
    /// before start, or after game over are no-ops.
    pub fn gravity_tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        if self.try_translate(0, 1) {
            return true;
        }

        self.lock_current();
        self.clear_lines();
        self.spawn();
        true
    }

    /// Move the current piece if the target position is collision-free
    fn try_translate(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        if collides(&piece.shape, piece.x + dx, piece.y + dy, &self.board) {
            return false;
        }

        piece.x += dx;
        piece.y += dy;
        true
    }

    fn move_horizontal(&mut self, dx: i8) -> bool {
        if self.try_translate(dx, 0) {
            self.emit(GameEvent::Moved);
            true
        } else {
            false
        }
    }

    /// Player-commanded single-row drop, worth one point on success
    ///
    /// A failed soft drop does NOT lock the piece; locking happens only on the
    /// gravity tick's own failed downward move.
    fn soft_drop(&mut self) -> bool {
        if self.try_translate(0, 1) {
            self.score += SOFT_DROP_SCORE;
            true
        } else {
            false
        }
    }

    /// Rotate the current piece clockwise, rejecting outright on collision
    /// (no wall kicks; shape and position are untouched on rejection)
    fn rotate(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        let rotated = piece.shape.rotated();
        if collides(&rotated, piece.x, piece.y, &self.board) {
            return false;
        }

        piece.shape = rotated;
        self.emit(GameEvent::Rotated);
        true
    }

    /// Commit the current piece's cells into the board
    ///
    /// Cells still above the visible board (negative row) are skipped; this
    /// happens when a piece locks at the very top during a near-over game.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        for (dx, dy) in piece.shape.offsets() {
            let by = piece.y + dy;
            if by >= 0 {
                self.board.set(piece.x + dx, by, Some(piece.kind));
            }
        }

        self.emit(GameEvent::Locked);
    }

    /// Remove all full rows and update score, lines, level, and gravity speed
    fn clear_lines(&mut self) {
        let mut cleared: u32 = 0;
        let mut y = BOARD_HEIGHT as usize - 1;

        // Bottom-to-top scan. A removal shifts the stack down, so the same
        // index must be re-tested before moving up.
        loop {
            if self.board.is_row_full(y) {
                self.board.remove_row(y);
                cleared += 1;
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }

        if cleared == 0 {
            return;
        }

        self.lines += cleared;
        // Score with the pre-clear level; recompute the level afterwards.
        self.score += line_clear_score(cleared, self.level);
        self.emit(GameEvent::LinesCleared(cleared));

        let new_level = level_for_lines(self.lines);
        if new_level > self.level {
            self.level = new_level;
            self.emit(GameEvent::LeveledUp(new_level));
        }

        let new_interval = drop_interval_ms(self.level);
        if new_interval != self.drop_interval_ms {
            self.drop_interval_ms = new_interval;
            self.emit(GameEvent::DropIntervalChanged(new_interval));
        }
    }

    /// Promote the lookahead piece to current and draw a fresh lookahead
    ///
    /// A spawn position that already collides is the blocked-spawn loss
    /// condition: the phase flips to `GameOver` and the piece never moves.
    fn spawn(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.picker.pick(),
        };
        self.next = Some(self.picker.pick());

        let piece = Tetromino::spawn(kind);
        let blocked = collides(&piece.shape, piece.x, piece.y, &self.board);
        self.current = Some(piece);

        if blocked {
            self.phase = GamePhase::GameOver;
            self.emit(GameEvent::GameOver);
        }
    }
}
