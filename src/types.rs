//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (in milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_STEP_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines required per level advance
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring, indexed by lines cleared (classic table, scaled by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Score awarded for a successful player-commanded soft drop
pub const SOFT_DROP_SCORE: u32 = 1;

/// Window for suppressing duplicate discrete presses (milliseconds)
pub const PRESS_DEBOUNCE_MS: u64 = 300;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All seven kinds, in template-table order
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

/// Cell on the board (None = empty, Some = settled cell of that kind)
pub type Cell = Option<PieceKind>;

/// Game lifecycle phases
///
/// `Ready` exists only before the first start. `GameOver` is terminal until an
/// explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Running,
    Paused,
    GameOver,
}

/// Commands issued by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Start,
    Restart,
}

/// Discrete events signalled by the simulation
///
/// Consumed by the presentation layer for sound cues and by the runner for
/// gravity rescheduling. The simulation never depends on anyone draining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Successful horizontal move (vertical moves are silent)
    Moved,
    Rotated,
    /// Piece cells committed to the board
    Locked,
    LinesCleared(u32),
    /// Carries the new level
    LeveledUp(u32),
    /// Carries the new interval in milliseconds; the tick scheduler must
    /// cancel its previous deadline before arming the new one
    DropIntervalChanged(u32),
    GameOver,
}
