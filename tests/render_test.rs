//! Render tests - the pure GameView -> FrameBuffer path
//!
//! No terminal is involved: frames are inspected as text and styled cells.

use tui_blockfall::core::GameState;
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::GameAction;

const VIEW_W: u16 = 80;
const VIEW_H: u16 = 24;

fn render(state: &GameState) -> FrameBuffer {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render(state, Viewport::new(VIEW_W, VIEW_H), &mut fb);
    fb
}

fn frame_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn test_ready_screen_shows_start_prompt() {
    let state = GameState::new(1);
    let fb = render(&state);

    assert_eq!(fb.width(), VIEW_W);
    assert_eq!(fb.height(), VIEW_H);
    assert!(frame_contains(&fb, "PRESS ENTER"));
    assert!(frame_contains(&fb, "SCORE"));
    assert!(frame_contains(&fb, "LEVEL"));
    assert!(frame_contains(&fb, "LINES"));
    assert!(frame_contains(&fb, "NEXT"));
}

#[test]
fn test_running_game_draws_well_and_piece() {
    let mut state = GameState::new(1);
    state.start();
    let fb = render(&state);

    // Well border present
    assert!(frame_contains(&fb, "┌"));
    assert!(frame_contains(&fb, "└"));
    // The falling piece is drawn as block glyphs
    assert!(frame_contains(&fb, "█"));
    // No overlay while running
    assert!(!frame_contains(&fb, "PRESS ENTER"));
    assert!(!frame_contains(&fb, "PAUSED"));
    assert!(!frame_contains(&fb, "GAME OVER"));
}

#[test]
fn test_paused_overlay() {
    let mut state = GameState::new(1);
    state.start();
    state.apply_action(GameAction::TogglePause);

    let fb = render(&state);
    assert!(frame_contains(&fb, "PAUSED"));
}

#[test]
fn test_game_over_overlay_shows_final_score() {
    let mut state = GameState::new(1);
    state.start();
    while !state.game_over() {
        state.gravity_tick();
    }

    let fb = render(&state);
    assert!(frame_contains(&fb, "GAME OVER"));
    assert!(frame_contains(&fb, &format!("SCORE {}", state.score())));
}

#[test]
fn test_counters_rendered_as_text() {
    let mut state = GameState::new(1);
    state.start();
    // Earn a couple of soft-drop points so the score is non-zero.
    state.apply_action(GameAction::SoftDrop);
    state.apply_action(GameAction::SoftDrop);

    let fb = render(&state);
    assert!(frame_contains(&fb, "2"));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let mut state = GameState::new(1);
    state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render(&state, Viewport::new(10, 5), &mut fb);
    view.render(&state, Viewport::new(0, 0), &mut fb);
    view.render(&state, Viewport::new(200, 100), &mut fb);
}
