//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{template, GameState};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb, TermCell};
use crate::types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Preview box edge, in board cells (pieces are centered inside it)
const PREVIEW_DIM: u16 = 4;

/// Dark-blue well background
const WELL_BG: Rgb = Rgb::new(26, 26, 46);
/// Grid dots inside the well
const GRID_FG: Rgb = Rgb::new(42, 42, 62);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into the given framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TermCell::default());

        let well_w = (BOARD_WIDTH as u16) * self.cell_w;
        let well_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle::new(GRID_FG, WELL_BG);
        let border = CellStyle::default();

        fb.fill_rect(start_x + 1, start_y + 1, well_w, well_h, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells, with grid dots for empty ones.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match state.board().get(x, y).unwrap_or(None) {
                    Some(kind) => {
                        self.draw_cell(fb, start_x, start_y, x as u16, y as u16, kind);
                    }
                    None => {
                        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '·', well);
                    }
                }
            }
        }

        // Falling piece; cells above the board are simply not drawn.
        if let Some(piece) = state.current() {
            for (dx, dy) in piece.shape.offsets() {
                let x = piece.x + dx;
                let y = piece.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_cell(fb, start_x, start_y, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        match state.phase() {
            GamePhase::Ready => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER", None);
            }
            GamePhase::Paused => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", None);
            }
            GamePhase::GameOver => {
                let score_line = format!("SCORE {}", state.score());
                self.draw_overlay(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "GAME OVER",
                    Some(&score_line),
                );
            }
            GamePhase::Running => {}
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::new(piece_color(kind), WELL_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = start_y;
        for (name, amount) in [
            ("SCORE", state.score()),
            ("LEVEL", state.level()),
            ("LINES", state.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &amount.to_string(), value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = state.next_piece() {
            self.draw_preview(fb, panel_x, y, kind);
        }
    }

    /// Next-piece preview: the spawn shape centered in a 4x4 box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape = template(kind);
        let off_x = (PREVIEW_DIM - shape.cols() as u16) / 2;
        let off_y = (PREVIEW_DIM - shape.rows() as u16) / 2;
        let style = CellStyle::new(piece_color(kind), Rgb::default()).bold();

        for (dx, dy) in shape.offsets() {
            let px = x + (off_x + dx as u16) * self.cell_w;
            let py = y + (off_y + dy as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        subtitle: Option<&str>,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);

        let centered = |text: &str| {
            let text_w = text.chars().count() as u16;
            start_x.saturating_add(frame_w.saturating_sub(text_w) / 2)
        };

        fb.put_str(centered(title), mid_y, title, style);
        if let Some(sub) = subtitle {
            fb.put_str(centered(sub), mid_y + 1, sub, style);
        }
    }
}

/// Kind to color mapping, classic cyan/yellow/purple/green/red/blue/orange
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}
