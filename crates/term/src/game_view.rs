//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and never mutates the state it draws.

use crate::core::{GameState, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal view of one game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the well frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render `state` (plus the best score) into an existing framebuffer.
    ///
    /// The buffer is resized to the viewport and fully redrawn.
    pub fn render_into(&self, state: &GameState, best: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.frame(viewport);
        let well = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            well,
        );
        draw_border(fb, frame, border);

        for (y, row) in state.grid().rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_grid_cell(fb, frame, x as i32, y as i32, *color),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        if !state.is_game_over() {
            let active = state.current();
            for (x, y) in active.cells() {
                self.draw_grid_cell(fb, frame, x, y, active.color);
            }
        }

        self.draw_side_panel(fb, state, best, viewport, frame);

        if state.is_game_over() {
            draw_overlay_text(fb, frame, 0, "GAME OVER");
            draw_overlay_text(fb, frame, 1, "R to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, best: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, best, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (GRID_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (GRID_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    /// Cells outside the grid (rows above 0 while a piece enters) are clipped.
    fn draw_grid_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i32, y: i32, color: Color) {
        if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
            return;
        }
        let style = CellStyle::new(color_rgb(color), WELL_BG).bold();
        let (px, py) = self.cell_origin(frame, x as u16, y as u16);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    /// Top-left terminal position of grid cell (x, y).
    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        let px = frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        (px, py)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        best: u32,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", state.score()),
            ("LEVEL", state.level()),
            ("BEST", best),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, &state.next(), panel_x, y.saturating_add(1));
    }

    /// Next piece drawn from its matrix, skipping empty matrix rows.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) {
        let style = CellStyle::new(color_rgb(piece.color), PANEL_BG).bold();
        let mut py = y;
        for row in piece.shape.rows() {
            if row.iter().all(|&v| v == 0) {
                continue;
            }
            for (j, &v) in row.iter().enumerate() {
                if v == 1 {
                    let px = x.saturating_add((j as u16).saturating_mul(self.cell_w));
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                }
            }
            py = py.saturating_add(self.cell_h);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
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

/// Centered text on the well, `line` rows below the middle.
fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, line: u16, text: &str) {
    let y = frame.y.saturating_add(frame.h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, y, text, style);
}

/// Terminal color for a cell color.
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Pink => Rgb::new(255, 105, 180),
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Red => Rgb::new(220, 50, 50),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Purple => Rgb::new(160, 32, 240),
        Color::ForestGreen => Rgb::new(34, 139, 34),
        Color::Obstacle => Rgb::new(128, 128, 128),
    }
}
