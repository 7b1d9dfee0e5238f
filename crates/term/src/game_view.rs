//! GameView: maps an engine [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme::Theme;
use crate::types::{Cell, GRID_SIZE};

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

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns (one column is the gap).
    cell_w: u16,
    /// Board cell height in terminal rows (one row is the gap).
    cell_h: u16,
    anchor_y: AnchorY,
    theme: Theme,
}

const PANEL_MIN_W: u16 = 12;

const HELP: [&str; 5] = [
    "arrows/hjkl move",
    "u undo  p pause",
    "s save  o load",
    "t theme r new",
    "q quit",
];

impl Default for GameView {
    fn default() -> Self {
        // 8x4 leaves a 7x3 tile: room for six digits and a centred number row.
        Self {
            cell_w: 8,
            cell_h: 4,
            anchor_y: AnchorY::Center,
            theme: Theme::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (GRID_SIZE as u16) * self.cell_w + 2,
            (GRID_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(self.theme.text(), self.theme.background());
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r as u16, c as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if let Some(text) = notice {
            let y = start_y.saturating_add(frame_h);
            let style = CellStyle::new(Rgb::new(240, 200, 80), Rgb::new(0, 0, 0));
            self.draw_centered_text(fb, start_x, y, frame_w, text, style);
        }

        if snap.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over() {
            let text = if snap.remaining_secs == 0 {
                "TIME UP"
            } else {
                "GAME OVER"
            };
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_notice(snap, None, viewport)
    }

    pub fn render_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, notice, viewport, &mut fb);
        fb
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: Cell,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        let tile_w = self.cell_w - 1;
        let tile_h = self.cell_h - 1;

        let fill = CellStyle::new(self.theme.text(), self.theme.tile(value));
        if value == 0 {
            fb.fill_rect(px, py, tile_w, tile_h, ' ', fill);
            fb.put_char(px + tile_w / 2, py + tile_h / 2, '·', fill.dim());
            return;
        }

        fb.fill_rect(px, py, tile_w, tile_h, ' ', fill);
        fb.put_u64_centered(px, py + tile_h / 2, tile_w, value as u64, fill.bold());
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.remaining_secs, value);
        let secs_w = crate::fb::digit_count(snap.remaining_secs);
        fb.put_char(panel_x + secs_w, y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.undo_depth as u64, value);
        y = y.saturating_add(2);

        let help = value.dim();
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_centered_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(tx, y, text, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let padded_w = text.chars().count() as u16 + 2;
        let x = start_x.saturating_add(frame_w.saturating_sub(padded_w) / 2);
        fb.fill_rect(x, mid_y, padded_w, 1, ' ', style);
        fb.put_str(x + 1, mid_y, text, style);
    }
}
