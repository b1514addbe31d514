//! Viewport and board placement shared by the game views.

use crate::fb::{CellStyle, FrameBuffer};

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

/// A bordered grid of `cols` x `rows` cells, each `cell_w` x `cell_h`
/// terminal cells, centered in the viewport with one text row reserved
/// above (status) and one below (hint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    cols: u16,
    rows: u16,
    cell_w: u16,
    cell_h: u16,
}

impl BoardFrame {
    pub fn centered(viewport: Viewport, cols: u16, rows: u16, cell_w: u16, cell_h: u16) -> Self {
        let frame_w = cols * cell_w + 2;
        let frame_h = rows * cell_h + 2;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        // Status above, hint below.
        let y = viewport.height.saturating_sub(frame_h + 2) / 2 + 1;
        Self {
            x,
            y,
            cols,
            rows,
            cell_w,
            cell_h,
        }
    }

    pub fn outer_width(&self) -> u16 {
        self.cols * self.cell_w + 2
    }

    pub fn outer_height(&self) -> u16 {
        self.rows * self.cell_h + 2
    }

    pub fn status_y(&self) -> u16 {
        self.y.saturating_sub(1)
    }

    pub fn hint_y(&self) -> u16 {
        self.y.saturating_add(self.outer_height())
    }

    /// Top-left terminal cell of board cell (cx, cy).
    pub fn cell_origin(&self, cx: u16, cy: u16) -> (u16, u16) {
        (
            self.x + 1 + cx * self.cell_w,
            self.y + 1 + cy * self.cell_h,
        )
    }

    pub fn draw_border(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let (x, y) = (self.x, self.y);
        let (w, h) = (self.outer_width(), self.outer_height());

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

    /// Fill the whole interior.
    pub fn fill_interior(&self, fb: &mut FrameBuffer, ch: char, style: CellStyle) {
        fb.fill_rect(
            self.x + 1,
            self.y + 1,
            self.cols * self.cell_w,
            self.rows * self.cell_h,
            ch,
            style,
        );
    }

    /// Fill one board cell with a repeated glyph.
    pub fn fill_cell(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(cx, cy);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Write text into a board cell, clipped to the cell width.
    pub fn put_cell_str(&self, fb: &mut FrameBuffer, cx: u16, cy: u16, s: &str, style: CellStyle) {
        let (px, py) = self.cell_origin(cx, cy);
        let mut x = px;
        for ch in s.chars() {
            if x >= px + self.cell_w {
                break;
            }
            fb.put_char(x, py, ch, style);
            x += 1;
        }
    }

    pub fn put_status(&self, fb: &mut FrameBuffer, text: &str, style: CellStyle) {
        fb.put_str_centered(0, fb.width(), self.status_y(), text, style);
    }

    pub fn put_hint(&self, fb: &mut FrameBuffer, text: &str, style: CellStyle) {
        fb.put_str_centered(0, fb.width(), self.hint_y(), text, style);
    }
}
