//! Layout helpers shared by the game views.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

pub(crate) const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const HINT: CellStyle = CellStyle::new(Rgb::new(120, 120, 130), SCREEN_BG);
pub(crate) const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();

/// A bordered board placed on screen, `cell_w` terminal columns per board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub cell_w: u16,
}

impl BoardFrame {
    /// Center a `cols x rows` board horizontally, leaving `panel_w` columns
    /// for a side panel, and vertically in the viewport.
    pub fn centered(viewport: Viewport, cols: u16, rows: u16, cell_w: u16, panel_w: u16) -> Self {
        let frame_w = cols * cell_w + 2;
        let frame_h = rows + 2;
        Self {
            x: viewport.width.saturating_sub(frame_w + panel_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            cols,
            rows,
            cell_w,
        }
    }

    pub fn width(&self) -> u16 {
        self.cols * self.cell_w + 2
    }

    pub fn height(&self) -> u16 {
        self.rows + 2
    }

    /// First column right of the frame, with a two column gap
    pub fn panel_x(&self) -> u16 {
        self.x.saturating_add(self.width()).saturating_add(2)
    }

    pub fn draw_background(&self, fb: &mut FrameBuffer) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.fill_cell(fb, col as i16, row as i16, '·', EMPTY);
            }
        }
    }

    pub fn draw_border(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let (x, y, w, h) = (self.x, self.y, self.width(), self.height());
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

    /// Paint one board cell; cells outside the board are skipped
    pub fn fill_cell(&self, fb: &mut FrameBuffer, col: i16, row: i16, ch: char, style: CellStyle) {
        if col < 0 || row < 0 || col as u16 >= self.cols || row as u16 >= self.rows {
            return;
        }
        let px = self.x + 1 + col as u16 * self.cell_w;
        let py = self.y + 1 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    /// Centered banner across the middle row
    pub fn draw_overlay(&self, fb: &mut FrameBuffer, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let text_w = text.chars().count() as u16;
        let x = self.x + self.width().saturating_sub(text_w) / 2;
        fb.put_str(x, self.y + self.height() / 2, text, style);
    }
}

/// Label on one row, value on the next; returns the row after a blank line
pub(crate) fn draw_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, LABEL);
    fb.put_u32(x, y.saturating_add(1), value, VALUE);
    y.saturating_add(3)
}

pub(crate) fn draw_hints(fb: &mut FrameBuffer, x: u16, mut y: u16, hints: &[&str]) {
    for hint in hints {
        fb.put_str(x, y, hint, HINT);
        y = y.saturating_add(1);
    }
}
