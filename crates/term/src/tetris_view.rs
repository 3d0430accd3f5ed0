//! TetrisView: maps a [`TetrisSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Shape, TetrisSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, TETRIS_BOARD_HEIGHT, TETRIS_BOARD_WIDTH};
use crate::view::{draw_hints, draw_stat, BoardFrame, Viewport, BOARD_BG, BORDER, LABEL};

const PANEL_W: u16 = 18;

/// A lightweight terminal renderer for the Tetris game.
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl TetrisView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render(&self, snap: &TetrisSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &TetrisSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = BoardFrame::centered(
            viewport,
            TETRIS_BOARD_WIDTH as u16,
            TETRIS_BOARD_HEIGHT as u16,
            self.cell_w,
            PANEL_W,
        );
        frame.draw_background(fb);
        frame.draw_border(fb, BORDER);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if let Some(kind) = PieceKind::from_cell(cell) {
                    frame.fill_cell(fb, x as i16, y as i16, '█', piece_style(kind));
                }
            }
        }

        if let Some(active) = snap.active {
            if !snap.game_over {
                if let Some(ghost_y) = snap.ghost_y {
                    let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
                    for p in active.cells_at(ghost_y) {
                        frame.fill_cell(fb, p.x as i16, p.y as i16, '░', ghost);
                    }
                }
            }
            for p in active.cells_at(active.y) {
                frame.fill_cell(fb, p.x as i16, p.y as i16, '█', piece_style(active.kind).bold());
            }
        }

        self.draw_side_panel(fb, snap, &frame, viewport);

        if snap.game_over {
            frame.draw_overlay(fb, "GAME OVER");
        } else if snap.paused {
            frame.draw_overlay(fb, "PAUSED");
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &TetrisSnapshot,
        frame: &BoardFrame,
        viewport: Viewport,
    ) {
        let x = frame.panel_x();
        if x >= viewport.width {
            return;
        }

        let mut y = frame.y;
        y = draw_stat(fb, x, y, "SCORE", snap.score);
        y = draw_stat(fb, x, y, "LINES", snap.lines);
        y = draw_stat(fb, x, y, "LEVEL", snap.level);

        fb.put_str(x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        if let Some(kind) = snap.next {
            let shape = Shape::of(kind);
            for (dx, dy) in shape.filled_cells() {
                let px = x + dx as u16 * self.cell_w;
                fb.fill_rect(px, y + dy as u16, self.cell_w, 1, '█', piece_style(kind));
            }
            y = y.saturating_add(shape.rows() as u16);
        }
        y = y.saturating_add(2);

        draw_hints(
            fb,
            x,
            y,
            &[
                "←→  move",
                "↑   rotate",
                "↓   soft drop",
                "spc hard drop",
                "p   pause",
                "r   restart",
                "esc menu",
            ],
        );
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, BOARD_BG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequenceRng, TetrisGame};

    #[test]
    fn test_colors_are_distinct_per_kind() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_style(a).fg, piece_style(b).fg);
                }
            }
        }
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let mut game = TetrisGame::with_rng(SequenceRng::new(vec![0]));
        game.start();
        let fb = TetrisView::default().render(&game.snapshot(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
