//! SnakeView: maps a [`SnakeSnapshot`] into a terminal framebuffer.

use crate::core::SnakeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SNAKE_BOARD_HEIGHT, SNAKE_BOARD_WIDTH};
use crate::view::{draw_hints, draw_stat, BoardFrame, Viewport, BOARD_BG, BORDER};

const PANEL_W: u16 = 16;

const HEAD: CellStyle = CellStyle::new(Rgb::new(140, 255, 140), BOARD_BG).bold();
const BODY: CellStyle = CellStyle::new(Rgb::new(60, 180, 80), BOARD_BG);
const FOOD: CellStyle = CellStyle::new(Rgb::new(230, 70, 70), BOARD_BG).bold();

pub struct SnakeView {
    cell_w: u16,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl SnakeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn render(&self, snap: &SnakeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &SnakeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = BoardFrame::centered(
            viewport,
            SNAKE_BOARD_WIDTH as u16,
            SNAKE_BOARD_HEIGHT as u16,
            self.cell_w,
            PANEL_W,
        );
        frame.draw_background(fb);
        frame.draw_border(fb, BORDER);

        frame.fill_cell(fb, snap.food.x as i16, snap.food.y as i16, '●', FOOD);

        // Tail first so the head wins if segments ever overlap.
        for (i, p) in snap.body.iter().enumerate().rev() {
            let (ch, style) = if i == 0 { ('█', HEAD) } else { ('▓', BODY) };
            frame.fill_cell(fb, p.x as i16, p.y as i16, ch, style);
        }

        let x = frame.panel_x();
        if x < viewport.width {
            let mut y = frame.y;
            y = draw_stat(fb, x, y, "SCORE", snap.score);
            y = draw_stat(fb, x, y, "LENGTH", snap.length);
            y = draw_stat(fb, x, y, "SPEED", snap.speed_ms);
            draw_hints(
                fb,
                x,
                y.saturating_add(1),
                &["arrows/wasd", "p   pause", "r   restart", "esc menu"],
            );
        }

        if snap.game_over {
            frame.draw_overlay(fb, "GAME OVER");
        } else if snap.paused {
            frame.draw_overlay(fb, "PAUSED");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SequenceRng, SnakeGame};

    #[test]
    fn test_head_and_food_are_drawn() {
        let game = SnakeGame::with_rng(SequenceRng::new(vec![0]));
        let fb = SnakeView::default().render(&game.snapshot(), Viewport::new(80, 24));
        assert!(fb.contains_text("█"));
        assert!(fb.contains_text("●"));
        assert!(fb.contains_text("SCORE"));
        assert!(!fb.contains_text("PAUSED"));
    }
}
