//! Start menu state and its view.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameKind, MenuAction};
use crate::view::{Viewport, HINT, LABEL};

const TITLE: &str = "TERMINAL GAMES";

/// What the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameKind),
    Quit,
}

impl MenuChoice {
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Play(kind) => kind.title(),
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Menu entries top to bottom.
pub const MENU_ENTRIES: [MenuChoice; 3] = [
    MenuChoice::Play(GameKind::Tetris),
    MenuChoice::Play(GameKind::Snake),
    MenuChoice::Quit,
];

/// Cursor over [`MENU_ENTRIES`]; stops at the first and last entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuChoice {
        MENU_ENTRIES[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the cursor, or return the highlighted entry on confirm.
    pub fn apply(&mut self, action: MenuAction) -> Option<MenuChoice> {
        match action {
            MenuAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            MenuAction::Down => {
                self.selected = (self.selected + 1).min(MENU_ENTRIES.len() - 1);
                None
            }
            MenuAction::Confirm => Some(self.selected()),
        }
    }
}

#[derive(Default)]
pub struct MenuView;

impl MenuView {
    pub fn render(&self, menu: &Menu, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, menu: &Menu, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let block_h = 2 + MENU_ENTRIES.len() as u16 + 2;
        let mut y = viewport.height.saturating_sub(block_h) / 2;

        put_centered(fb, viewport, y, TITLE, LABEL);
        y = y.saturating_add(2);

        let normal = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let highlight = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(240, 220, 80)).bold();
        for (i, entry) in MENU_ENTRIES.iter().enumerate() {
            let (text, style) = if i == menu.selected_index() {
                (format!("> {} <", entry.label()), highlight)
            } else {
                (format!("  {}  ", entry.label()), normal)
            };
            put_centered(fb, viewport, y, &text, style);
            y = y.saturating_add(1);
        }

        put_centered(
            fb,
            viewport,
            y.saturating_add(1),
            "up/down select  enter start  q quit",
            HINT,
        );
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    fb.put_str(viewport.width.saturating_sub(w) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_cursor_clamps_at_both_ends() {
        let mut menu = Menu::new();
        assert_eq!(menu.selected(), MenuChoice::Play(GameKind::Tetris));
        assert_eq!(menu.apply(MenuAction::Up), None);
        assert_eq!(menu.selected(), MenuChoice::Play(GameKind::Tetris));

        for _ in 0..5 {
            menu.apply(MenuAction::Down);
        }
        assert_eq!(menu.selected(), MenuChoice::Quit);
        menu.apply(MenuAction::Up);
        assert_eq!(menu.selected(), MenuChoice::Play(GameKind::Snake));
    }

    #[test]
    fn test_confirm_returns_selection() {
        let mut menu = Menu::new();
        menu.apply(MenuAction::Down);
        assert_eq!(
            menu.apply(MenuAction::Confirm),
            Some(MenuChoice::Play(GameKind::Snake))
        );
    }

    #[test]
    fn test_view_highlights_selected_entry() {
        let mut menu = Menu::new();
        menu.apply(MenuAction::Down);
        let fb = MenuView.render(&menu, Viewport::new(60, 20));
        assert!(fb.contains_text(TITLE));
        assert!(fb.contains_text("> Snake <"));
        assert!(fb.contains_text("  Tetris  "));
    }
}
