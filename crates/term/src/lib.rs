//! Terminal rendering for the arcade.
//!
//! Views are pure: they turn an engine snapshot (or the menu state) into a
//! [`FrameBuffer`] of styled cells. [`TerminalRenderer`] is the only part that
//! touches the terminal; it owns raw mode and the alternate screen and writes
//! changed cells only.
//!
//! Board cells are drawn two columns wide to offset the usual glyph aspect
//! ratio.

pub mod fb;
pub mod menu;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;
pub mod view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use menu::{Menu, MenuChoice, MenuView, MENU_ENTRIES};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tetris_view::TetrisView;
pub use view::Viewport;
