//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events 1:1 onto engine commands. There is no key
//! buffering or auto-repeat here: the snake engine already buffers one pending
//! direction and Tetris commands apply immediately.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{is_back, map_menu_key, map_snake_key, map_tetris_key, should_quit};
