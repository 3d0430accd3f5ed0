//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_arcade::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
