//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns every simulation rule of the two games. It has **zero
//! dependencies** on terminal, input or timing code:
//!
//! - **Deterministic**: all randomness comes through an injected [`RandomSource`]
//! - **Synchronous**: every method is a short, non-blocking computation over
//!   in-memory arrays; the driver decides when to call `step`
//! - **Single owner**: engines hold no locks; one driver owns one instance
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size occupancy grid with row clearing
//! - [`rng`]: the [`RandomSource`] capability plus seeded and scripted sources
//! - [`pieces`]: tetromino shape matrices and clockwise rotation
//! - [`scoring`]: line-clear table and the speed curves of both games
//! - [`snake`]: the snake engine
//! - [`tetris`]: the tetris engine
//! - [`snapshot`]: read-only copies of engine state for rendering
//!
//! # Lifecycle
//!
//! Both engines share one state machine: `Active <-> Paused` by toggling,
//! `Active -> GameOver` on a fatal collision, and `GameOver -> Active` only
//! through `reset`. Commands issued in the wrong state are no-ops that return
//! `false`; nothing in this crate panics on bad timing.
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::{SequenceRng, TetrisGame};
//!
//! // Deal only O pieces.
//! let mut game = TetrisGame::with_rng(SequenceRng::new(vec![1]));
//! game.start();
//!
//! let (_, landing) = game.ghost_position().unwrap();
//! let fell = game.hard_drop();
//! assert_eq!(fell as i8, landing);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, SnakeBoard, TetrisBoard};
pub use pieces::Shape;
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score, snake_speed_ms};
pub use snake::SnakeGame;
pub use snapshot::{ActiveSnapshot, SnakeSnapshot, TetrisSnapshot};
pub use tetris::{ActivePiece, TetrisGame};
