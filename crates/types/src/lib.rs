//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by both game engines, the
//! input mapping and the terminal views. Everything here is plain data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! | Game | Width | Height |
//! |------|-------|--------|
//! | Snake | 20 | 15 |
//! | Tetris | 10 | 20 |
//!
//! Coordinates are `(x, y)` with `x` growing to the right and `y` growing
//! downwards; `(0, 0)` is the top-left cell.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds. The engines only *report* the interval;
//! the driver decides when to call `step`.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SNAKE_SPEED_NORMAL_MS` | 150 | Snake tick period at score 0 |
//! | `SNAKE_SPEED_FAST_MS` | 80 | Snake tick period floor |
//! | `BASE_DROP_MS` | 500 | Tetris gravity at level 1 (divided by level) |
//! | `MIN_DROP_MS` | 50 | Tetris gravity floor |
//! | `INPUT_POLL_MS` | 10 | Driver idle poll granularity |
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{Direction, PieceKind, Point};
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(Point::new(3, 3).step(Direction::Left), Point::new(2, 3));
//!
//! assert_eq!(PieceKind::T.cell_value(), 3);
//! ```

/// Snake board width in cells
pub const SNAKE_BOARD_WIDTH: usize = 20;

/// Snake board height in cells
pub const SNAKE_BOARD_HEIGHT: usize = 15;

/// Number of cells on the snake board
pub const SNAKE_CELL_COUNT: usize = SNAKE_BOARD_WIDTH * SNAKE_BOARD_HEIGHT;

/// Body length of a freshly spawned snake
pub const SNAKE_INITIAL_LENGTH: u32 = 3;

/// Points awarded per food eaten
pub const SNAKE_FOOD_SCORE: u32 = 10;

/// Snake tick period at score 0
pub const SNAKE_SPEED_NORMAL_MS: u32 = 150;

/// Snake tick period floor
pub const SNAKE_SPEED_FAST_MS: u32 = 80;

/// Every `SNAKE_SPEED_SCORE_DIVISOR` points shave one millisecond off the tick
pub const SNAKE_SPEED_SCORE_DIVISOR: u32 = 5;

/// Tetris board width in cells (10 columns)
pub const TETRIS_BOARD_WIDTH: usize = 10;

/// Tetris board height in cells (20 rows)
pub const TETRIS_BOARD_HEIGHT: usize = 20;

/// Gravity interval at level 1; divided by the level for higher levels
pub const BASE_DROP_MS: u32 = 500;

/// Gravity floor
pub const MIN_DROP_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Driver idle poll granularity
pub const INPUT_POLL_MS: u64 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by the current level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// A cell on a game board
///
/// `0` is empty, any other value identifies the occupant. Tetris stores
/// `PieceKind::cell_value()` so the renderer can color locked cells; Snake
/// stores `SNAKE_BODY_CELL`.
pub type Cell = u8;

/// Empty board cell
pub const EMPTY_CELL: Cell = 0;

/// Occupancy marker used by the snake board
pub const SNAKE_BODY_CELL: Cell = 1;

/// Integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one step along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

/// Movement direction on the grid
///
/// Only the opposite relation matters: Up/Down and Left/Right are the two
/// opposite pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit step `(dx, dy)`; `y` grows downwards
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The seven tetromino piece kinds
///
/// Declaration order is the canonical table order; `index()` is the position
/// in that table and `cell_value()` is what a locked piece writes to the board.
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of piece kinds
    pub const COUNT: usize = 7;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Board cell value written when this kind locks (`index + 1`)
    pub fn cell_value(self) -> Cell {
        self.index() as Cell + 1
    }

    /// Inverse of [`PieceKind::cell_value`]; `None` for empty or unknown cells
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_cell(0), None);
    /// assert_eq!(PieceKind::from_cell(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_cell(7), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_cell(8), None);
    /// ```
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            0 => None,
            n => Self::from_index(n as usize - 1),
        }
    }

    /// Short lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Commands accepted by the snake engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Request a new heading (dropped if it reverses into the neck)
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start over from the initial board
    Restart,
}

/// Commands accepted by the tetris engine
///
/// These map 1:1 onto engine methods; hard drop is a loop of single drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (locks if it cannot move)
    SoftDrop,
    /// Drop until the piece locks
    HardDrop,
    /// Rotate piece 90° clockwise, rolled back on collision
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over from an empty board
    Restart,
}

/// Start menu navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Confirm,
}

/// Games selectable from the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Tetris,
    Snake,
}

impl GameKind {
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Tetris => "Tetris",
            GameKind::Snake => "Snake",
        }
    }
}
