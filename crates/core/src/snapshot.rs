use crate::pieces::Shape;
use crate::tetris::ActivePiece;
use crate::types::{
    Cell, Direction, PieceKind, Point, TETRIS_BOARD_HEIGHT, TETRIS_BOARD_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnakeSnapshot {
    /// Head first
    pub body: Vec<Point>,
    pub food: Point,
    pub direction: Direction,
    pub score: u32,
    pub length: u32,
    pub speed_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of every filled cell with the anchor row replaced by `y`
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = Point> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| Point::new(self.x + dx, y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrisSnapshot {
    pub board: [[Cell; TETRIS_BOARD_WIDTH]; TETRIS_BOARD_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl TetrisSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
