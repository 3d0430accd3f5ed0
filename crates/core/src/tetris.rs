//! Tetris engine - falling-block simulation
//!
//! The active piece carries its own shape matrix and top-left anchor. Every
//! move or rotation is tried in place and rolled back on collision, so the
//! piece never rests overlapping the stack. When gravity cannot move the piece
//! any further it is locked into the board, complete rows are cleared and the
//! next piece spawns; a spawn that collides ends the game.
//!
//! Rows above the board (`y < 0`) are open space: a piece may hang partially
//! above row 0 and is only ever rejected there for leaving the side walls.

use log::{debug, trace};

use crate::grid::TetrisBoard;
use crate::pieces::Shape;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::TetrisSnapshot;
use crate::types::{PieceKind, Point, TetrisAction, TETRIS_BOARD_HEIGHT, TETRIS_BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Working copy of the shape, rotated independently of the template
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece horizontally centered on row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: (TETRIS_BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| Point::new(self.x + dx, self.y + dy))
    }
}

/// Complete tetris game state
#[derive(Debug, Clone)]
pub struct TetrisGame<R = SimpleRng> {
    board: TetrisBoard,
    active: Option<ActivePiece>,
    /// Kind reserved for the following spawn
    next: Option<PieceKind>,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    rng: R,
}

impl TetrisGame<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl Default for TetrisGame<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> TetrisGame<R> {
    /// Create a new game drawing piece kinds from `rng`
    ///
    /// The board starts empty with no active piece; call [`TetrisGame::start`].
    pub fn with_rng(rng: R) -> Self {
        Self {
            board: TetrisBoard::new(),
            active: None,
            next: None,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            rng,
        }
    }

    /// Spawn the first piece if none is active yet
    pub fn start(&mut self) -> bool {
        if self.active.is_none() && !self.game_over {
            self.spawn_piece();
        }
        !self.game_over
    }

    pub fn board(&self) -> &TetrisBoard {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Gravity interval the driver should use at the current level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    pub fn snapshot(&self) -> TetrisSnapshot {
        TetrisSnapshot {
            board: *self.board.rows(),
            active: self.active.map(Into::into),
            ghost_y: self.ghost_position().map(|(_, y)| y),
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            drop_interval_ms: self.drop_interval_ms(),
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    fn draw_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_below(PieceKind::COUNT) % PieceKind::COUNT]
    }

    /// Install the next piece and reserve a new one
    ///
    /// Uses the reserved kind if there is one, otherwise draws a fresh kind.
    /// Ends the game if the new piece collides where it spawns. Returns
    /// whether the game is still running.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.draw_kind(),
        };
        let piece = ActivePiece::spawn(kind);
        self.active = Some(piece);
        self.next = Some(self.draw_kind());
        trace!(
            "tetris: spawned {} at ({}, {}), next {:?}",
            kind.as_str(),
            piece.x,
            piece.y,
            self.next
        );

        if self.collides() {
            self.game_over = true;
            debug!(
                "tetris: game over (score={} lines={} level={})",
                self.score, self.lines, self.level
            );
        }
        !self.game_over
    }

    /// Whether `shape` anchored at `(x, y)` leaves the board or overlaps the stack
    ///
    /// Side walls and the floor always count; rows above the board never do.
    fn collides_at(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.filled_cells().any(|(dx, dy)| {
            let bx = x as i16 + dx as i16;
            let by = y as i16 + dy as i16;
            if bx < 0 || bx >= TETRIS_BOARD_WIDTH as i16 || by >= TETRIS_BOARD_HEIGHT as i16 {
                return true;
            }
            by >= 0 && self.board.is_occupied(bx as i8, by as i8)
        })
    }

    /// Collision check for the active piece at its current position
    pub fn collides(&self) -> bool {
        match self.active {
            Some(ref piece) => self.collides_at(&piece.shape, piece.x, piece.y),
            None => false,
        }
    }

    /// Rotate the active piece 90° clockwise in place
    ///
    /// No wall kicks: if the rotated shape collides the previous shape is kept
    /// unchanged and false is returned.
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let rotated = piece.shape.rotated_cw();
        if self.collides_at(&rotated, piece.x, piece.y) {
            return false;
        }
        self.active = Some(ActivePiece {
            shape: rotated,
            ..piece
        });
        true
    }

    /// Try to move the active piece by `(dx, dy)`; reverted on collision
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let (Some(x), Some(y)) = (piece.x.checked_add(dx), piece.y.checked_add(dy)) else {
            return false;
        };
        if self.collides_at(&piece.shape, x, y) {
            return false;
        }
        self.active = Some(ActivePiece { x, y, ..piece });
        true
    }

    /// Move the active piece down one row
    ///
    /// When the piece cannot move it is locked, full rows are cleared and the
    /// next piece spawns; false is returned in that case.
    pub fn drop(&mut self) -> bool {
        if !self.playable() || self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        self.clear_lines();
        self.spawn_piece();
        false
    }

    /// Gravity tick; identical to [`TetrisGame::drop`]
    pub fn step(&mut self) -> bool {
        self.drop()
    }

    /// Drop until the piece locks; returns how many rows it fell
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.drop() {
            rows += 1;
        }
        rows
    }

    /// Write the active piece into the board
    ///
    /// Cells above row 0 are discarded. The piece stops being active.
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        let value = piece.kind.cell_value();
        for cell in piece.cells() {
            // Out-of-bounds cells are simply not written.
            self.board.set_point(cell, value);
        }
    }

    /// Clear complete rows and update lines, score and level
    ///
    /// Returns the number of rows cleared. The score for the clear uses the
    /// level in effect before the new lines are counted.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_score(cleared, self.level);
        self.lines += cleared as u32;
        self.score += points;
        self.level = level_for_lines(self.lines);
        debug!(
            "tetris: cleared {} line(s) for {} points (lines={} level={})",
            cleared, points, self.lines, self.level
        );
        cleared
    }

    /// Where the active piece would land if dropped from here
    ///
    /// Pure lookahead: the `(x, y)` that repeated [`TetrisGame::drop`] calls
    /// would reach before locking.
    pub fn ghost_position(&self) -> Option<(i8, i8)> {
        let piece = self.active?;
        let mut y = piece.y;
        while !self.collides_at(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        Some((piece.x, y))
    }

    /// Toggle pause; no effect once the game is over
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Start over with an empty board and a freshly spawned piece
    pub fn reset(&mut self) {
        debug!(
            "tetris: reset (score={} lines={} game_over={})",
            self.score, self.lines, self.game_over
        );
        self.board.clear();
        self.active = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Apply a driver command; returns whether it took effect
    ///
    /// For drops, "took effect" means the piece moved or locked.
    pub fn apply_action(&mut self, action: TetrisAction) -> bool {
        match action {
            TetrisAction::MoveLeft => self.try_move(-1, 0),
            TetrisAction::MoveRight => self.try_move(1, 0),
            TetrisAction::SoftDrop => {
                let live = self.playable() && self.active.is_some();
                self.drop();
                live
            }
            TetrisAction::HardDrop => {
                let live = self.playable() && self.active.is_some();
                self.hard_drop();
                live
            }
            TetrisAction::Rotate => self.rotate(),
            TetrisAction::Pause => {
                let was = self.paused;
                self.toggle_pause();
                was != self.paused
            }
            // Restart is only honoured once the game is over.
            TetrisAction::Restart if self.game_over => {
                self.reset();
                true
            }
            TetrisAction::Restart => false,
        }
    }
}
