//! Grid module - fixed-size occupancy grid shared by both games
//!
//! A `W x H` array of [`Cell`] values owned by value, so cloning or resetting a
//! grid never leaves references to a previous board behind.
//! Coordinates: (x, y) where x ranges 0..W (left to right), y ranges 0..H (top to bottom)

use crate::types::{
    Cell, Point, EMPTY_CELL, SNAKE_BOARD_HEIGHT, SNAKE_BOARD_WIDTH, TETRIS_BOARD_HEIGHT,
    TETRIS_BOARD_WIDTH,
};

/// Board used by the snake engine (20 x 15)
pub type SnakeBoard = Grid<SNAKE_BOARD_WIDTH, SNAKE_BOARD_HEIGHT>;

/// Board used by the tetris engine (10 x 20)
pub type TetrisBoard = Grid<TETRIS_BOARD_WIDTH, TETRIS_BOARD_HEIGHT>;

/// Occupancy grid with `W` columns and `H` rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<const W: usize, const H: usize> {
    /// Row-major cells, `rows[y][x]`
    rows: [[Cell; W]; H],
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY_CELL; W]; H],
        }
    }

    pub fn width(&self) -> usize {
        W
    }

    pub fn height(&self) -> usize {
        H
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= W || y as usize >= H {
            return None;
        }
        Some((x as usize, y as usize))
    }

    /// Check if position is inside the grid
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    pub fn set_point(&mut self, p: Point, cell: Cell) -> bool {
        self.set(p.x, p.y, cell)
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(EMPTY_CELL))
    }

    /// In bounds and filled with any non-zero value
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY_CELL)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        self.rows[y].iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove row `y`, shift every row above it down by one and clear row 0
    pub fn clear_row(&mut self, y: usize) {
        if y >= H {
            return;
        }
        for row in (1..=y).rev() {
            self.rows[row] = self.rows[row - 1];
        }
        self.rows[0] = [EMPTY_CELL; W];
    }

    /// Clear every full row and return how many were removed
    ///
    /// Scans bottom-to-top. After a clear the same row index is examined again,
    /// since the row above has just shifted into it, so stacked full rows are
    /// all removed in a single pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = H;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.rows = [[EMPTY_CELL; W]; H];
    }

    /// Empty cells in row-major order (top row first, left to right)
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == EMPTY_CELL)
                .map(move |(x, _)| Point::new(x as i8, y as i8))
        })
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| c != EMPTY_CELL).count())
            .sum()
    }

    /// Read-only view of all rows
    pub fn rows(&self) -> &[[Cell; W]; H] {
        &self.rows
    }

    /// Create from explicit rows for testing
    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; W]; H]) -> Self {
        Self { rows }
    }
}

impl<const W: usize, const H: usize> Default for Grid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
