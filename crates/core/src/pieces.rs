//! Pieces module - tetromino shape matrices and clockwise rotation
//!
//! The seven canonical shapes are read-only templates. A [`Shape`] is a small
//! `Copy` matrix built from a template, so rotating the active piece works on
//! its own copy and can never disturb the table used for future spawns or the
//! next-piece preview.

use crate::types::PieceKind;

/// Largest extent of any tetromino matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Canonical spawn orientations, one row per slice, in `PieceKind` order
const TEMPLATES: [&[&[u8]]; PieceKind::COUNT] = [
    &[&[1, 1, 1, 1]],          // I
    &[&[1, 1], &[1, 1]],       // O
    &[&[0, 1, 0], &[1, 1, 1]], // T
    &[&[0, 1, 1], &[1, 1, 0]], // S
    &[&[1, 1, 0], &[0, 1, 1]], // Z
    &[&[1, 0, 0], &[1, 1, 1]], // J
    &[&[0, 0, 1], &[1, 1, 1]], // L
];

/// A rows x cols filled/empty matrix of at most 4 x 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Fresh copy of the spawn orientation for `kind`
    pub fn of(kind: PieceKind) -> Self {
        let template = TEMPLATES[kind.index()];
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in template.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            rows: template.len() as u8,
            cols: template[0].len() as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether local cell (x, y) is filled; false outside the matrix
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.cols as usize && y < self.rows as usize && self.cells[y][x]
    }

    /// Local `(x, y)` offsets of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |y| {
            (0..self.cols as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// The matrix turned 90° clockwise
    ///
    /// `rotated[x][rows - 1 - y] = shape[y][x]`: a transpose followed by a
    /// horizontal flip. The result is `cols x rows`.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..rows {
            for x in 0..cols {
                cells[x][rows - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &Shape) -> Vec<String> {
        (0..shape.rows() as usize)
            .map(|y| {
                (0..shape.cols() as usize)
                    .map(|x| if shape.is_filled(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_i_rotates_to_vertical() {
        let i = Shape::of(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));
        let v = i.rotated_cw();
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert_eq!(render(&v), vec!["#", "#", "#", "#"]);
    }

    #[test]
    fn test_t_rotates_clockwise() {
        let t = Shape::of(PieceKind::T).rotated_cw();
        assert_eq!(render(&t), vec!["#.", "##", "#."]);
    }

    #[test]
    fn test_four_rotations_restore_shape() {
        for kind in PieceKind::ALL {
            let s = Shape::of(kind);
            let back = s.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(s, back, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotating_copy_leaves_template_untouched() {
        let first = Shape::of(PieceKind::L);
        let _turned = first.rotated_cw();
        assert_eq!(Shape::of(PieceKind::L), first);
    }
}
