//! Grid tests - bounds, row clearing and compaction

use tui_arcade::core::{Grid, SnakeBoard, TetrisBoard};
use tui_arcade::types::{Point, EMPTY_CELL, TETRIS_BOARD_HEIGHT, TETRIS_BOARD_WIDTH};

fn fill_row(board: &mut TetrisBoard, y: i8, value: u8) {
    for x in 0..TETRIS_BOARD_WIDTH as i8 {
        assert!(board.set(x, y, value));
    }
}

#[test]
fn test_board_dimensions() {
    let tetris = TetrisBoard::new();
    assert_eq!((tetris.width(), tetris.height()), (10, 20));
    let snake = SnakeBoard::new();
    assert_eq!((snake.width(), snake.height()), (20, 15));
    assert_eq!(snake.empty_cells().count(), 300);
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = TetrisBoard::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(TETRIS_BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, TETRIS_BOARD_HEIGHT as i8), None);
    assert!(!board.set(-1, 5, 1));
    assert!(!board.is_occupied(-1, 5));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_set_and_clear_cell() {
    let mut board = TetrisBoard::new();
    assert!(board.set_point(Point::new(3, 4), 5));
    assert_eq!(board.get(3, 4), Some(5));
    assert!(board.is_occupied(3, 4));
    assert!(board.set(3, 4, EMPTY_CELL));
    assert!(board.is_empty_at(3, 4));
}

#[test]
fn test_separated_full_rows_compact_remaining_cells() {
    let mut board = TetrisBoard::new();
    fill_row(&mut board, 19, 1);
    fill_row(&mut board, 17, 2);
    board.set(0, 18, 3);
    board.set(4, 16, 4);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(3));
    assert_eq!(board.get(4, 18), Some(4));
    assert_eq!(board.occupied_count(), 2);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_stacked_full_rows_clear_in_one_pass() {
    let mut board = TetrisBoard::new();
    for y in 16..20 {
        fill_row(&mut board, y, 7);
    }
    board.set(9, 15, 1);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(9, 19), Some(1));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_empty_cells_row_major() {
    let mut grid: Grid<3, 2> = Grid::new();
    grid.set(0, 0, 1);
    grid.set(2, 1, 1);
    let empty: Vec<Point> = grid.empty_cells().collect();
    assert_eq!(
        empty,
        vec![
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(1, 1)
        ]
    );

    grid.clear();
    assert_eq!(grid.occupied_count(), 0);
}
