//! Grid engine tests

use tetris_drop::core::{project, Grid, Piece};
use tetris_drop::types::{Row, Shape, EMPTY_ROW, GRID_WIDTH};

fn piece(shape: Shape, position: i16) -> Piece {
    Piece::new(shape, position).expect("piece should fit")
}

fn occupied(row: &Row) -> Vec<usize> {
    (0..GRID_WIDTH).filter(|&x| row[x]).collect()
}

fn snapshot(grid: &Grid) -> Vec<Vec<usize>> {
    grid.rows().map(occupied).collect()
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.height(), 0);
    assert!(grid.is_empty());
    assert_eq!(grid.row(0), None);
}

#[test]
fn test_drop_on_empty_grid_builds_rows() {
    let mut grid = Grid::new();
    let outcome = grid.drop_piece(&piece(Shape::J, 4));

    assert_eq!(outcome.lines_cleared, 0);
    assert_eq!(snapshot(&grid), vec![vec![5], vec![5], vec![4, 5]]);
}

#[test]
fn test_drop_coordinates_matches_drop_piece() {
    let mut a = Grid::new();
    let mut b = Grid::new();
    for (shape, position) in [(Shape::T, 0), (Shape::Z, 1), (Shape::L, 4)] {
        let p = piece(shape, position);
        a.drop_piece(&p);
        b.drop_coordinates(&project(&p));
    }
    assert_eq!(a, b);
}

#[test]
fn test_stacking_same_column() {
    let mut grid = Grid::new();
    grid.drop_piece(&piece(Shape::Q, 3));
    grid.drop_piece(&piece(Shape::Q, 3));

    assert_eq!(grid.height(), 4);
    assert!(grid.rows().all(|row| occupied(row) == vec![3, 4]));
}

#[test]
fn test_z_rests_on_its_lower_row() {
    // Z's bottom row [1,2] lands on the I; its top row hangs over column 0.
    let mut grid = Grid::new();
    grid.drop_piece(&piece(Shape::I, 1));
    grid.drop_piece(&piece(Shape::Z, 0));

    assert_eq!(
        snapshot(&grid),
        vec![vec![0, 1], vec![1, 2], vec![1, 2, 3, 4]]
    );
}

#[test]
fn test_t_stem_fills_notch() {
    // Two squares leave a one-wide gap at column 2 for the T stem.
    let mut grid = Grid::new();
    grid.drop_piece(&piece(Shape::Q, 0));
    grid.drop_piece(&piece(Shape::Q, 3));
    grid.drop_piece(&piece(Shape::T, 1));

    assert_eq!(
        snapshot(&grid),
        vec![vec![1, 2, 3], vec![0, 1, 2, 3, 4], vec![0, 1, 3, 4]]
    );
}

#[test]
fn test_multiple_rows_clear_in_one_drop() {
    let mut grid = Grid::new();
    for position in [0, 2, 4, 6] {
        grid.drop_piece(&piece(Shape::Q, position));
    }
    assert_eq!(grid.height(), 2);

    let outcome = grid.drop_piece(&piece(Shape::Q, 8));
    assert_eq!(outcome.lines_cleared, 2);
    assert!(grid.is_empty());
}

#[test]
fn test_clear_leaves_rows_above_intact() {
    let mut grid = Grid::new();
    grid.drop_piece(&piece(Shape::L, 0));
    grid.drop_piece(&piece(Shape::I, 2));
    let outcome = grid.drop_piece(&piece(Shape::I, 6));

    assert_eq!(outcome.lines_cleared, 1);
    assert_eq!(snapshot(&grid), vec![vec![0], vec![0]]);
}

#[test]
fn test_no_full_row_survives_any_drop() {
    let mut grid = Grid::new();
    let line = [
        (Shape::I, 0),
        (Shape::I, 4),
        (Shape::Q, 8),
        (Shape::S, 2),
        (Shape::J, 6),
        (Shape::T, 0),
    ];
    for (shape, position) in line {
        grid.drop_piece(&piece(shape, position));
        assert!(grid.rows().all(|row| row != &[true; GRID_WIDTH]));
        assert!(grid.rows().all(|row| row.len() == GRID_WIDTH));
    }
}

#[test]
fn test_fresh_rows_start_empty() {
    let mut grid = Grid::new();
    grid.drop_piece(&piece(Shape::I, 0));
    grid.drop_piece(&piece(Shape::I, 0));
    // Only the four columns written by the second I may be set in the new top row.
    let mut expected = EMPTY_ROW;
    expected[..4].fill(true);
    assert_eq!(grid.row(0), Some(&expected));
}
