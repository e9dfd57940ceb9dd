//! Shapes module - the fixed tetromino catalog
//!
//! Each shape is a list of rows (top row first); each row lists the column
//! offsets it covers, relative to the piece's leftmost column. Shapes never
//! rotate, so a single table entry per shape is the whole catalog.

use crate::error::SimulationError;
use crate::types::Shape;

/// Column offsets of one shape row
pub type ShapeRow = &'static [u8];

/// Rows of a shape, top to bottom
pub type ShapeRows = &'static [ShapeRow];

const Q_ROWS: ShapeRows = &[&[0, 1], &[0, 1]];
const I_ROWS: ShapeRows = &[&[0, 1, 2, 3]];
const Z_ROWS: ShapeRows = &[&[0, 1], &[1, 2]];
const S_ROWS: ShapeRows = &[&[1, 2], &[0, 1]];
const T_ROWS: ShapeRows = &[&[0, 1, 2], &[1]];
const L_ROWS: ShapeRows = &[&[0], &[0], &[0, 1]];
const J_ROWS: ShapeRows = &[&[1], &[1], &[0, 1]];

/// Get the rows (column offsets) for a shape
pub fn coordinates_of(shape: Shape) -> ShapeRows {
    match shape {
        Shape::Q => Q_ROWS,
        Shape::I => I_ROWS,
        Shape::Z => Z_ROWS,
        Shape::S => S_ROWS,
        Shape::T => T_ROWS,
        Shape::L => L_ROWS,
        Shape::J => J_ROWS,
    }
}

/// Map a one-character shape code to a shape
pub fn shape_lookup(letter: char) -> Result<Shape, SimulationError> {
    Shape::from_char(letter).ok_or(SimulationError::UnknownShape { letter })
}

/// Number of rows a shape occupies
pub fn shape_height(shape: Shape) -> usize {
    coordinates_of(shape).len()
}

/// Number of columns a shape spans (largest offset + 1)
pub fn shape_width(shape: Shape) -> usize {
    coordinates_of(shape)
        .iter()
        .flat_map(|row| row.iter())
        .map(|&offset| offset as usize + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_ROW_CELLS, MAX_SHAPE_HEIGHT};

    #[test]
    fn every_shape_has_four_cells() {
        for shape in Shape::ALL {
            let cells: usize = coordinates_of(shape).iter().map(|row| row.len()).sum();
            assert_eq!(cells, 4, "{shape} should be a tetromino");
        }
    }

    #[test]
    fn shapes_fit_bounded_storage() {
        for shape in Shape::ALL {
            let rows = coordinates_of(shape);
            assert!(rows.len() <= MAX_SHAPE_HEIGHT);
            assert!(rows.iter().all(|row| !row.is_empty() && row.len() <= MAX_ROW_CELLS));
        }
    }

    #[test]
    fn offsets_are_sorted_within_each_row() {
        for shape in Shape::ALL {
            for row in coordinates_of(shape) {
                assert!(row.windows(2).all(|w| w[0] < w[1]), "{shape} row {row:?}");
            }
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!((shape_height(Shape::Q), shape_width(Shape::Q)), (2, 2));
        assert_eq!((shape_height(Shape::I), shape_width(Shape::I)), (1, 4));
        assert_eq!((shape_height(Shape::T), shape_width(Shape::T)), (2, 3));
        assert_eq!((shape_height(Shape::L), shape_width(Shape::L)), (3, 2));
        assert_eq!((shape_height(Shape::J), shape_width(Shape::J)), (3, 2));
    }

    #[test]
    fn lookup_rejects_unknown_letters() {
        assert_eq!(shape_lookup('S'), Ok(Shape::S));
        assert_eq!(
            shape_lookup('O'),
            Err(SimulationError::UnknownShape { letter: 'O' })
        );
    }
}
