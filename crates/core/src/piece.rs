//! Piece module - validated pieces and their projection onto grid columns

use arrayvec::ArrayVec;

use crate::error::SimulationError;
use crate::shapes::{coordinates_of, shape_width};
use crate::types::{Shape, GRID_WIDTH, MAX_ROW_CELLS, MAX_SHAPE_HEIGHT};

/// A shape dropped with its leftmost column at `position`.
///
/// Only constructible through [`Piece::new`], so every piece in circulation
/// fits inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    position: u8,
}

impl Piece {
    /// Create a piece, rejecting positions that would put any cell outside
    /// `0..GRID_WIDTH`.
    pub fn new(shape: Shape, position: i16) -> Result<Self, SimulationError> {
        let width = shape_width(shape) as i16;
        if position < 0 || position > GRID_WIDTH as i16 - width {
            return Err(SimulationError::PositionOutOfBounds { shape, position });
        }

        Ok(Self {
            shape,
            position: position as u8,
        })
    }

    /// Shape being dropped
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Leftmost column of the shape
    pub fn position(&self) -> u8 {
        self.position
    }
}

/// Absolute grid columns of one piece row
pub type CoordinateRow = ArrayVec<usize, MAX_ROW_CELLS>;

/// Absolute grid columns covered by a piece, one entry per piece row (top to bottom)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateSet {
    rows: ArrayVec<CoordinateRow, MAX_SHAPE_HEIGHT>,
}

impl CoordinateSet {
    /// Rows top to bottom
    pub fn rows(&self) -> &[CoordinateRow] {
        &self.rows
    }

    /// The piece's lowest row
    pub fn bottom(&self) -> &CoordinateRow {
        // Every catalog shape has at least one row.
        &self.rows[self.rows.len() - 1]
    }

    /// Number of piece rows (1 to `MAX_SHAPE_HEIGHT`)
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Shift every column offset of the piece's shape by its position.
///
/// For example a `Q` at position 3 covers columns `[3, 4]` on both rows:
///
/// ```text
///       □ □
///       □ □
/// -------------------
/// 0 1 2 3 4 5 6 7 8 9
/// ```
pub fn project(piece: &Piece) -> CoordinateSet {
    let offset = piece.position as usize;
    let rows = coordinates_of(piece.shape)
        .iter()
        .map(|row| row.iter().map(|&dx| dx as usize + offset).collect())
        .collect();

    CoordinateSet { rows }
}
