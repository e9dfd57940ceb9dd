//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, batch runner, terminal rendering).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9), fixed for the lifetime of a grid
//! - **Height**: unbounded; grows when a piece needs room above the top row and
//!   shrinks when full rows are cleared
//!
//! # Shape Codes
//!
//! | Code | Shape |
//! |------|-------|
//! | `Q` | 2x2 square |
//! | `I` | 1x4 line |
//! | `Z` | Z-shaped |
//! | `S` | S-shaped (mirror of Z) |
//! | `T` | T-shaped |
//! | `L` | L-shaped |
//! | `J` | J-shaped (mirror of L) |
//!
//! # Examples
//!
//! ```
//! use tetris_drop_types::{Shape, EMPTY_ROW, GRID_WIDTH};
//!
//! let shape = Shape::from_char('T').unwrap();
//! assert_eq!(shape, Shape::T);
//! assert_eq!(shape.as_char(), 'T');
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert!(EMPTY_ROW.iter().all(|cell| !cell));
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Tallest shape in the catalog, in rows
pub const MAX_SHAPE_HEIGHT: usize = 3;

/// Most cells any single shape row occupies
pub const MAX_ROW_CELLS: usize = 4;

/// A cell on the grid
///
/// - `false`: Empty cell
/// - `true`: Occupied cell
pub type Cell = bool;

/// One horizontal line of the grid. The array type pins every row to
/// exactly [`GRID_WIDTH`] cells.
pub type Row = [Cell; GRID_WIDTH];

/// A row with every cell unoccupied
pub const EMPTY_ROW: Row = [false; GRID_WIDTH];

/// The seven fixed-orientation tetromino shapes
///
/// Shapes never rotate; each one has a single footprint defined in the
/// simulation core's shape catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Q,
    I,
    Z,
    S,
    T,
    L,
    J,
}

impl Shape {
    /// Every shape, in catalog order
    pub const ALL: [Shape; 7] = [
        Shape::Q,
        Shape::I,
        Shape::Z,
        Shape::S,
        Shape::T,
        Shape::L,
        Shape::J,
    ];

    /// Parse a shape from its one-character code (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_drop_types::Shape;
    ///
    /// assert_eq!(Shape::from_char('Q'), Some(Shape::Q));
    /// assert_eq!(Shape::from_char('J'), Some(Shape::J));
    /// assert_eq!(Shape::from_char('q'), None);
    /// assert_eq!(Shape::from_char('O'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'Q' => Some(Shape::Q),
            'I' => Some(Shape::I),
            'Z' => Some(Shape::Z),
            'S' => Some(Shape::S),
            'T' => Some(Shape::T),
            'L' => Some(Shape::L),
            'J' => Some(Shape::J),
            _ => None,
        }
    }

    /// One-character code used in input lines
    pub fn as_char(&self) -> char {
        match self {
            Shape::Q => 'Q',
            Shape::I => 'I',
            Shape::Z => 'Z',
            Shape::S => 'S',
            Shape::T => 'T',
            Shape::L => 'L',
            Shape::J => 'J',
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
