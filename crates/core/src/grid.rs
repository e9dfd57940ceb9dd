//! Grid module - the growable playing field and the drop algorithm
//!
//! The grid is a sequence of fixed-width rows, indexed top (0) to bottom.
//! It starts empty, grows by prepending empty rows when a piece needs room
//! above the current top, and shrinks when full rows are cleared.
//! Rows live in a `VecDeque` so both prepending and index-based overlap
//! checks stay cheap.

use std::collections::VecDeque;

use crate::piece::{project, CoordinateSet, Piece};
use crate::types::{Row, EMPTY_ROW};

/// Result of dropping a single piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropOutcome {
    /// Rows removed because the piece completed them
    pub lines_cleared: usize,
}

/// The playing field - `GRID_WIDTH` columns, dynamic height
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: VecDeque<Row>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: VecDeque::new(),
        }
    }

    /// Current number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows remain
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    /// Get the row at index `y` (0 = top). Returns None if out of bounds
    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Drop a validated piece and resolve line clears
    pub fn drop_piece(&mut self, piece: &Piece) -> DropOutcome {
        self.drop_coordinates(&project(piece))
    }

    /// Drop a projected piece: settle, insert, then clear full rows
    pub fn drop_coordinates(&mut self, coords: &CoordinateSet) -> DropOutcome {
        let anchor = self.settling_anchor(coords);
        self.insert(anchor, coords);
        DropOutcome {
            lines_cleared: self.clear_full_rows(),
        }
    }

    /// Find where the piece comes to rest, as the number of grid rows at or
    /// above the row that receives the piece's bottom row (so the bottom row
    /// lands at index `anchor - 1`; `0` means it goes above the current top).
    ///
    /// The scan collapses the whole piece footprint onto a single grid row,
    /// which stops either on the true contact row or one row past it. One
    /// check of the piece's bottom row against the stopping row tells the two
    /// apart. This only holds because pieces never rotate and are at most
    /// three rows tall; taller or rotating pieces need a real per-row check.
    fn settling_anchor(&self, coords: &CoordinateSet) -> usize {
        for (y, row) in self.rows.iter().enumerate() {
            let hit = coords.rows().iter().any(|cols| overlaps(row, cols));
            if hit {
                return if overlaps(row, coords.bottom()) {
                    y
                } else {
                    y + 1
                };
            }
        }

        self.rows.len()
    }

    /// Write the piece's rows bottom to top, walking upward from `anchor`
    /// and prepending empty rows once the walk passes the top of the grid.
    fn insert(&mut self, anchor: usize, coords: &CoordinateSet) {
        let mut cursor = anchor;
        for cols in coords.rows().iter().rev() {
            if cursor == 0 {
                self.rows.push_front(EMPTY_ROW);
            } else {
                cursor -= 1;
            }

            let row = &mut self.rows[cursor];
            for &x in cols {
                row[x] = true;
            }
        }
    }

    /// Remove every full row in one pass, keeping the others in order.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !is_row_full(row));
        before - self.rows.len()
    }

    /// Create from explicit rows for testing (top row first)
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }
}

/// Check if a row is completely filled
pub fn is_row_full(row: &Row) -> bool {
    row.iter().all(|&cell| cell)
}

/// True if any of `cols` is already occupied in `row`
fn overlaps(row: &Row, cols: &[usize]) -> bool {
    cols.iter().any(|&x| row[x])
}
