//! GridView: lays a grid out as text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::types::{Row, GRID_WIDTH};

/// Glyph for an occupied cell
pub const BLOCK: char = '\u{25A1}';

/// Text layout for a grid: one line per row, framed, with a column index
/// footer.
///
/// ```text
/// | □ □                 |
/// | □ □                 |
///   -------------------
///   0 1 2 3 4 5 6 7 8 9
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    pub block: char,
    pub empty: char,
    /// Append the ruler and column indices under the grid.
    pub footer: bool,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            block: BLOCK,
            empty: ' ',
            footer: true,
        }
    }
}

impl GridView {
    /// Render a single row, including the side borders.
    pub fn row_line(&self, row: &Row) -> String {
        let mut line = String::with_capacity(4 + GRID_WIDTH * 2);
        line.push_str("| ");
        for &cell in row {
            line.push(if cell { self.block } else { self.empty });
            line.push(' ');
        }
        line.push('|');
        line
    }

    /// Render the whole grid, top row first.
    pub fn lines(&self, grid: &Grid) -> Vec<String> {
        let mut lines: Vec<String> = grid.rows().map(|row| self.row_line(row)).collect();
        if self.footer {
            lines.push(format!("  {}", "-".repeat(GRID_WIDTH * 2 - 1)));
            let indices: Vec<String> = (0..GRID_WIDTH).map(|x| (x % 10).to_string()).collect();
            lines.push(format!("  {}", indices.join(" ")));
        }
        lines
    }

    pub fn render(&self, grid: &Grid) -> String {
        let mut out = self.lines(grid).join("\n");
        out.push('\n');
        out
    }
}
