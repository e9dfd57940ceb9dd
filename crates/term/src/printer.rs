//! GridPrinter: writes a rendered grid to a terminal stream.
//!
//! Output is built as a sequence of crossterm commands in a byte buffer and
//! flushed in one write.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Grid;
use crate::view::GridView;

/// Colour used for occupied cells
pub const BLOCK_COLOR: Color = Color::Cyan;

/// Colour used for borders and the column footer
pub const FRAME_COLOR: Color = Color::DarkGrey;

pub struct GridPrinter<W: Write> {
    out: W,
    view: GridView,
    buf: Vec<u8>,
}

impl GridPrinter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> GridPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            view: GridView::default(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn with_view(mut self, view: GridView) -> Self {
        self.view = view;
        self
    }

    /// Print a grid preceded by a title line.
    pub fn print(&mut self, title: &str, grid: &Grid) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.buf.queue(Print(title))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(Print("\n"))?;
        encode_grid_into(&self.view, grid, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a styled grid into `out`.
///
/// This builds a sequence of crossterm commands without writing to a terminal.
pub fn encode_grid_into(view: &GridView, grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    for line in view.lines(grid) {
        let mut current: Option<Color> = None;
        for ch in line.chars() {
            let color = if ch == view.block {
                BLOCK_COLOR
            } else {
                FRAME_COLOR
            };
            if current != Some(color) {
                out.queue(SetForegroundColor(color))?;
                current = Some(color);
            }
            out.queue(Print(ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print("\n"))?;
    }
    Ok(())
}
