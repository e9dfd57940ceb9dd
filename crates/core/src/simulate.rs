//! Simulation module - fold a piece sequence over an empty grid

use crate::grid::Grid;
use crate::piece::Piece;

/// Final state of one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Simulation {
    pub grid: Grid,
    pub lines_cleared: usize,
    pub pieces_dropped: usize,
}

impl Simulation {
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Drop every piece in order, starting from an empty grid.
///
/// Pieces are never reordered: each one lands on whatever the previous
/// pieces left behind.
pub fn run<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Simulation {
    let mut sim = Simulation::default();
    for piece in pieces {
        let outcome = sim.grid.drop_piece(piece);
        sim.lines_cleared += outcome.lines_cleared;
        sim.pieces_dropped += 1;
    }
    sim
}

/// Height of the grid after dropping every piece in order
pub fn simulate(pieces: &[Piece]) -> usize {
    run(pieces).height()
}
