//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the piece-drop engine: the shape catalog, validated
//! pieces, the growable grid and the simulation fold. It has **no
//! dependencies** on parsing, I/O or rendering, making it:
//!
//! - **Deterministic**: the same piece sequence always yields the same grid
//! - **Testable**: every step is a plain function over owned data
//! - **Portable**: usable from the batch runner, benches or any other host
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven fixed tetromino footprints and shape lookup
//! - [`piece`]: validated pieces and projection onto absolute grid columns
//! - [`grid`]: the row sequence, settling, insertion and line clears
//! - [`simulate`]: folding a whole piece sequence from an empty grid
//! - [`error`]: rejection reasons for tokens and pieces
//!
//! # Rules
//!
//! - Width is fixed at 10 columns; height grows and shrinks as needed
//! - Pieces drop straight down at their given column and never rotate
//! - A row is removed as soon as every cell in it is occupied
//!
//! # Example
//!
//! ```
//! use tetris_drop_core::{shape_lookup, simulate, Piece};
//!
//! let line = [
//!     Piece::new(shape_lookup('I').unwrap(), 0).unwrap(),
//!     Piece::new(shape_lookup('I').unwrap(), 4).unwrap(),
//! ];
//!
//! // Both lines land side by side in the bottom row, which is not yet full.
//! assert_eq!(simulate(&line), 1);
//! ```

pub mod error;
pub mod grid;
pub mod piece;
pub mod shapes;
pub mod simulate;

pub use tetris_drop_types as types;

// Re-export commonly used types for convenience
pub use error::SimulationError;
pub use grid::{DropOutcome, Grid};
pub use piece::{project, CoordinateSet, Piece};
pub use shapes::{coordinates_of, shape_height, shape_lookup, shape_width};
pub use simulate::{run, simulate, Simulation};
