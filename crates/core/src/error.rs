use std::fmt;

use crate::types::Shape;

/// Reasons a piece or a piece token is rejected.
///
/// Every variant is raised before the grid is touched, so a failed line never
/// leaves a partially mutated grid behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Token is not exactly one shape letter followed by one digit.
    MalformedToken { token: String },
    /// Shape letter is not one of `Q I Z S T L J`.
    UnknownShape { letter: char },
    /// Piece would cover a column outside `0..GRID_WIDTH`.
    PositionOutOfBounds { shape: Shape, position: i16 },
}

impl SimulationError {
    pub fn code(&self) -> &'static str {
        match self {
            SimulationError::MalformedToken { .. } => "malformed_token",
            SimulationError::UnknownShape { .. } => "unknown_shape",
            SimulationError::PositionOutOfBounds { .. } => "position_out_of_bounds",
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::MalformedToken { token } => {
                write!(f, "token {token:?} is not a shape letter followed by a digit")
            }
            SimulationError::UnknownShape { letter } => {
                write!(f, "no shape corresponds to {letter:?}")
            }
            SimulationError::PositionOutOfBounds { shape, position } => {
                write!(f, "shape {shape} at position {position} does not fit the grid")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
