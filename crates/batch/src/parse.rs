//! Line parser - turns `Q0,T4,...` into validated pieces

use crate::core::{shape_lookup, Piece, SimulationError};

/// Token separator within a line
pub const TOKEN_SEPARATOR: char = ',';

/// Parse one input line into pieces, in input order.
///
/// A blank line is an empty sequence, and trailing separators are ignored
/// (`Q0,Q2,` is two pieces). The first bad token fails the whole line.
pub fn parse_line(line: &str) -> Result<Vec<Piece>, SimulationError> {
    let line = line.trim_end_matches(|c: char| c == TOKEN_SEPARATOR || c.is_whitespace());
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    line.split(TOKEN_SEPARATOR).map(parse_token).collect()
}

/// Parse a single `<ShapeLetter><PositionDigit>` token
pub fn parse_token(token: &str) -> Result<Piece, SimulationError> {
    let trimmed = token.trim();
    let malformed = || SimulationError::MalformedToken {
        token: trimmed.to_string(),
    };

    let mut chars = trimmed.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(malformed());
    };
    let position = digit.to_digit(10).ok_or_else(malformed)?;

    let shape = shape_lookup(letter)?;
    Piece::new(shape, position as i16)
}
