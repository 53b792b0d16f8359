//! Line parsing and validation of hand input
//!
//! A hand line is the first whitespace-delimited token of the input; leading
//! whitespace and anything after the token are ignored. Characters outside
//! the digits 1-9 do not count as tiles, so a token containing them comes up
//! short and is rejected by the length check.

use crate::hand::{Hand, Tile};
use crate::io::configuration::{TILE_MAX, TILE_MIN};
use crate::io::error::{Result, SolverError, invalid_hand};

/// Parse one input line into a validated hand
///
/// # Errors
///
/// Returns [`SolverError::InvalidHand`] when the line does not contain
/// exactly 13 digits in 1..9, or some value occurs more than four times.
pub fn parse_hand(line: &str) -> Result<Hand> {
    let token = line.split_whitespace().next().unwrap_or("");
    if token.is_empty() {
        return Err(invalid_hand(line.trim(), &"empty input"));
    }

    let tiles: Vec<Tile> = token
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|digit| digit as Tile)
        .filter(|tile| (TILE_MIN..=TILE_MAX).contains(tile))
        .collect();

    // Re-home the error on the raw token so the user sees what they typed
    Hand::from_tiles(tiles).map_err(|error| match error {
        SolverError::InvalidHand { reason, .. } => invalid_hand(token, &reason),
        other => other,
    })
}
