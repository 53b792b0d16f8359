//! Hand representation and tile-level building blocks
//!
//! A [`Hand`] is a validated, ascending sequence of exactly thirteen tiles.
//! The remaining modules provide the sorted multiset the search operates on,
//! meld recognition, and the random generators used by the self-check mode.

/// Seeded random hand generators for self-checks and property tests
pub mod generator;
/// Meld variants and front-of-multiset extraction
pub mod meld;
/// Sorted tile multiset with positional removal
pub mod multiset;

use crate::io::configuration::{COPIES_PER_TILE, HAND_SIZE, TILE_KINDS, TILE_MAX, TILE_MIN};
use crate::io::error::{Result, invalid_hand};
use multiset::TileMultiset;
use std::fmt;

/// A single tile value in `1..=9`
pub type Tile = u8;

/// Render a tile value as its digit character
pub const fn tile_char(tile: Tile) -> char {
    (b'0' + tile) as char
}

/// A validated 13-tile hand, sorted ascending
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    /// Build a hand from raw tile values, sorting them
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidHand`] if there are not exactly
    /// thirteen tiles, any value falls outside `1..=9`, or any value occurs
    /// more than four times.
    pub fn from_tiles(mut tiles: Vec<Tile>) -> Result<Self> {
        tiles.sort_unstable();
        // Values are not range-checked yet, so tile_char cannot be used here
        let digits: String = tiles
            .iter()
            .map(|&tile| char::from_digit(u32::from(tile), 10).unwrap_or('?'))
            .collect();

        if tiles.len() != HAND_SIZE {
            return Err(invalid_hand(
                &digits,
                &format!("expected {HAND_SIZE} tiles in 1..9, found {}", tiles.len()),
            ));
        }
        if let Some(&bad) = tiles
            .iter()
            .find(|&&tile| !(TILE_MIN..=TILE_MAX).contains(&tile))
        {
            return Err(invalid_hand(&digits, &format!("tile value {bad} out of range")));
        }

        let mut counts = [0_usize; TILE_KINDS];
        for &tile in &tiles {
            if let Some(slot) = counts.get_mut(usize::from(tile) - 1) {
                *slot += 1;
                if *slot > COPIES_PER_TILE {
                    return Err(invalid_hand(
                        &digits,
                        &format!("more than {COPIES_PER_TILE} copies of tile {tile}"),
                    ));
                }
            }
        }

        Ok(Self { tiles })
    }

    /// Tiles in ascending order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The 14-tile candidate multiset formed by adding one extra tile
    pub fn candidate_with(&self, extra: Tile) -> TileMultiset {
        let mut tiles = self.tiles.clone();
        tiles.push(extra);
        TileMultiset::new(tiles)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", tile_char(tile))?;
        }
        Ok(())
    }
}
