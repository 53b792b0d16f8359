//! Meld variants and front-of-multiset extraction
//!
//! The three extractors each inspect the front of the sorted remainder and,
//! on a match, return the recognized meld together with a fresh remainder.
//! They are tried independently at every search node; no extractor has
//! priority over another.

use crate::hand::multiset::TileMultiset;
use crate::hand::{Tile, tile_char};
use crate::io::configuration::{LEFT_CLOSED, MELD_SIZE, PAIR_SIZE, RIGHT_CLOSED};
use std::fmt;

/// A valid tile group: pair, triplet, or run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Meld {
    /// Two identical tiles
    Pair(Tile),
    /// Three identical tiles
    Triplet(Tile),
    /// Three consecutive tiles, stored by the smallest value
    Run(Tile),
}

impl Meld {
    /// Number of tiles in this meld
    pub const fn size(&self) -> usize {
        match self {
            Self::Pair(_) => PAIR_SIZE,
            Self::Triplet(_) | Self::Run(_) => MELD_SIZE,
        }
    }

    /// Tile values in ascending order
    pub fn tiles(&self) -> Vec<Tile> {
        match *self {
            Self::Pair(value) => vec![value; PAIR_SIZE],
            Self::Triplet(value) => vec![value; MELD_SIZE],
            Self::Run(start) => (start..start + MELD_SIZE as Tile).collect(),
        }
    }

    /// Test whether this meld contains the given tile value
    pub const fn contains(&self, tile: Tile) -> bool {
        match *self {
            Self::Pair(value) | Self::Triplet(value) => value == tile,
            Self::Run(start) => tile >= start && tile < start + MELD_SIZE as Tile,
        }
    }
}

impl fmt::Display for Meld {
    /// Closed rendering: sorted digits in parentheses, e.g. `(111)` or `(456)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{LEFT_CLOSED}")?;
        for tile in self.tiles() {
            write!(f, "{}", tile_char(tile))?;
        }
        write!(f, "{RIGHT_CLOSED}")
    }
}

/// Extract a pair from the front of the remainder
pub fn extract_pair(remainder: &TileMultiset) -> Option<(Meld, TileMultiset)> {
    extract_flush(remainder, PAIR_SIZE)
}

/// Extract a triplet from the front of the remainder
pub fn extract_triplet(remainder: &TileMultiset) -> Option<(Meld, TileMultiset)> {
    extract_flush(remainder, MELD_SIZE)
}

/// Extract `size` identical tiles from the front of the remainder
fn extract_flush(remainder: &TileMultiset, size: usize) -> Option<(Meld, TileMultiset)> {
    if !remainder.leading_equal(size) {
        return None;
    }
    let value = remainder.first()?;
    let meld = if size == PAIR_SIZE {
        Meld::Pair(value)
    } else {
        Meld::Triplet(value)
    };
    Some((meld, remainder.without_leading(size)))
}

/// Extract a run starting at the smallest remaining value
///
/// Duplicates may sit between the needed values (111223 still yields the run
/// 1-2-3), so each value is located by its first position rather than taken
/// contiguously.
pub fn extract_run(remainder: &TileMultiset) -> Option<(Meld, TileMultiset)> {
    let base = remainder.first()?;
    let mut positions = Vec::with_capacity(MELD_SIZE);
    for offset in 0..MELD_SIZE as Tile {
        positions.push(remainder.position_of(base + offset)?);
    }
    Some((Meld::Run(base), remainder.without_positions(&positions)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tiles: &[Tile]) -> TileMultiset {
        TileMultiset::new(tiles.to_vec())
    }

    #[test]
    fn test_extract_pair() {
        let (meld, rest) = extract_pair(&set(&[9, 9, 9])).unwrap();
        assert_eq!(meld, Meld::Pair(9));
        assert_eq!(rest.as_slice(), &[9]);
        assert!(extract_pair(&set(&[1, 2])).is_none());
        assert!(extract_pair(&set(&[1])).is_none());
    }

    #[test]
    fn test_extract_triplet() {
        let (meld, rest) = extract_triplet(&set(&[2, 2, 2, 3])).unwrap();
        assert_eq!(meld, Meld::Triplet(2));
        assert_eq!(rest.as_slice(), &[3]);
        assert!(extract_triplet(&set(&[2, 2, 3])).is_none());
    }

    #[test]
    fn test_extract_run_skips_duplicates() {
        let (meld, rest) = extract_run(&set(&[1, 1, 1, 2, 2, 3])).unwrap();
        assert_eq!(meld, Meld::Run(1));
        assert_eq!(rest.as_slice(), &[1, 1, 2]);
    }

    #[test]
    fn test_extract_run_requires_all_three() {
        assert!(extract_run(&set(&[1, 2, 4])).is_none());
        assert!(extract_run(&set(&[8, 9])).is_none());
        // 8-9-10 does not exist in the suit
        assert!(extract_run(&set(&[8, 8, 9, 9])).is_none());
    }

    #[test]
    fn test_meld_rendering() {
        assert_eq!(Meld::Pair(9).to_string(), "(99)");
        assert_eq!(Meld::Triplet(1).to_string(), "(111)");
        assert_eq!(Meld::Run(4).to_string(), "(456)");
    }

    #[test]
    fn test_meld_contains() {
        assert!(Meld::Run(4).contains(6));
        assert!(!Meld::Run(4).contains(7));
        assert!(Meld::Triplet(2).contains(2));
        assert!(!Meld::Pair(2).contains(3));
    }
}
