//! Sorted tile multiset with positional removal
//!
//! The decomposition search never mutates a shared multiset: every extraction
//! produces a fresh remainder, so sibling branches stay independent. All
//! operations are linear, which is fine at fourteen tiles or fewer.

use crate::hand::Tile;
use crate::io::configuration::TILE_KINDS;

/// An ascending multiset of tile values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMultiset {
    tiles: Vec<Tile>,
}

impl TileMultiset {
    /// Create a multiset, sorting the given tiles
    pub fn new(mut tiles: Vec<Tile>) -> Self {
        tiles.sort_unstable();
        Self { tiles }
    }

    /// Number of tiles remaining
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test whether no tiles remain
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Smallest remaining tile value
    pub fn first(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    /// Test whether the first `k` tiles exist and are all equal
    pub fn leading_equal(&self, k: usize) -> bool {
        if self.tiles.len() < k {
            return false;
        }
        let mut lead = self.tiles.iter().take(k);
        match lead.next() {
            Some(first) => lead.all(|tile| tile == first),
            None => false,
        }
    }

    /// First position holding exactly `value`
    pub fn position_of(&self, value: Tile) -> Option<usize> {
        self.tiles.iter().position(|&tile| tile == value)
    }

    /// Copy of this multiset with the first `k` tiles removed
    pub fn without_leading(&self, k: usize) -> Self {
        Self {
            tiles: self.tiles.iter().skip(k).copied().collect(),
        }
    }

    /// Copy of this multiset with the given positions removed
    ///
    /// Positions index the current contents; filtering by original index is
    /// equivalent to deleting them one by one with shift adjustment.
    pub fn without_positions(&self, removed: &[usize]) -> Self {
        let tiles = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(position, _)| !removed.contains(position))
            .map(|(_, &tile)| tile)
            .collect();
        Self { tiles }
    }

    /// Occurrences of each tile value, indexed by value minus one
    pub fn counts(&self) -> [usize; TILE_KINDS] {
        let mut counts = [0_usize; TILE_KINDS];
        for &tile in &self.tiles {
            let slot = usize::from(tile)
                .checked_sub(1)
                .and_then(|index| counts.get_mut(index));
            if let Some(slot) = slot {
                *slot += 1;
            }
        }
        counts
    }

    /// Highest occurrence count of any single value
    pub fn max_duplicates(&self) -> usize {
        self.counts().into_iter().max().unwrap_or(0)
    }

    /// Tiles in ascending order
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }
}
