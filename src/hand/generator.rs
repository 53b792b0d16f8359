//! Seeded random hand generators for self-checks and property tests
//!
//! Both generators draw from a finite wall of four copies per value, so they
//! can never produce a fifth copy. They take the RNG as an explicit parameter;
//! there is no process-wide source of randomness anywhere in the crate.

use crate::hand::Tile;
use crate::io::configuration::{
    COPIES_PER_TILE, HAND_SIZE, MELD_SIZE, PAIR_SIZE, TILE_KINDS, TILE_MAX, TILE_MIN, WINNING_SIZE,
};
use rand::Rng;

// Sampled triplet frequency so generated hands are not uniformly run-heavy
const TRIPLET_THRESHOLDS: [u32; 7] = [0, 0, 0, 1, 1, 2, 3];
const TRIPLET_LEVEL: u32 = 8;

/// Draw 13 arbitrary tiles from the wall, sorted ascending
///
/// The result may or may not have any winning tile.
pub fn random_tiles(rng: &mut impl Rng) -> Vec<Tile> {
    let mut wall: Vec<Tile> = (TILE_MIN..=TILE_MAX)
        .flat_map(|value| std::iter::repeat_n(value, COPIES_PER_TILE))
        .collect();

    let mut tiles = Vec::with_capacity(HAND_SIZE);
    for _ in 0..HAND_SIZE {
        let position = rng.random_range(0..wall.len());
        tiles.push(wall.swap_remove(position));
    }

    tiles.sort_unstable();
    tiles
}

/// Build a complete 14-tile winning hand: four melds plus a pair, sorted
pub fn complete_tiles(rng: &mut impl Rng) -> Vec<Tile> {
    let mut counts = [COPIES_PER_TILE; TILE_KINDS];
    let mut tiles = Vec::with_capacity(WINNING_SIZE);

    let threshold_index = rng.random_range(0..TRIPLET_THRESHOLDS.len());
    let threshold = TRIPLET_THRESHOLDS.get(threshold_index).copied().unwrap_or(0);

    while tiles.len() < WINNING_SIZE - PAIR_SIZE {
        let value = rng.random_range(TILE_MIN..=TILE_MAX);
        if rng.random_range(0..TRIPLET_LEVEL) <= threshold {
            if take(&mut counts, value, MELD_SIZE) {
                tiles.extend(std::iter::repeat_n(value, MELD_SIZE));
            }
        } else if value + 2 <= TILE_MAX
            && (0..MELD_SIZE as Tile).all(|offset| remaining(&counts, value + offset) > 0)
        {
            for offset in 0..MELD_SIZE as Tile {
                if take(&mut counts, value + offset, 1) {
                    tiles.push(value + offset);
                }
            }
        }
    }

    while tiles.len() < WINNING_SIZE {
        let value = rng.random_range(TILE_MIN..=TILE_MAX);
        if take(&mut counts, value, PAIR_SIZE) {
            tiles.extend(std::iter::repeat_n(value, PAIR_SIZE));
        }
    }

    tiles.sort_unstable();
    tiles
}

fn remaining(counts: &[usize; TILE_KINDS], value: Tile) -> usize {
    counts.get(usize::from(value) - 1).copied().unwrap_or(0)
}

/// Consume `amount` copies of `value` if available, reporting success
fn take(counts: &mut [usize; TILE_KINDS], value: Tile, amount: usize) -> bool {
    match counts.get_mut(usize::from(value) - 1) {
        Some(slot) if *slot >= amount => {
            *slot -= amount;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_tiles_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let tiles = random_tiles(&mut rng);
            assert_eq!(tiles.len(), HAND_SIZE);
            assert!(tiles.is_sorted());
            assert!(tiles.iter().all(|&t| (TILE_MIN..=TILE_MAX).contains(&t)));
            for value in TILE_MIN..=TILE_MAX {
                assert!(tiles.iter().filter(|&&t| t == value).count() <= COPIES_PER_TILE);
            }
        }
    }

    #[test]
    fn test_complete_tiles_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let tiles = complete_tiles(&mut rng);
            assert_eq!(tiles.len(), WINNING_SIZE);
            assert!(tiles.is_sorted());
            for value in TILE_MIN..=TILE_MAX {
                assert!(tiles.iter().filter(|&&t| t == value).count() <= COPIES_PER_TILE);
            }
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_tiles(&mut a), random_tiles(&mut b));
        assert_eq!(complete_tiles(&mut a), complete_tiles(&mut b));
    }
}
