//! Exhaustive enumeration of single-suit 13-tile hands
//!
//! Visits every multiset of 13 tiles drawn from values 1-9 with at most four
//! copies each, taking larger counts of smaller values first so the
//! enumeration order is deterministic.

use crate::hand::Tile;
use crate::io::configuration::{COPIES_PER_TILE, HAND_SIZE, TILE_MAX, TILE_MIN};

/// Visit every 13-tile hand in enumeration order
pub fn for_each_hand<F>(mut visit: F)
where
    F: FnMut(&[Tile]),
{
    let mut pattern = Vec::with_capacity(HAND_SIZE);
    recurse(&mut pattern, TILE_MIN, HAND_SIZE, &mut visit);
}

fn recurse(pattern: &mut Vec<Tile>, value: Tile, remaining: usize, visit: &mut impl FnMut(&[Tile])) {
    if remaining == 0 {
        visit(pattern);
        return;
    }
    if value > TILE_MAX {
        return;
    }

    for take in (0..=remaining.min(COPIES_PER_TILE)).rev() {
        let rollback = pattern.len();
        pattern.extend(std::iter::repeat_n(value, take));
        recurse(pattern, value + 1, remaining - take, visit);
        pattern.truncate(rollback);
    }
}

/// Number of hands [`for_each_hand`] visits
pub fn total_hands() -> u64 {
    count(TILE_MIN, HAND_SIZE)
}

fn count(value: Tile, remaining: usize) -> u64 {
    if remaining == 0 {
        return 1;
    }
    if value > TILE_MAX {
        return 0;
    }
    (0..=remaining.min(COPIES_PER_TILE))
        .map(|take| count(value + 1, remaining - take))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_matches_closed_form() {
        // Coefficient of x^13 in ((1 - x^5) / (1 - x))^9
        assert_eq!(total_hands(), 93_600);
    }

    #[test]
    fn test_enumeration_count_and_bounds() {
        let mut visited: u64 = 0;
        for_each_hand(|tiles| {
            visited += 1;
            debug_assert_eq!(tiles.len(), HAND_SIZE);
        });
        assert_eq!(visited, total_hands());
    }

    #[test]
    fn test_first_hand_is_greedy_low() {
        let mut first = None;
        for_each_hand(|tiles| {
            if first.is_none() {
                first = Some(tiles.to_vec());
            }
        });
        assert_eq!(
            first,
            Some(vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4])
        );
    }
}
