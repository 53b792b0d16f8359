//! Recursive decomposition search
//!
//! At every node the three extractors are each tried against the current
//! remainder, so ambiguous fronts like 111223 are explored both as a triplet
//! and as a run; no extraction order is privileged. A path may only ever take
//! one pair, which excludes seven-pairs shapes by construction.

use crate::hand::meld::{Meld, extract_pair, extract_run, extract_triplet};
use crate::hand::multiset::TileMultiset;
use crate::io::configuration::WINNING_SIZE;

/// Enumerate every meld sequence extractable from the remainder
///
/// A branch whose recursion finds nothing further still contributes its own
/// meld as a fragment, even when tiles are left over. Such dead ends never
/// reach the 14-tile threshold and are discarded by [`is_complete`]; the
/// search itself does not enforce full consumption.
pub fn decompose(remainder: &TileMultiset, pair_found: bool) -> Vec<Vec<Meld>> {
    let mut fragments = Vec::new();

    if !pair_found {
        if let Some((meld, rest)) = extract_pair(remainder) {
            descend(meld, &rest, true, &mut fragments);
        }
    }
    if let Some((meld, rest)) = extract_triplet(remainder) {
        descend(meld, &rest, pair_found, &mut fragments);
    }
    if let Some((meld, rest)) = extract_run(remainder) {
        descend(meld, &rest, pair_found, &mut fragments);
    }

    fragments
}

/// Recurse past one extracted meld, prefixing it onto every child fragment
fn descend(meld: Meld, rest: &TileMultiset, pair_found: bool, fragments: &mut Vec<Vec<Meld>>) {
    let children = decompose(rest, pair_found);
    if children.is_empty() {
        fragments.push(vec![meld]);
    } else {
        for mut child in children {
            child.insert(0, meld);
            fragments.push(child);
        }
    }
}

/// Total tiles covered by a fragment
pub fn tile_count(fragment: &[Meld]) -> usize {
    fragment.iter().map(Meld::size).sum()
}

/// Test whether a fragment covers a full 14-tile winning shape
pub fn is_complete(fragment: &[Meld]) -> bool {
    tile_count(fragment) == WINNING_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tiles: &[u8]) -> TileMultiset {
        TileMultiset::new(tiles.to_vec())
    }

    #[test]
    fn test_complete_decomposition_found() {
        let candidate = set(&[1, 1, 1, 2, 2, 2, 3, 3, 3, 5, 5, 5, 9, 9]);
        let fragments = decompose(&candidate, false);
        let complete: Vec<_> = fragments.iter().filter(|f| is_complete(f)).collect();
        assert!(
            complete.contains(&&vec![
                Meld::Triplet(1),
                Meld::Triplet(2),
                Meld::Triplet(3),
                Meld::Triplet(5),
                Meld::Pair(9),
            ])
        );
        // The same 14 tiles also split as three runs
        assert!(
            complete.contains(&&vec![
                Meld::Run(1),
                Meld::Run(1),
                Meld::Run(1),
                Meld::Triplet(5),
                Meld::Pair(9),
            ])
        );
    }

    #[test]
    fn test_incomplete_fragments_are_kept() {
        // 111 then a lone 5: the triplet branch terminates short
        let fragments = decompose(&set(&[1, 1, 1, 5]), false);
        assert!(fragments.iter().any(|f| tile_count(f) < 4));
        assert!(fragments.iter().all(|f| !is_complete(f)));
    }

    #[test]
    fn test_seven_pairs_excluded() {
        let candidate = set(&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7]);
        let fragments = decompose(&candidate, false);
        // No fragment holds two pairs, so no seven-pairs completion exists
        for fragment in &fragments {
            let pairs = fragment
                .iter()
                .filter(|meld| matches!(meld, Meld::Pair(_)))
                .count();
            assert!(pairs <= 1);
        }
    }

    #[test]
    fn test_empty_remainder_yields_nothing() {
        assert!(decompose(&set(&[]), false).is_empty());
    }
}
