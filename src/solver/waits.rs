//! Orchestration over all candidate completing tiles
//!
//! Each value 1-9 is tried as the fourteenth tile. Candidates that would need
//! a fifth copy of some value are skipped outright; that is not an error, the
//! trial simply contributes no solutions.

use crate::hand::Hand;
use crate::io::configuration::{COPIES_PER_TILE, NO_WAIT_SENTINEL, TILE_MAX, TILE_MIN};
use crate::solver::format::mark_completing_tile;
use crate::solver::search::{decompose, is_complete};

/// All marked decomposition lines for a hand, sorted and deduplicated
pub fn solve(hand: &Hand) -> Vec<String> {
    let mut lines = Vec::new();

    for completing in TILE_MIN..=TILE_MAX {
        let candidate = hand.candidate_with(completing);
        if candidate.max_duplicates() > COPIES_PER_TILE {
            continue;
        }

        for fragment in decompose(&candidate, false) {
            if is_complete(&fragment) {
                lines.extend(mark_completing_tile(&fragment, completing));
            }
        }
    }

    lines.sort_unstable();
    lines.dedup();
    lines
}

/// Render solved lines as display text, one decomposition per line
///
/// An empty result renders as the `(none)` sentinel. The text always ends
/// with a newline.
pub fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        format!("{NO_WAIT_SENTINEL}\n")
    } else {
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

/// Solve a hand and render the result in one step
pub fn solve_rendered(hand: &Hand) -> String {
    render(&solve(hand))
}
