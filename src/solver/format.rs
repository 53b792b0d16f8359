//! Rendering of decompositions and wait marking
//!
//! Marking works directly on the structured meld sequence and only renders to
//! text at the end, so no self-generated string is ever re-parsed. One line is
//! produced per group instance containing the completing tile's value, which
//! faithfully reproduces extended waits: marking `(123)` down to `[4]` also
//! admits `(234)` marked down to `[1]` for the same hand.

use crate::hand::meld::Meld;
use crate::hand::{Tile, tile_char};
use crate::io::configuration::{LEFT_OPEN, RIGHT_OPEN};

/// Render every marked line a complete fragment yields for a completing tile
///
/// For each group containing the completing value, that group is rendered with
/// exactly one occurrence of the value removed and open delimiters; the rest
/// keep their closed form. Groups are sorted lexicographically within the line
/// so identical decompositions reached by different paths deduplicate.
pub fn mark_completing_tile(fragment: &[Meld], completing: Tile) -> Vec<String> {
    let mut lines = Vec::new();

    for (marked_index, meld) in fragment.iter().enumerate() {
        if !meld.contains(completing) {
            continue;
        }

        let mut groups: Vec<String> = fragment
            .iter()
            .enumerate()
            .map(|(index, group)| {
                if index == marked_index {
                    render_open(group, completing)
                } else {
                    group.to_string()
                }
            })
            .collect();
        groups.sort_unstable();
        lines.push(groups.concat());
    }

    lines
}

/// Render a meld with one occurrence of the completing tile removed, in
/// open delimiters: `(111)` marked with 1 becomes `[11]`, never `[]`
fn render_open(meld: &Meld, completing: Tile) -> String {
    let mut digits = String::new();
    let mut removed = false;
    for tile in meld.tiles() {
        if !removed && tile == completing {
            removed = true;
        } else {
            digits.push(tile_char(tile));
        }
    }
    format!("{LEFT_OPEN}{digits}{RIGHT_OPEN}")
}
