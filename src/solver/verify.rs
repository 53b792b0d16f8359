//! Structural verification of solver output
//!
//! Used by the randomized self-check mode and the property tests. Checks that
//! every line is shaped like a wait (13 digits, exactly one open group whose
//! remnant can close into a pair, triplet, or run), and optionally that a tile
//! removed from a known winning hand shows up as a wait. The removed tile need
//! not be the literal digit missing from the open group: a shanpon wait may be
//! witnessed by another line, and an extended single wait like `[4]` from
//! `(123)` also covers `(234)` waiting on 1.

use crate::hand::Tile;
use crate::io::configuration::{HAND_SIZE, LEFT_OPEN, RIGHT_OPEN};
use crate::io::error::{Result, check_failed};

/// Check the structural shape of solved lines for a 13-tile hand
///
/// When `removed` is given, the hand was produced by deleting that tile from
/// a complete winning hand, and some line must witness it as a wait.
///
/// # Errors
///
/// Returns [`crate::SolverError::CheckFailed`] when any line is malformed or
/// the removed tile is never witnessed.
pub fn verify(hand: &str, lines: &[String], removed: Option<Tile>) -> Result<()> {
    let mut found = removed.is_none();

    for line in lines {
        let digit_total = line.chars().filter(char::is_ascii_digit).count();
        if digit_total != HAND_SIZE {
            return Err(check_failed(
                hand,
                &format!("line '{line}' covers {digit_total} tiles, expected {HAND_SIZE}"),
            ));
        }
        if line.chars().filter(|&c| c == LEFT_OPEN).count() != 1 {
            return Err(check_failed(
                hand,
                &format!("line '{line}' does not have exactly one open group"),
            ));
        }

        let marked = marked_tiles(hand, line)?;
        let mut it = marked.iter().copied();
        match (it.next(), it.next()) {
            (Some(single), None) => {
                if removed == Some(single) {
                    found = true;
                }
            }
            (Some(low), Some(high)) => {
                // The remnant must close into a triplet or a run
                if high > low + 2 {
                    return Err(check_failed(
                        hand,
                        &format!("open group in '{line}' cannot form a meld"),
                    ));
                }
                if let Some(extra) = removed {
                    if low == high {
                        // Shanpon: this side of the wait matches directly
                        if low == extra {
                            found = true;
                        }
                    } else {
                        let mut trio = vec![low, high, extra];
                        trio.sort_unstable();
                        trio.dedup();
                        if let (Some(&a), Some(&b), Some(&c)) =
                            (trio.first(), trio.get(1), trio.get(2))
                        {
                            if a + 1 == b && b + 1 == c {
                                found = true;
                            }
                        }
                        // A two-value overlap (kanchan next to the extra
                        // tile) proves nothing either way
                    }
                }
            }
            _ => {
                return Err(check_failed(
                    hand,
                    &format!("open group in '{line}' holds no tiles"),
                ));
            }
        }
    }

    if found {
        Ok(())
    } else {
        Err(check_failed(
            hand,
            &format!(
                "removed tile {} never witnessed in:\n{}",
                removed.unwrap_or(0),
                lines.join("\n")
            ),
        ))
    }
}

/// Parse the digits inside the single `[...]` group of a line
fn marked_tiles(hand: &str, line: &str) -> Result<Vec<Tile>> {
    let digits: Vec<Tile> = line
        .chars()
        .skip_while(|&c| c != LEFT_OPEN)
        .skip(1)
        .take_while(|&c| c != RIGHT_OPEN)
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as Tile)
        .collect();

    if digits.is_empty() || digits.len() > 2 {
        return Err(check_failed(
            hand,
            &format!("open group in '{line}' holds {} tiles", digits.len()),
        ));
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_accepts_known_good_output() {
        let out = lines(&["(111)(222)(888)(99)[45]"]);
        assert!(verify("1112224588899", &out, None).is_ok());
        assert!(verify("1112224588899", &out, Some(3)).is_ok());
        assert!(verify("1112224588899", &out, Some(6)).is_ok());
    }

    #[test]
    fn test_rejects_unwitnessed_removal() {
        let out = lines(&["(111)(222)(888)(99)[45]"]);
        assert!(verify("1112224588899", &out, Some(9)).is_err());
    }

    #[test]
    fn test_shanpon_witnessed_by_either_line() {
        let out = lines(&[
            "(11)(345)(678)(999)[12]",
            "(111)(345)(678)(999)[2]",
        ]);
        assert!(verify("1112345678999", &out, Some(2)).is_ok());
    }

    #[test]
    fn test_extended_single_wait_counts() {
        // Tanki on 4 at the edge of the 2334 stretch
        let out = lines(&["(123)(234)(567)(999)[4]"]);
        assert!(verify("1223344567999", &out, None).is_ok());
        assert!(verify("1223344567999", &out, Some(4)).is_ok());
    }

    #[test]
    fn test_malformed_lines_rejected() {
        assert!(verify("x", &lines(&["(111)(222)(888)(99)[4]"]), None).is_err());
        assert!(verify("x", &lines(&["(111)(222)(88)(99)[479]"]), None).is_err());
        assert!(verify("x", &lines(&["(111)(222)(888)(99)[48]"]), None).is_err());
    }
}
