//! Solver constants and runtime configuration defaults

use crate::hand::Tile;

/// Smallest tile value in the suit
pub const TILE_MIN: Tile = 1;
/// Largest tile value in the suit
pub const TILE_MAX: Tile = 9;
/// Number of distinct tile values
pub const TILE_KINDS: usize = 9;
/// Copies of each tile value in a full set
pub const COPIES_PER_TILE: usize = 4;

/// Tiles in a concealed hand waiting to win
pub const HAND_SIZE: usize = 13;
/// Tiles in a complete winning hand
pub const WINNING_SIZE: usize = 14;
/// Tiles in a pair
pub const PAIR_SIZE: usize = 2;
/// Tiles in a triplet or run
pub const MELD_SIZE: usize = 3;

// Display characters for rendered decompositions
/// Left delimiter of a group not containing the wait
pub const LEFT_CLOSED: char = '(';
/// Right delimiter of a group not containing the wait
pub const RIGHT_CLOSED: char = ')';
/// Left delimiter of the group containing the wait
pub const LEFT_OPEN: char = '[';
/// Right delimiter of the group containing the wait
pub const RIGHT_OPEN: char = ']';

/// Output when a hand has no winning tile
pub const NO_WAIT_SENTINEL: &str = "(none)";

// Default values for configurable parameters
/// Fixed seed for reproducible self-check runs
pub const DEFAULT_SEED: u64 = 42;
