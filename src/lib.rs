//! Wait calculator for 13-tile single-suit mahjong hands
//!
//! Given a hand of thirteen tiles numbered 1-9, the solver finds every tile
//! that completes the hand into four three-tile melds plus a pair, and for
//! each completing tile every decomposition of the resulting fourteen tiles,
//! with the group containing the wait rendered in square brackets.

#![forbid(unsafe_code)]

/// Hand representation, tile multisets, and meld extraction
pub mod hand;
/// Input/output operations and error handling
pub mod io;
/// Decomposition search, solution formatting, and orchestration
pub mod solver;

pub use io::error::{Result, SolverError};
