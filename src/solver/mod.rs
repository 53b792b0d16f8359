//! Decomposition search, solution formatting, and orchestration
//!
//! This module contains the solver pipeline:
//! - Recursive enumeration of meld decompositions
//! - Rendering and wait marking of complete decompositions
//! - Per-candidate-tile orchestration and deduplication
//! - Exhaustive enumeration and structural verification helpers

/// Exhaustive enumeration of single-suit 13-tile hands
pub mod enumerate;
/// Rendering of decompositions and wait marking
pub mod format;
/// Recursive decomposition search
pub mod search;
/// Structural verification of solver output
pub mod verify;
/// Orchestration over all candidate completing tiles
pub mod waits;
