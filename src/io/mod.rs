//! Input/output operations and error handling
//!
//! This module contains the shell around the solver:
//! - Line parsing and validation of hand input
//! - The command-line interface and its processing modes
//! - Error types and named constants
//! - Progress reporting for the exhaustive mode

/// Command-line interface driving the solver
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Line parsing and validation of hand input
pub mod input;
/// Progress reporting for the exhaustive mode
pub mod progress;
