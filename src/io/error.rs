//! Error types for solver operations

use std::fmt;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Input line is not a valid 13-tile hand
    InvalidHand {
        /// The offending input, trimmed
        input: String,
        /// Description of what is wrong with the input
        reason: String,
    },

    /// A randomized self-check round diverged from the expected shape
    CheckFailed {
        /// Hand under test as a digit string
        hand: String,
        /// Description of the divergence, including solver output
        detail: String,
    },

    /// Reading input or writing results failed
    Io {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHand { input, reason } => {
                write!(f, "Invalid hand '{input}': {reason}")
            }
            Self::CheckFailed { hand, detail } => {
                write!(f, "Self-check failed for hand {hand}: {detail}")
            }
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create an invalid hand error
pub fn invalid_hand(input: &str, reason: &impl ToString) -> SolverError {
    SolverError::InvalidHand {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a self-check failure error
pub fn check_failed(hand: &str, detail: &impl ToString) -> SolverError {
    SolverError::CheckFailed {
        hand: hand.to_string(),
        detail: detail.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_hand() {
        let err = invalid_hand("12345", &"expected 13 tiles, found 5");
        assert_eq!(
            err.to_string(),
            "Invalid hand '12345': expected 13 tiles, found 5"
        );
    }

    #[test]
    fn test_io_source_preserved() {
        let inner = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SolverError::Io {
            operation: "write results",
            source: inner,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
