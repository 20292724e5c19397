//! Error types for space construction.

use std::fmt;

/// Errors arising from grid or topology construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Fewer points than the structure needs.
    TooFewPoints {
        /// Points requested.
        points: usize,
        /// Minimum accepted.
        min: usize,
    },
    /// The interval endpoints are not finite or not increasing.
    InvalidInterval {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { points, min } => {
                write!(f, "{points} points requested, at least {min} required")
            }
            Self::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}]")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
