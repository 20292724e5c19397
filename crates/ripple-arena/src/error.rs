//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a [`FieldRing`](crate::FieldRing).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A field with zero values was supplied.
    EmptyField,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field buffers must hold at least one value"),
        }
    }
}

impl Error for ArenaError {}
