//! Error types for file I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The parameter source could not supply five values.
#[derive(Debug)]
pub enum ParameterSourceError {
    /// The parameter file could not be opened or read.
    MissingParameterFile {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Fewer than five `<name> <value>` pairs parsed and missing values
    /// are not being defaulted.
    MalformedOrIncompleteParameters {
        /// Pairs successfully parsed.
        found: usize,
        /// Pairs required.
        expected: usize,
    },
}

impl fmt::Display for ParameterSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameterFile { path, source } => {
                write!(f, "cannot read parameter file {}: {source}", path.display())
            }
            Self::MalformedOrIncompleteParameters { found, expected } => {
                write!(f, "parsed {found} of {expected} parameters")
            }
        }
    }
}

impl std::error::Error for ParameterSourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingParameterFile { source, .. } => Some(source),
            Self::MalformedOrIncompleteParameters { .. } => None,
        }
    }
}

/// Errors reading or writing CSV snapshot files.
#[derive(Debug)]
pub enum CsvError {
    /// An I/O error occurred.
    Io(io::Error),
    /// A value could not be parsed as a float.
    Parse {
        /// Zero-based column of the bad value.
        column: usize,
        /// The offending text.
        token: String,
    },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { column, token } => {
                write!(f, "column {column}: cannot parse {token:?} as a number")
            }
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for CsvError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
