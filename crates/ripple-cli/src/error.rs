//! Error types for the Ripple CLI.

use ripple::prelude::{ConfigError, ParameterSourceError};
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while preparing the output directories.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The parameter file is missing or incomplete.
    #[error("Parameter error: {0}")]
    Parameters(#[from] ParameterSourceError),

    /// The parameters do not describe a runnable simulation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
