//! Run configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a run.
//! [`validate()`](SimulationConfig::validate) checks every precondition
//! up front and yields a [`ValidatedConfig`] carrying the derived
//! constants, so nothing downstream has to re-check them.

use std::error::Error;
use std::fmt;

use ripple_arena::ArenaError;
use ripple_core::{DerivedConstants, ParameterError, SimulationParameters, StabilityCheck};
use ripple_space::SpaceError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating a configuration or building a run.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Parameter derivation failed.
    Parameters(ParameterError),
    /// The grid or topology could not be built.
    Space(SpaceError),
    /// The field buffers could not be built.
    Arena(ArenaError),
    /// An initial field does not match the derived grid size.
    FieldLength {
        /// Derived grid size.
        expected: usize,
        /// Length of the supplied field.
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameters(e) => write!(f, "parameters: {e}"),
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::FieldLength { expected, found } => {
                write!(f, "initial field has {found} values, grid has {expected}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameters(e) => Some(e),
            Self::Space(e) => Some(e),
            Self::Arena(e) => Some(e),
            Self::FieldLength { .. } => None,
        }
    }
}

impl From<ParameterError> for ConfigError {
    fn from(e: ParameterError) -> Self {
        Self::Parameters(e)
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ArenaError> for ConfigError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// The five physical inputs.
    pub parameters: SimulationParameters,
    /// Whether Courant numbers above 1 are rejected. Default: `Enforce`.
    pub stability: StabilityCheck,
}

impl SimulationConfig {
    /// Configuration with the default stability check.
    pub fn new(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            stability: StabilityCheck::default(),
        }
    }

    /// Validate all preconditions and derive the discretization constants.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let constants = self.parameters.derive(self.stability)?;
        Ok(ValidatedConfig {
            parameters: self.parameters,
            constants,
        })
    }
}

/// A configuration that passed [`SimulationConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedConfig {
    parameters: SimulationParameters,
    constants: DerivedConstants,
}

impl ValidatedConfig {
    /// The physical inputs.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// The derived discretization constants.
    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Total simulated time T.
    pub fn total_time(&self) -> f64 {
        self.parameters.total_time
    }
}
