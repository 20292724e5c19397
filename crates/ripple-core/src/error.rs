//! Error types shared across the Ripple workspace.
//!
//! [`ParameterError`] covers everything that can go wrong while turning
//! raw physical inputs into discretization constants. [`SinkError`] is
//! returned by [`SnapshotSink`](crate::SnapshotSink) implementations.

use std::error::Error;
use std::fmt;

use crate::id::StepId;
use crate::params::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Errors from [`SimulationParameters::derive()`](crate::SimulationParameters::derive).
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    /// A parameter failed its sign or finiteness guard.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// The constraint it was checked against.
        requirement: &'static str,
    },
    /// The derived grid has fewer than two points or is too large to
    /// allocate.
    InvalidGridSize {
        /// The derived point count, `floor(L / dx)`.
        grid_size: usize,
    },
    /// The Courant number exceeds 1 and stability is enforced.
    StabilityViolation {
        /// The rejected Courant number.
        courant: f64,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                requirement,
            } => write!(f, "parameter {name} = {value} must be {requirement}"),
            Self::InvalidGridSize { grid_size } => {
                write!(
                    f,
                    "grid size {grid_size} is outside the supported range of {MIN_GRID_SIZE}..={MAX_GRID_SIZE} points"
                )
            }
            Self::StabilityViolation { courant } => write!(
                f,
                "Courant number {courant} exceeds 1; the explicit scheme would diverge"
            ),
        }
    }
}

impl Error for ParameterError {}

/// A snapshot could not be persisted.
///
/// Sinks never retry; the time marcher logs the failure, counts it, and
/// carries on with the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// Writing the snapshot for a given step failed.
    WriteFailed {
        /// The step being written, or `None` for the initial condition.
        step: Option<StepId>,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl SinkError {
    /// Build a write failure for step `step` (or the initial condition).
    pub fn write_failed(step: Option<StepId>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            step,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed {
                step: Some(step),
                reason,
            } => write!(f, "snapshot write failed at step {step}: {reason}"),
            Self::WriteFailed { step: None, reason } => {
                write!(f, "initial condition write failed: {reason}")
            }
        }
    }
}

impl Error for SinkError {}
