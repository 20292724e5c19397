//! Core types and traits for the Ripple wave solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the physical parameter set, the discretization constants derived
//! from it, the step identifier, the error types shared across the
//! workspace, and the [`SnapshotSink`] capability through which the
//! time marcher hands each reached field state to storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod params;
pub mod traits;

pub use error::{ParameterError, SinkError};
pub use id::StepId;
pub use params::{DerivedConstants, PulseWindow, SimulationParameters, StabilityCheck};
pub use traits::{NullSink, SnapshotSink};
