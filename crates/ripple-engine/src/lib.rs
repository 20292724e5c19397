//! Leapfrog time marcher for the Ripple wave solver.
//!
//! Ties the pieces together in dependency order:
//!
//! ```text
//! SimulationConfig ──validate()──► ValidatedConfig      (parameter derivation)
//!        │
//!        ▼
//! initialize() ──► InitialState { grid, field }         (Gaussian pulse)
//!        │
//!        ▼
//! TimeMarcher ──step()/run()──► SnapshotSink            (rotate, emit, stencil)
//! ```
//!
//! Everything here is single-threaded and synchronous; each step blocks on
//! the sink before the next Future is computed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod initial;
pub mod marcher;
pub mod metrics;
pub mod stencil;

pub use config::{ConfigError, SimulationConfig, ValidatedConfig};
pub use initial::{gaussian_pulse, initialize, InitialState};
pub use marcher::{MarchState, Phase, StepReport, TimeMarcher};
pub use metrics::RunMetrics;
