//! Ripple: an explicit leapfrog solver for the 1D scalar wave equation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Ripple sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! // L=10, λ=2, c=1, r=0.5, T=0.1
//! let params = SimulationParameters::from_positional([10.0, 2.0, 1.0, 0.5, 0.1]);
//! let config = SimulationConfig::new(params).validate().unwrap();
//! assert_eq!(config.constants().grid_size, 500);
//!
//! let mut marcher = TimeMarcher::new(&config).unwrap();
//! let metrics = marcher.run(&mut NullSink);
//! assert_eq!(metrics.steps, 10);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Parameters, derived constants, step ids, the sink trait |
//! | [`arena`] | `ripple-arena` | The three-slot field ring |
//! | [`space`] | `ripple-space` | Coordinate grid and periodic topology |
//! | [`engine`] | `ripple-engine` | Validation, initial condition, stencil, time marcher |
//! | [`io`] | `ripple-io` | Parameter files, CSV snapshots, output layout |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors and the [`types::SnapshotSink`] trait (`ripple-core`).
pub use ripple_core as types;

/// Role-indexed buffer ring (`ripple-arena`).
pub use ripple_arena as arena;

/// Grid coordinates and [`space::Ring1D`] neighbours (`ripple-space`).
pub use ripple_space as space;

/// Configuration, initial condition and [`engine::TimeMarcher`] (`ripple-engine`).
pub use ripple_engine as engine;

/// Parameter reader and [`io::CsvSink`] (`ripple-io`).
pub use ripple_io as io;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use ripple_core::{
        DerivedConstants, NullSink, PulseWindow, SimulationParameters, SnapshotSink,
        StabilityCheck, StepId,
    };

    // Errors
    pub use ripple_core::{ParameterError, SinkError};
    pub use ripple_engine::ConfigError;
    pub use ripple_io::{CsvError, ParameterSourceError};

    // Engine
    pub use ripple_engine::{RunMetrics, SimulationConfig, TimeMarcher, ValidatedConfig};

    // I/O
    pub use ripple_io::{read_parameters, CsvSink, OutputLayout, ParameterDefaults};
}
