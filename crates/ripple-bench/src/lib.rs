//! Benchmark profiles for the Ripple wave solver.
//!
//! - [`reference_profile`]: 500 points, 10 steps
//! - [`long_profile`]: 10K points, 1000 steps
//! - [`stress_profile`]: 100K points, 100 steps

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ripple_core::SimulationParameters;
use ripple_engine::{ConfigError, SimulationConfig, ValidatedConfig};

fn profile(values: [f64; 5]) -> Result<ValidatedConfig, ConfigError> {
    SimulationConfig::new(SimulationParameters::from_positional(values)).validate()
}

/// L=10, λ=2, c=1, r=0.5, T=0.1.
pub fn reference_profile() -> Result<ValidatedConfig, ConfigError> {
    profile([10.0, 2.0, 1.0, 0.5, 0.1])
}

/// L=100, λ=1, c=1, r=0.5, T=5: dx=0.01, dt=0.005.
pub fn long_profile() -> Result<ValidatedConfig, ConfigError> {
    profile([100.0, 1.0, 1.0, 0.5, 5.0])
}

/// L=1000, λ=1, c=1, r=0.9, T=0.9: dt=0.009.
pub fn stress_profile() -> Result<ValidatedConfig, ConfigError> {
    profile([1000.0, 1.0, 1.0, 0.9, 0.9])
}
