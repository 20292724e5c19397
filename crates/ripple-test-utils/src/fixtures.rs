//! Parameter presets.

use ripple_core::{DerivedConstants, PulseWindow, SimulationParameters};

/// L=10, λ=2, c=1, r=0.5, T=0.1: dx=0.02, dt=0.01, N=500, ten steps.
pub fn reference_parameters() -> SimulationParameters {
    SimulationParameters::from_positional([10.0, 2.0, 1.0, 0.5, 0.1])
}

/// The reference set with a Courant number above the stability limit.
pub fn unstable_parameters() -> SimulationParameters {
    SimulationParameters::from_positional([10.0, 2.0, 1.0, 1.5, 0.1])
}

/// Hand-built constants for an `n`-point grid with unit wave speed and
/// `dx = 0.1`, bypassing parameter derivation.
pub fn small_constants(n: usize, courant_sq: f64) -> DerivedConstants {
    let dx = 0.1;
    DerivedConstants {
        dx,
        dt: courant_sq.sqrt() * dx,
        grid_size: n,
        courant_sq,
        pulse: PulseWindow {
            lower: 0.0,
            upper: 0.0,
            center: 0.0,
            spread: 5.0 * dx,
        },
    }
}
