//! Grid and initial condition construction.

use ripple_core::PulseWindow;
use ripple_space::Grid;
use tracing::info;

use crate::config::{ConfigError, ValidatedConfig};

/// The grid and the field at `t = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialState {
    /// Sample coordinates over `[0, L]`.
    pub grid: Grid,
    /// Initial field values, one per grid point.
    pub field: Vec<f64>,
}

/// A Gaussian pulse truncated to `pulse`'s window.
///
/// `exp(-(x - center)² / (2 spread²))` for `lower <= x <= upper`, exactly
/// `0.0` elsewhere.
pub fn gaussian_pulse(grid: &Grid, pulse: &PulseWindow) -> Vec<f64> {
    let two_var = 2.0 * pulse.spread * pulse.spread;
    grid.iter()
        .map(|x| {
            if pulse.contains(x) {
                (-(x - pulse.center).powi(2) / two_var).exp()
            } else {
                0.0
            }
        })
        .collect()
}

/// Build the grid and the initial Gaussian field for a validated config.
pub fn initialize(config: &ValidatedConfig) -> Result<InitialState, ConfigError> {
    let k = config.constants();
    let grid = Grid::new(config.parameters().domain_length, k.grid_size)?;
    info!(
        lower = k.pulse.lower,
        upper = k.pulse.upper,
        spread = k.pulse.spread,
        "setting Gaussian pulse as initial condition"
    );
    let field = gaussian_pulse(&grid, &k.pulse);
    Ok(InitialState { grid, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use proptest::prelude::*;
    use ripple_core::SimulationParameters;
    use ripple_test_utils::reference_parameters;

    fn reference_state() -> (ValidatedConfig, InitialState) {
        let config = SimulationConfig::new(reference_parameters())
            .validate()
            .unwrap();
        let state = initialize(&config).unwrap();
        (config, state)
    }

    #[test]
    fn field_matches_grid() {
        let (_, state) = reference_state();
        assert_eq!(state.field.len(), 500);
        assert_eq!(state.grid.len(), 500);
    }

    #[test]
    fn peak_near_centre() {
        let (config, state) = reference_state();
        let centre = config.constants().pulse.center;
        let (argmax, &max) = state
            .field
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .unwrap();
        assert!((state.grid.coords()[argmax] - centre).abs() <= state.grid.spacing());
        assert!(max > 0.99 && max <= 1.0);
    }

    #[test]
    fn single_point_window() {
        let grid = Grid::new(4.0, 5).unwrap();
        let pulse = PulseWindow {
            lower: 2.0,
            upper: 2.0,
            center: 2.0,
            spread: 1.0,
        };
        assert_eq!(gaussian_pulse(&grid, &pulse), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    proptest! {
        #[test]
        fn zero_outside_window_non_negative_inside(
            length in 1.0f64..20.0,
            wavelength in 0.2f64..3.0,
        ) {
            let params = SimulationParameters::from_positional([length, wavelength, 1.0, 0.5, 0.0]);
            let config = SimulationConfig::new(params).validate().unwrap();
            let pulse = config.constants().pulse;
            let state = initialize(&config).unwrap();
            for (x, u) in state.grid.iter().zip(&state.field) {
                prop_assert!(*u >= 0.0);
                if x < pulse.lower || x > pulse.upper {
                    prop_assert_eq!(*u, 0.0);
                }
            }
        }
    }
}
