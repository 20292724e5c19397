//! Physical parameters and the discretization constants derived from them.
//!
//! [`SimulationParameters`] holds the five raw inputs in their fixed
//! positional order (L, λ, c, r, T). [`SimulationParameters::derive`]
//! validates them and produces [`DerivedConstants`]:
//!
//! ```text
//! dx    = 0.01 · λ
//! dt    = r · dx / c
//! N     = floor(L / dx)
//! r²    = r · r
//! pulse = [0.3 L, 0.3 L + λ/2], centre = midpoint, spread = 5 · dx
//! ```

use crate::error::ParameterError;

/// Grid spacing as a fraction of the wavelength.
pub const SPACING_PER_WAVELENGTH: f64 = 0.01;

/// Start of the initial pulse as a fraction of the domain length.
pub const PULSE_START_FRACTION: f64 = 0.3;

/// Gaussian spread of the initial pulse, in grid spacings.
pub const PULSE_SPREAD_CELLS: f64 = 5.0;

/// Number of positional parameters consumed from a parameter source.
pub const PARAMETER_COUNT: usize = 5;

/// Smallest grid the periodic stencil can run on.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest accepted grid: 2^28 points, 2 GiB per time level.
pub const MAX_GRID_SIZE: usize = 1 << 28;

/// Whether [`SimulationParameters::derive`] rejects Courant numbers above 1.
///
/// The leapfrog scheme is only conditionally stable. `Enforce` fails fast
/// with [`ParameterError::StabilityViolation`]; `Permissive` accepts any
/// positive Courant number and lets the run diverge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StabilityCheck {
    /// Reject `r > 1`.
    #[default]
    Enforce,
    /// Accept any `r > 0`.
    Permissive,
}

/// The five raw physical inputs of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    /// Domain length L.
    pub domain_length: f64,
    /// Wavelength λ of the initial pulse; sets the grid spacing.
    pub wavelength: f64,
    /// Wave speed c.
    pub wave_speed: f64,
    /// Courant number r = c·dt/dx.
    pub courant: f64,
    /// Total simulated time T.
    pub total_time: f64,
}

/// Initial pulse geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseWindow {
    /// Left edge of the window (inclusive).
    pub lower: f64,
    /// Right edge of the window (inclusive).
    pub upper: f64,
    /// Centre of the Gaussian.
    pub center: f64,
    /// Gaussian spread (standard deviation).
    pub spread: f64,
}

impl PulseWindow {
    /// Whether `x` lies inside `[lower, upper]`.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

/// Discretization constants, computed once per run and read-only after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedConstants {
    /// Grid spacing dx.
    pub dx: f64,
    /// Timestep dt.
    pub dt: f64,
    /// Number of grid points N.
    pub grid_size: usize,
    /// Squared Courant number, the single coefficient of the stencil.
    pub courant_sq: f64,
    /// Initial pulse geometry.
    pub pulse: PulseWindow,
}

impl SimulationParameters {
    /// Build parameters from values in positional order (L, λ, c, r, T).
    pub fn from_positional(values: [f64; PARAMETER_COUNT]) -> Self {
        let [domain_length, wavelength, wave_speed, courant, total_time] = values;
        Self {
            domain_length,
            wavelength,
            wave_speed,
            courant,
            total_time,
        }
    }

    /// Values in positional order (L, λ, c, r, T).
    pub fn to_positional(&self) -> [f64; PARAMETER_COUNT] {
        [
            self.domain_length,
            self.wavelength,
            self.wave_speed,
            self.courant,
            self.total_time,
        ]
    }

    /// Validate the parameters and compute the discretization constants.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::InvalidParameter`] if L, λ, c or r is not finite
    ///   and positive, or T is negative or not finite.
    /// - [`ParameterError::StabilityViolation`] if `r > 1` under
    ///   [`StabilityCheck::Enforce`].
    /// - [`ParameterError::InvalidGridSize`] if `floor(L / dx)` is below
    ///   [`MIN_GRID_SIZE`] or above [`MAX_GRID_SIZE`].
    pub fn derive(&self, stability: StabilityCheck) -> Result<DerivedConstants, ParameterError> {
        positive("domain_length", self.domain_length)?;
        positive("wavelength", self.wavelength)?;
        positive("wave_speed", self.wave_speed)?;
        positive("courant", self.courant)?;
        if !(self.total_time.is_finite() && self.total_time >= 0.0) {
            return Err(ParameterError::InvalidParameter {
                name: "total_time",
                value: self.total_time,
                requirement: "finite and >= 0",
            });
        }
        if stability == StabilityCheck::Enforce && self.courant > 1.0 {
            return Err(ParameterError::StabilityViolation {
                courant: self.courant,
            });
        }

        let dx = self.wavelength * SPACING_PER_WAVELENGTH;
        let dt = self.courant * dx / self.wave_speed;

        let points = (self.domain_length / dx).floor();
        // `as` saturates, so an absurdly fine grid still reports a size.
        let grid_size = points as usize;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ParameterError::InvalidGridSize { grid_size });
        }

        let lower = self.domain_length * PULSE_START_FRACTION;
        let upper = lower + self.wavelength / 2.0;

        Ok(DerivedConstants {
            dx,
            dt,
            grid_size,
            courant_sq: self.courant * self.courant,
            pulse: PulseWindow {
                lower,
                upper,
                center: (lower + upper) / 2.0,
                spread: dx * PULSE_SPREAD_CELLS,
            },
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidParameter {
            name,
            value,
            requirement: "finite and > 0",
        })
    }
}
