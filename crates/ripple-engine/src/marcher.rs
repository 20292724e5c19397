//! Time marcher: the single-threaded leapfrog loop.
//!
//! [`TimeMarcher`] owns the three field buffers (through [`FieldRing`]) and
//! advances them one step per [`step()`](TimeMarcher::step) call. Each
//! iteration, in order:
//!
//! 1. advances the step counter's elapsed time by `dt`,
//! 2. rotates buffer roles (Future → Present → Past → Future),
//! 3. emits the new Present to the [`SnapshotSink`],
//! 4. sweeps the stencil into the recycled Future slot.
//!
//! The sink always sees the field actually reached at the step's time,
//! never a partially updated buffer.

use std::time::Instant;

use ripple_arena::FieldRing;
use ripple_core::{DerivedConstants, SnapshotSink, StepId};
use ripple_space::Ring1D;
use tracing::{debug, info, warn};

use crate::config::{ConfigError, ValidatedConfig};
use crate::initial::initialize;
use crate::metrics::RunMetrics;
use crate::stencil::leapfrog_step;

// ── Phase / MarchState ─────────────────────────────────────────────

/// Whether the loop still has work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Elapsed time is below the total.
    Advancing,
    /// Elapsed time reached the total. Terminal.
    Done,
}

/// Explicit loop state owned by the marcher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarchState {
    step: StepId,
    elapsed: f64,
    phase: Phase,
}

impl MarchState {
    /// Index the next iteration will emit under; equals steps completed.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// Simulated time reached, `steps · dt`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Outcome of one [`TimeMarcher::step()`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// Index the snapshot was emitted under.
    pub step: StepId,
    /// Simulated time of the emitted snapshot.
    pub elapsed: f64,
    /// Whether the sink accepted the snapshot.
    pub snapshot_written: bool,
}

// ── TimeMarcher ────────────────────────────────────────────────────

/// Leapfrog integrator over a periodic 1D grid.
///
/// # Examples
///
/// ```
/// use ripple_core::{NullSink, SimulationParameters};
/// use ripple_engine::{SimulationConfig, TimeMarcher};
///
/// let params = SimulationParameters::from_positional([10.0, 2.0, 1.0, 0.5, 0.1]);
/// let config = SimulationConfig::new(params).validate().unwrap();
/// let mut marcher = TimeMarcher::new(&config).unwrap();
///
/// let metrics = marcher.run(&mut NullSink);
/// assert_eq!(metrics.steps, 10);
/// assert!(marcher.is_done());
/// ```
#[derive(Debug)]
pub struct TimeMarcher {
    ring: FieldRing,
    topology: Ring1D,
    constants: DerivedConstants,
    total_time: f64,
    state: MarchState,
    metrics: RunMetrics,
    initial_emitted: bool,
}

impl TimeMarcher {
    /// Build the grid and Gaussian initial condition for `config` and set up
    /// a marcher at `t = 0`.
    pub fn new(config: &ValidatedConfig) -> Result<Self, ConfigError> {
        let p = config.parameters();
        let k = config.constants();
        info!(
            domain_length = p.domain_length,
            wavelength = p.wavelength,
            wave_speed = p.wave_speed,
            courant = p.courant,
            total_time = p.total_time,
            dx = k.dx,
            dt = k.dt,
            grid_size = k.grid_size,
            "simulation parameters"
        );
        let state = initialize(config)?;
        Self::from_initial(*k, config.total_time(), state.field)
    }

    /// Set up a marcher from an explicit initial field.
    ///
    /// Past, Present and Future all start equal to `field`, so the first
    /// emitted snapshot is the initial condition itself.
    pub fn from_initial(
        constants: DerivedConstants,
        total_time: f64,
        field: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if field.len() != constants.grid_size {
            return Err(ConfigError::FieldLength {
                expected: constants.grid_size,
                found: field.len(),
            });
        }
        let topology = Ring1D::new(constants.grid_size)?;
        let ring = FieldRing::new(field)?;
        let phase = if reached(0.0, total_time) {
            Phase::Done
        } else {
            Phase::Advancing
        };
        Ok(Self {
            ring,
            topology,
            constants,
            total_time,
            state: MarchState {
                step: StepId::ZERO,
                elapsed: 0.0,
                phase,
            },
            metrics: RunMetrics::default(),
            initial_emitted: false,
        })
    }

    /// Current loop state.
    pub fn state(&self) -> &MarchState {
        &self.state
    }

    /// Whether elapsed time has reached the total.
    pub fn is_done(&self) -> bool {
        self.state.phase == Phase::Done
    }

    /// The field at the current elapsed time.
    pub fn present(&self) -> &[f64] {
        self.ring.present()
    }

    /// The underlying buffer ring.
    pub fn ring(&self) -> &FieldRing {
        &self.ring
    }

    /// Discretization constants in use.
    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Metrics accumulated so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Send the pre-loop initial condition to `sink`.
    ///
    /// Only meaningful before the first step; later calls, and calls after
    /// a previous emission, do nothing and return `false`.
    pub fn emit_initial<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.initial_emitted || self.state.step != StepId::ZERO {
            return false;
        }
        self.initial_emitted = true;
        self.metrics.observe(self.ring.present());
        match sink.write_initial(self.ring.present()) {
            Ok(()) => {
                self.metrics.initial_written = true;
                true
            }
            Err(e) => {
                warn!(error = %e, "initial condition not stored");
                false
            }
        }
    }

    /// Run one iteration. Returns `None` once the marcher is done.
    ///
    /// A sink failure is logged and counted; the step still completes.
    pub fn step<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> Option<StepReport> {
        if self.is_done() {
            return None;
        }
        let step = self.state.step;
        let elapsed = (step.0 + 1) as f64 * self.constants.dt;

        self.ring.rotate();

        self.metrics.observe(self.ring.present());
        let snapshot_written = match sink.write_step(step, self.ring.present()) {
            Ok(()) => {
                self.metrics.snapshots_written += 1;
                true
            }
            Err(e) => {
                warn!(step = step.0, error = %e, "snapshot not stored, continuing");
                self.metrics.snapshot_failures += 1;
                false
            }
        };

        let bufs = self.ring.split();
        leapfrog_step(
            bufs.past,
            bufs.present,
            bufs.future,
            &self.topology,
            self.constants.courant_sq,
        );

        self.state.step = step.next();
        self.state.elapsed = elapsed;
        if reached(elapsed, self.total_time) {
            self.state.phase = Phase::Done;
        }
        self.metrics.steps = self.state.step.0;
        self.metrics.elapsed_time = elapsed;

        debug!(step = step.0, time = elapsed, "step");

        Some(StepReport {
            step,
            elapsed,
            snapshot_written,
        })
    }

    /// Emit the initial condition (if not yet emitted) and step until done.
    pub fn run<S: SnapshotSink + ?Sized>(&mut self, sink: &mut S) -> RunMetrics {
        let start = Instant::now();
        info!(
            grid_size = self.constants.grid_size,
            dt = self.constants.dt,
            total_time = self.total_time,
            "starting time march"
        );

        self.emit_initial(sink);
        while self.step(sink).is_some() {}

        self.metrics.wall_us += start.elapsed().as_micros() as u64;
        info!(
            steps = self.metrics.steps,
            elapsed = self.metrics.elapsed_time,
            snapshot_failures = self.metrics.snapshot_failures,
            wall_us = self.metrics.wall_us,
            "simulation finished"
        );
        self.metrics.clone()
    }
}

/// Elapsed time is `steps · dt`, never a running sum, so exact multiples of
/// `dt` stop on the right step.
fn reached(elapsed: f64, total_time: f64) -> bool {
    elapsed >= total_time
}
