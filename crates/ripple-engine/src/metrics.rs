//! Run-level metrics for the time marcher.
//!
//! [`RunMetrics`] accumulates over a run and is returned by
//! [`TimeMarcher::run()`](crate::TimeMarcher::run).

/// Counters and timings collected while marching.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    /// Iterations of the time loop completed.
    pub steps: u64,
    /// Simulated time reached, `steps · dt`.
    pub elapsed_time: f64,
    /// Step snapshots the sink accepted.
    pub snapshots_written: u64,
    /// Step snapshots the sink rejected (logged, not retried).
    pub snapshot_failures: u64,
    /// Whether the sink accepted the pre-loop initial condition.
    pub initial_written: bool,
    /// Largest absolute value seen in any emitted field.
    pub peak_amplitude: f64,
    /// Wall-clock time spent inside `run()`, in microseconds.
    pub wall_us: u64,
}

impl RunMetrics {
    /// Fold one emitted field into the peak amplitude.
    pub(crate) fn observe(&mut self, field: &[f64]) {
        let peak = field.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        self.peak_amplitude = self.peak_amplitude.max(peak);
    }
}
