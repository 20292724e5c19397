//! The snapshot sink capability.

use crate::error::SinkError;
use crate::id::StepId;

/// Destination for the field states reached by the time marcher.
///
/// The marcher calls [`write_initial`](SnapshotSink::write_initial) once
/// before the loop and [`write_step`](SnapshotSink::write_step) once per
/// iteration with strictly increasing step ids. Each call blocks until the
/// snapshot is stored or the failure is known. Implementations must not
/// retain the slice; it is the marcher's live Present buffer.
pub trait SnapshotSink {
    /// Store the pre-loop initial condition.
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError>;

    /// Store the field reached at step `step`.
    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError>;
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError> {
        (**self).write_initial(field)
    }

    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError> {
        (**self).write_step(step, field)
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for Box<S> {
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError> {
        (**self).write_initial(field)
    }

    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError> {
        (**self).write_step(step, field)
    }
}

/// A sink that discards everything. Useful for benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn write_initial(&mut self, _field: &[f64]) -> Result<(), SinkError> {
        Ok(())
    }

    fn write_step(&mut self, _step: StepId, _field: &[f64]) -> Result<(), SinkError> {
        Ok(())
    }
}
