//! Test sinks and parameter fixtures for Ripple development.
//!
//! Provides in-memory implementations of [`SnapshotSink`] so the time
//! marcher can be exercised without touching the filesystem, plus the
//! parameter presets shared by the workspace's tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use ripple_core::{SinkError, SnapshotSink, StepId};

pub use fixtures::{reference_parameters, small_constants, unstable_parameters};

/// Collects every snapshot in memory.
///
/// `steps` keeps emission order, so tests can assert on step ids as well
/// as contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySink {
    pub initial: Option<Vec<f64>>,
    pub steps: Vec<(StepId, Vec<f64>)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field stored for `step`, if any.
    pub fn step(&self, step: StepId) -> Option<&[f64]> {
        self.steps
            .iter()
            .find(|(id, _)| *id == step)
            .map(|(_, field)| field.as_slice())
    }

    /// Largest absolute value across every stored snapshot.
    pub fn peak_amplitude(&self) -> f64 {
        self.initial
            .iter()
            .chain(self.steps.iter().map(|(_, f)| f))
            .flatten()
            .fold(0.0f64, |m, v| m.max(v.abs()))
    }
}

impl SnapshotSink for MemorySink {
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError> {
        self.initial = Some(field.to_vec());
        Ok(())
    }

    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError> {
        self.steps.push((step, field.to_vec()));
        Ok(())
    }
}

/// Rejects writes for a chosen set of steps and stores the rest.
#[derive(Clone, Debug, Default)]
pub struct FailingSink {
    fail_initial: bool,
    fail_steps: BTreeSet<u64>,
    pub inner: MemorySink,
    pub attempts: u64,
}

impl FailingSink {
    /// Fail on each listed step index.
    pub fn on_steps(steps: impl IntoIterator<Item = u64>) -> Self {
        Self {
            fail_steps: steps.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Also fail the initial-condition write.
    pub fn failing_initial(mut self) -> Self {
        self.fail_initial = true;
        self
    }
}

impl SnapshotSink for FailingSink {
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError> {
        if self.fail_initial {
            return Err(SinkError::write_failed(None, "injected failure"));
        }
        self.inner.write_initial(field)
    }

    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError> {
        self.attempts += 1;
        if self.fail_steps.contains(&step.0) {
            return Err(SinkError::write_failed(Some(step), "injected failure"));
        }
        self.inner.write_step(step, field)
    }
}
