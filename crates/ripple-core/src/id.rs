//! Strongly-typed step identifier.

use std::fmt;

/// Monotonically increasing step counter.
///
/// `StepId(k)` tags the snapshot emitted by the `k`-th iteration of the
/// time loop (zero-based). The pre-loop initial condition carries no
/// step id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl StepId {
    /// The first step of a run.
    pub const ZERO: StepId = StepId(0);

    /// The step that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
