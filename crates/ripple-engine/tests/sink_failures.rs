//! Integration test: snapshot write failures are local.
//!
//! A sink that rejects some steps must not abort the run or change the
//! computed field; each rejection is counted once and never retried.

use ripple_core::StepId;
use ripple_engine::{SimulationConfig, TimeMarcher};
use ripple_test_utils::{reference_parameters, FailingSink, MemorySink};

fn marcher() -> TimeMarcher {
    let config = SimulationConfig::new(reference_parameters())
        .validate()
        .unwrap();
    TimeMarcher::new(&config).unwrap()
}

#[test]
fn run_continues_past_failures() {
    let mut m = marcher();
    let mut sink = FailingSink::on_steps([2, 5]);
    let metrics = m.run(&mut sink);

    assert_eq!(metrics.steps, 10);
    assert_eq!(metrics.snapshots_written, 8);
    assert_eq!(metrics.snapshot_failures, 2);
    assert_eq!(sink.attempts, 10);
    assert!(sink.inner.step(StepId(2)).is_none());
    assert!(sink.inner.step(StepId(3)).is_some());
}

#[test]
fn failures_do_not_change_the_field() {
    let mut failing = marcher();
    failing.run(&mut FailingSink::on_steps(0..10));

    let mut clean = marcher();
    clean.run(&mut MemorySink::new());

    assert_eq!(failing.present(), clean.present());
}

#[test]
fn initial_failure_is_recorded() {
    let mut m = marcher();
    let mut sink = FailingSink::default().failing_initial();
    let metrics = m.run(&mut sink);
    assert!(!metrics.initial_written);
    assert!(sink.inner.initial.is_none());
    assert_eq!(metrics.snapshots_written, 10);
}
