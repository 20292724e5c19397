//! Integration test: the reference run end to end.
//!
//! L=10, λ=2, c=1, r=0.5, T=0.1 gives dx=0.02, dt=0.01 and N=500. The run
//! must emit exactly ten 500-value snapshots, the first equal to the
//! initial condition and the second differing from it only around the
//! pulse.

use ripple_core::StepId;
use ripple_engine::{initialize, SimulationConfig, TimeMarcher};
use ripple_test_utils::{reference_parameters, MemorySink};

fn run_reference() -> (MemorySink, ripple_engine::RunMetrics) {
    let config = SimulationConfig::new(reference_parameters())
        .validate()
        .unwrap();
    let mut marcher = TimeMarcher::new(&config).unwrap();
    let mut sink = MemorySink::new();
    let metrics = marcher.run(&mut sink);
    (sink, metrics)
}

#[test]
fn derived_constants() {
    let config = SimulationConfig::new(reference_parameters())
        .validate()
        .unwrap();
    let k = config.constants();
    assert!((k.dx - 0.02).abs() < 1e-15);
    assert!((k.dt - 0.01).abs() < 1e-15);
    assert_eq!(k.grid_size, 500);
    assert_eq!(k.courant_sq, 0.25);
}

#[test]
fn ten_snapshots_of_five_hundred_values() {
    let (sink, metrics) = run_reference();
    assert_eq!(sink.steps.len(), 10);
    for (k, (id, field)) in sink.steps.iter().enumerate() {
        assert_eq!(*id, StepId(k as u64));
        assert_eq!(field.len(), 500);
    }
    assert_eq!(metrics.steps, 10);
    assert_eq!(metrics.snapshots_written, 10);
    assert_eq!(metrics.snapshot_failures, 0);
    assert!(metrics.initial_written);
}

#[test]
fn first_snapshot_equals_initial_condition() {
    let (sink, _) = run_reference();
    let initial = sink.initial.as_ref().unwrap();
    assert_eq!(sink.step(StepId(0)).unwrap(), initial.as_slice());
}

#[test]
fn second_snapshot_differs_only_near_pulse() {
    let config = SimulationConfig::new(reference_parameters())
        .validate()
        .unwrap();
    let state = initialize(&config).unwrap();
    let pulse = config.constants().pulse;
    let reach = 2.0 * state.grid.spacing();

    let (sink, _) = run_reference();
    let snap = sink.step(StepId(1)).unwrap();

    let mut changed = 0;
    for (i, (x, (a, b))) in state
        .grid
        .iter()
        .zip(state.field.iter().zip(snap))
        .enumerate()
    {
        if a != b {
            changed += 1;
            assert!(
                x >= pulse.lower - reach && x <= pulse.upper + reach,
                "point {i} at x={x} changed outside the pulse"
            );
            assert!(i != 0 && i != 499);
        }
    }
    assert!(changed > 0);
}

#[test]
fn peak_never_exceeds_initial_height() {
    let (sink, metrics) = run_reference();
    assert!(metrics.peak_amplitude <= 1.0 + 1e-12);
    assert_eq!(metrics.peak_amplitude, sink.peak_amplitude());
}
