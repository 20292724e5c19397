//! Integration test: a full reference run written to disk.
//!
//! Runs L=10, λ=2, c=1, r=0.5, T=0.1 into a temporary layout and checks
//! the file tree and that every stored snapshot reads back bit-identical
//! to an in-memory run.

use std::fs;

use ripple_core::StepId;
use ripple_engine::{SimulationConfig, TimeMarcher};
use ripple_io::{
    field_hash, read_parameters, CsvSink, OutputLayout, ParameterDefaults,
};
use ripple_test_utils::MemorySink;

const PARAMETERS: &str = "L 10\nlambda 2\nc 1\nr 0.5\nT 0.1\n";

#[test]
fn reference_run_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let layout = OutputLayout::new(dir.path());
    layout.create().unwrap();
    fs::write(layout.parameter_path(), PARAMETERS).unwrap();

    let params = read_parameters(&layout.parameter_path(), ParameterDefaults::Reject).unwrap();
    let config = SimulationConfig::new(params).validate().unwrap();

    let mut sink = CsvSink::new(layout.clone());
    let metrics = TimeMarcher::new(&config).unwrap().run(&mut sink);
    assert_eq!(metrics.steps, 10);
    assert_eq!(metrics.snapshot_failures, 0);
    assert_eq!(sink.files_written(), 11);

    let mut names: Vec<String> = fs::read_dir(layout.data_dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let mut expected: Vec<String> = (0..10).map(|k| format!("time_{k}.csv")).collect();
    expected.sort();
    assert_eq!(names, expected);
    assert!(layout.initial_path().is_file());
    assert!(layout.images_dir().is_dir());

    let mut memory = MemorySink::new();
    TimeMarcher::new(&config).unwrap().run(&mut memory);

    let initial = sink.read_initial().unwrap();
    assert_eq!(initial.len(), 500);
    assert_eq!(
        field_hash(&initial),
        field_hash(memory.initial.as_ref().unwrap())
    );
    for (id, field) in &memory.steps {
        let stored = sink.read_step(*id).unwrap();
        assert_eq!(field_hash(&stored), field_hash(field), "step {id}");
    }
    assert!(sink.read_step(StepId(10)).is_err());
}
