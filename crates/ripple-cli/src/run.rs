//! The end-to-end run: read parameters, build, march, write CSV.

use std::path::PathBuf;

use ripple::io::field_hash;
use ripple::prelude::*;
use tracing::{info, warn};

use crate::error::CliResult;

/// Options resolved from the command line.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    pub defaults: ParameterDefaults,
    pub stability: StabilityCheck,
}

/// Run one simulation under `opts.data_dir`.
pub fn execute(opts: &RunOptions) -> CliResult<RunMetrics> {
    let layout = OutputLayout::new(&opts.data_dir);
    layout.create()?;

    let parameters = read_parameters(&layout.parameter_path(), opts.defaults)?;
    let config = SimulationConfig {
        parameters,
        stability: opts.stability,
    }
    .validate()?;
    if opts.stability == StabilityCheck::Permissive && parameters.courant > 1.0 {
        warn!(courant = parameters.courant, "Courant number above 1, the run will diverge");
    }

    let mut marcher = TimeMarcher::new(&config)?;
    let mut sink = CsvSink::new(layout);
    let metrics = marcher.run(&mut sink);

    info!(
        files = sink.files_written(),
        dir = %sink.layout().data_dir().display(),
        final_hash = %format!("{:#018x}", field_hash(marcher.present())),
        "snapshots stored"
    );
    Ok(metrics)
}
