//! CSV directory sink.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ripple_core::{SinkError, SnapshotSink, StepId};
use tracing::trace;

use crate::csv::{decode_line, write_line};
use crate::error::CsvError;
use crate::layout::OutputLayout;

/// Writes each snapshot to its own CSV file under an [`OutputLayout`].
///
/// The initial condition goes to `InitialConditions.csv`, step `k` to
/// `CSV_data/time_<k>.csv`. Existing files are overwritten. Directories
/// must already exist (see [`OutputLayout::create`]).
#[derive(Clone, Debug)]
pub struct CsvSink {
    layout: OutputLayout,
    files_written: u64,
}

impl CsvSink {
    /// Sink writing under `layout`.
    pub fn new(layout: OutputLayout) -> Self {
        Self {
            layout,
            files_written: 0,
        }
    }

    /// The layout in use.
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Number of files successfully written.
    pub fn files_written(&self) -> u64 {
        self.files_written
    }

    /// Load the snapshot stored for `step`.
    pub fn read_step(&self, step: StepId) -> Result<Vec<f64>, CsvError> {
        read_field(&self.layout.step_path(step))
    }

    /// Load the stored initial condition.
    pub fn read_initial(&self) -> Result<Vec<f64>, CsvError> {
        read_field(&self.layout.initial_path())
    }
}

fn write_field(path: &Path, field: &[f64]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_line(&mut out, field)?;
    out.flush()
}

fn read_field(path: &Path) -> Result<Vec<f64>, CsvError> {
    let text = fs::read_to_string(path)?;
    decode_line(text.lines().next().unwrap_or(""))
}

impl SnapshotSink for CsvSink {
    fn write_initial(&mut self, field: &[f64]) -> Result<(), SinkError> {
        let path = self.layout.initial_path();
        write_field(&path, field)
            .map_err(|e| SinkError::write_failed(None, format!("{}: {e}", path.display())))?;
        self.files_written += 1;
        trace!(path = %path.display(), "initial condition written");
        Ok(())
    }

    fn write_step(&mut self, step: StepId, field: &[f64]) -> Result<(), SinkError> {
        let path = self.layout.step_path(step);
        write_field(&path, field)
            .map_err(|e| SinkError::write_failed(Some(step), format!("{}: {e}", path.display())))?;
        self.files_written += 1;
        trace!(path = %path.display(), "snapshot written");
        Ok(())
    }
}
