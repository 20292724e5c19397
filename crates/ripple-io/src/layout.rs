//! Output directory layout.
//!
//! ```text
//! <root>/
//! ├── simulation_Parameters.txt   input
//! ├── InitialConditions.csv       pre-loop field
//! ├── CSV_data/time_<k>.csv       one file per step
//! └── Images/                     plots, written by external tools
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ripple_core::StepId;

/// Default root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "./data";

const PARAMETER_FILE: &str = "simulation_Parameters.txt";
const INITIAL_FILE: &str = "InitialConditions.csv";
const DATA_DIR: &str = "CSV_data";
const IMAGES_DIR: &str = "Images";

/// Paths of every input and output under one root directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at `root`. Nothing is created until [`create`](Self::create).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parameter file read at startup.
    pub fn parameter_path(&self) -> PathBuf {
        self.root.join(PARAMETER_FILE)
    }

    /// File holding the initial condition.
    pub fn initial_path(&self) -> PathBuf {
        self.root.join(INITIAL_FILE)
    }

    /// Directory of per-step snapshot files.
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Directory reserved for plots.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Snapshot file for `step`: `CSV_data/time_<k>.csv`.
    pub fn step_path(&self, step: StepId) -> PathBuf {
        self.data_dir().join(format!("time_{}.csv", step.0))
    }

    /// Create the data and image directories (and the root). Existing
    /// directories are left alone.
    pub fn create(&self) -> io::Result<()> {
        fs::create_dir_all(self.data_dir())?;
        fs::create_dir_all(self.images_dir())
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let layout = OutputLayout::new("/tmp/run");
        assert_eq!(
            layout.parameter_path(),
            Path::new("/tmp/run/simulation_Parameters.txt")
        );
        assert_eq!(layout.initial_path(), Path::new("/tmp/run/InitialConditions.csv"));
        assert_eq!(
            layout.step_path(StepId(12)),
            Path::new("/tmp/run/CSV_data/time_12.csv")
        );
    }

    #[test]
    fn default_root_is_data() {
        assert_eq!(OutputLayout::default().root(), Path::new("./data"));
    }

    #[test]
    fn create_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path().join("nested/data"));
        layout.create().unwrap();
        layout.create().unwrap();
        assert!(layout.data_dir().is_dir());
        assert!(layout.images_dir().is_dir());
    }
}
