//! Ripple CLI: run a 1D wave simulation from a parameter file.
//!
//! Reads `<data-dir>/simulation_Parameters.txt`, then writes
//! `<data-dir>/InitialConditions.csv` and one `CSV_data/time_<k>.csv` per
//! step.
//!
//! # Examples
//!
//! ```bash
//! # Run with ./data and the default (lenient) parameter reader
//! ripple
//!
//! # Fail on a short parameter file and log every step
//! ripple --data-dir runs/a --strict-params -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ripple::io::layout::DEFAULT_ROOT;
use ripple::prelude::{ParameterDefaults, StabilityCheck};
use tracing_subscriber::EnvFilter;

mod error;
mod run;

use run::RunOptions;

/// Ripple - explicit leapfrog solver for the 1D scalar wave equation
#[derive(Parser)]
#[command(name = "ripple")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the parameter file and receiving the output
    #[arg(short, long, default_value = DEFAULT_ROOT)]
    data_dir: PathBuf,

    /// Fail if fewer than five parameters parse instead of zero-filling
    #[arg(long)]
    strict_params: bool,

    /// Accept Courant numbers above 1
    #[arg(long)]
    allow_unstable: bool,

    /// Enable verbose output (one line per step)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> RunOptions {
        RunOptions {
            data_dir: self.data_dir.clone(),
            defaults: if self.strict_params {
                ParameterDefaults::Reject
            } else {
                ParameterDefaults::ZeroFill
            },
            stability: if self.allow_unstable {
                StabilityCheck::Permissive
            } else {
                StabilityCheck::Enforce
            },
        }
    }
}

/// Level requested by `-v`/`-q`, if either was given.
fn flag_level(verbose: bool, quiet: bool) -> Option<&'static str> {
    if quiet {
        Some("error")
    } else if verbose {
        Some("debug")
    } else {
        None
    }
}

/// `-v`/`-q` win; otherwise `RUST_LOG` applies, falling back to `info`.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = match flag_level(verbose, quiet) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run::execute(&cli.options()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["ripple"]);
        let opts = cli.options();
        assert_eq!(opts.data_dir, PathBuf::from("./data"));
        assert_eq!(opts.defaults, ParameterDefaults::ZeroFill);
        assert_eq!(opts.stability, StabilityCheck::Enforce);
    }

    #[test]
    fn flags_map_to_policies() {
        let cli = Cli::parse_from([
            "ripple",
            "--data-dir",
            "out",
            "--strict-params",
            "--allow-unstable",
        ]);
        let opts = cli.options();
        assert_eq!(opts.data_dir, PathBuf::from("out"));
        assert_eq!(opts.defaults, ParameterDefaults::Reject);
        assert_eq!(opts.stability, StabilityCheck::Permissive);
    }

    #[test]
    fn flags_select_log_level() {
        assert_eq!(flag_level(false, false), None);
        assert_eq!(flag_level(true, false), Some("debug"));
        assert_eq!(flag_level(false, true), Some("error"));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["ripple", "-v", "-q"]).is_err());
    }
}
