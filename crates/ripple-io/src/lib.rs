//! File I/O for the Ripple wave solver.
//!
//! Everything the time marcher treats as an external collaborator:
//!
//! - [`params`]: the `<name> <value>` parameter file reader.
//! - [`layout`]: the output directory tree.
//! - [`csv`]: one-line comma-separated field codec.
//! - [`sink`]: [`CsvSink`], a [`SnapshotSink`](ripple_core::SnapshotSink)
//!   writing one file per step, and the matching readers.
//! - [`hash`]: FNV-1a hashing of field values for quick comparisons.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod csv;
pub mod error;
pub mod hash;
pub mod layout;
pub mod params;
pub mod sink;

pub use csv::{decode_line, encode_line};
pub use error::{CsvError, ParameterSourceError};
pub use hash::field_hash;
pub use layout::OutputLayout;
pub use params::{parse_parameters, read_parameters, ParameterDefaults};
pub use sink::CsvSink;
