//! Spatial structures for the Ripple wave solver.
//!
//! - [`Grid`]: the physical coordinates of the N sample points on `[0, L]`.
//! - [`Ring1D`]: index topology with an always-wrap periodic boundary.
//!
//! The stencil only needs index neighbours and the initial condition only
//! needs coordinates, so the two are kept apart.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod ring1d;

pub use error::SpaceError;
pub use grid::{linspace, Grid};
pub use ring1d::Ring1D;
