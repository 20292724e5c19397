//! Role-indexed field buffers for the Ripple wave solver.
//!
//! A leapfrog integrator needs three time levels at once. Rather than
//! swapping vectors around, [`FieldRing`] owns three equal-length slots
//! for the whole run and tracks which slot plays which [`Role`]:
//!
//! ```text
//! cursor = k      past = slot (k+2)%3   present = slot k   future = slot (k+1)%3
//! rotate()  ──►   past = slot k         present = slot (k+1)%3   future = slot (k+2)%3
//! ```
//!
//! Rotation is a single index increment; slot storage is allocated once
//! in [`FieldRing::new`] and never reallocated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ring;

pub use error::ArenaError;
pub use ring::{FieldRing, Role, StepBuffers};
