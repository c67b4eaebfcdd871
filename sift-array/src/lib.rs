//! Containers that Sift selects rows from.
//!
//! A [`Container`] is any columnar value with a row count that can be sliced, taken from and
//! filtered. All data movement is delegated to the Arrow kernels; this crate only adapts Arrow
//! arrays and record batches to the [`Container`] interface and validates the arguments handed
//! to those kernels.

pub use container::*;

pub mod compute;
mod container;
mod record_batch;
