//! Core vocabulary types for the pinmap lattice arrangement model.
//!
//! This crate defines the types every other pinmap crate speaks in:
//! [`PinIndex`] (a discrete lattice site), [`PinType`] (a non-zero pin
//! category), [`Point`] (world-space position), [`LatticeParams`]
//! (validated physical parameters), and [`ViewTransform`] (the global
//! rotation/translation applied at coordinate-read time).
//!
//! It has no dependencies and no I/O; everything here is plain data with
//! validation at construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod params;
pub mod point;
pub mod view;

pub use error::ConfigError;
pub use index::{PinIndex, PinType};
pub use params::{LatticeParams, COS_60, SIN_60};
pub use point::Point;
pub use view::ViewTransform;
