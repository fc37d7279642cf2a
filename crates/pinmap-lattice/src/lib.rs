//! Triangular-lattice geometry for pinmap.
//!
//! Two concerns live here:
//!
//! - [`transform`]: the pure forward/inverse map between discrete lattice
//!   indices and world positions, under the global [`ViewTransform`];
//! - [`generate`]: filling an annulus with non-overlapping lattice points
//!   to seed a new arrangement.
//!
//! [`ViewTransform`]: pinmap_core::ViewTransform

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod transform;

pub use error::GenerateError;
pub use generate::generate;
pub use transform::{coordinate_of, index_of};
