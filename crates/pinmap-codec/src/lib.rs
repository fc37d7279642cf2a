//! On-disk formats for pinmap arrangements.
//!
//! Two formats live here:
//!
//! - the **arrangement file**: a line-oriented, comma-separated text file
//!   holding the lattice parameters, the view transform, and every
//!   placement — reading it back reproduces the arrangement exactly;
//! - the **coordinate export**: a directory of per-type `x,y` files with
//!   the current view baked in, for downstream tools that consume world
//!   positions rather than lattice indices.
//!
//! # Format
//!
//! ```text
//! pin_radius,step,inner_radius,outer_radius[,center_x,center_y,rotation_deg]
//! i,j,type
//! i,j,type
//! ...
//! ```
//!
//! The three trailing header fields are optional on read (older files
//! predate the view transform and default to the identity); writing
//! always emits all seven. Placement lines may appear in any order;
//! a duplicated site keeps its last line.
//!
//! [`read_arrangement`]/[`write_arrangement`] are generic over
//! `io::BufRead`/`io::Write` so tests run against in-memory buffers;
//! [`open_path`]/[`save_path`] wrap them for files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::{CodecError, ExportError};
pub use export::export_coordinates;
pub use reader::{open_path, read_arrangement};
pub use types::ArrangementRecord;
pub use writer::{save_path, write_arrangement};

/// Canonical extension of arrangement files.
pub const FILE_EXT: &str = "pin";

/// Extension of the marked-coordinate export file.
pub const MARKED_EXT: &str = "mrkd";
