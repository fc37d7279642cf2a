//! Pinmap: a pin arrangement model on a triangular lattice confined to an
//! annulus.
//!
//! This is the top-level facade crate. It composes the sub-crates into
//! [`Arrangement`] — the unit an interactive shell creates, edits, saves,
//! and exports — and re-exports the public API, so adding `pinmap` as a
//! single dependency is sufficient.
//!
//! The shell owns windows, mice, and pixels; this crate owns the model:
//! index↔world coordinate mapping, annulus generation, per-type placement
//! with its one-owner invariant, marking, and the on-disk formats.
//!
//! # Quick start
//!
//! ```
//! use pinmap::{Arrangement, LatticeParams, PinType};
//!
//! // Fill a disk of radius 5 with pins of radius 1 on a step-3 lattice.
//! let params = LatticeParams::new(1.0, 3.0, 0.0, 5.0).unwrap();
//! let mut arrangement = Arrangement::generate(params).unwrap();
//! assert!(arrangement.pin_count() > 0);
//!
//! // Hit-test a click and retype that pin.
//! let site = arrangement.index_of(2.5, 1.4);
//! arrangement.add(site, PinType::new(2).unwrap());
//!
//! // Rotate the whole layout; indices stay put, coordinates follow.
//! arrangement.rotate(30.0);
//! let world = arrangement.coordinate_of(site);
//! assert_eq!(arrangement.index_of(world.x, world.y), site);
//! ```
//!
//! # Modules
//!
//! Each module aliases a sub-crate, for items not re-exported at the root:
//!
//! - [`core`](pinmap_core): vocabulary types ([`PinIndex`], [`PinType`],
//!   [`Point`], [`LatticeParams`], [`ViewTransform`])
//! - [`store`](pinmap_store): [`PlacementStore`] and [`MarkedSet`]
//! - [`lattice`](pinmap_lattice): coordinate transforms and the annulus
//!   generator
//! - [`codec`](pinmap_codec): arrangement files and coordinate export

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use pinmap_codec as codec;
pub use pinmap_core as core;
pub use pinmap_lattice as lattice;
pub use pinmap_store as store;

pub mod arrangement;

pub use arrangement::Arrangement;
pub use pinmap_codec::{ArrangementRecord, CodecError, ExportError, FILE_EXT, MARKED_EXT};
pub use pinmap_core::{ConfigError, LatticeParams, PinIndex, PinType, Point, ViewTransform};
pub use pinmap_lattice::GenerateError;
pub use pinmap_store::{MarkedSet, PlacementStore};
