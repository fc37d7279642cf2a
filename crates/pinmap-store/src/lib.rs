//! Placement storage for pinmap arrangements.
//!
//! [`PlacementStore`] maps each occupied [`PinType`] to the ordered list
//! of lattice sites holding a pin of that type, enforcing the central
//! invariant that a site is owned by at most one type. [`MarkedSet`] is
//! the independent flagged subset used for separate export.
//!
//! Both are insertion-ordered (via `indexmap`) so that serialization and
//! export walk placements in a deterministic order.
//!
//! [`PinType`]: pinmap_core::PinType

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod mark;
pub mod store;

pub use mark::MarkedSet;
pub use store::PlacementStore;
