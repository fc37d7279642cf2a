//! The unit of arrangement-file serialization.

use pinmap_core::{LatticeParams, ViewTransform};
use pinmap_store::PlacementStore;

/// Everything an arrangement file carries.
///
/// The marked set is deliberately absent: marks are session state, never
/// persisted in the arrangement file — they only surface in the
/// coordinate export.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrangementRecord {
    /// Validated lattice parameters (header fields 1–4).
    pub params: LatticeParams,
    /// View transform (header fields 5–7; identity in old files).
    pub view: ViewTransform,
    /// All placements.
    pub store: PlacementStore,
}
