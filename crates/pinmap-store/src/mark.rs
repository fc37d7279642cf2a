//! The flagged subset of lattice sites exported separately.

use indexmap::IndexSet;
use pinmap_core::PinIndex;

/// A set of marked lattice sites, independent of placement.
///
/// Marks flag a subset of sites for separate coordinate export. The set
/// is not constrained to occupied sites: removing a pin does not purge
/// its mark, so a mark may dangle until the operator unmarks it. Export
/// emits whatever is marked, occupied or not.
///
/// Insertion-ordered so the marked-coordinate file is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkedSet {
    sites: IndexSet<PinIndex>,
}

impl MarkedSet {
    /// An empty marked set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a site. Returns `true` if it was not already marked.
    pub fn mark(&mut self, index: PinIndex) -> bool {
        self.sites.insert(index)
    }

    /// Unmark a site. Returns `true` if it was marked.
    pub fn unmark(&mut self, index: PinIndex) -> bool {
        self.sites.shift_remove(&index)
    }

    /// Flip a site's mark; returns the new state.
    pub fn toggle(&mut self, index: PinIndex) -> bool {
        if self.sites.shift_remove(&index) {
            false
        } else {
            self.sites.insert(index);
            true
        }
    }

    /// Whether a site is marked.
    pub fn contains(&self, index: PinIndex) -> bool {
        self.sites.contains(&index)
    }

    /// Number of marked sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether no site is marked.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Marked sites in mark order.
    pub fn iter(&self) -> impl Iterator<Item = PinIndex> + '_ {
        self.sites.iter().copied()
    }
}
