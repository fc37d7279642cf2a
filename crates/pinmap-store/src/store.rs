//! The type → sites mapping with the one-owner invariant.

use indexmap::IndexMap;
use pinmap_core::{PinIndex, PinType};

/// Mapping from pin type to the ordered collection of sites it occupies.
///
/// Invariants, enforced here and nowhere else:
///
/// - a given [`PinIndex`] appears in at most one type's bucket (placement
///   is a partial function site → type);
/// - a bucket emptied by removal is dropped — no empty buckets persist.
///
/// Buckets and the sites within them keep insertion order, so iteration
/// (and therefore on-disk output) is deterministic across runs.
///
/// # Examples
///
/// ```
/// use pinmap_core::{PinIndex, PinType};
/// use pinmap_store::PlacementStore;
///
/// let mut store = PlacementStore::new();
/// let site = PinIndex::new(0, 0);
/// store.add(site, PinType::new(2).unwrap());
/// store.add(site, PinType::new(3).unwrap());
///
/// // The second add evicted the first owner.
/// assert_eq!(store.type_at(site), PinType::new(3));
/// assert_eq!(store.count_of(PinType::new(2).unwrap()), 0);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementStore {
    buckets: IndexMap<PinType, Vec<PinIndex>>,
}

impl PlacementStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a pin of `pin_type` at `index`.
    ///
    /// Any existing placement at `index` is removed first, whichever
    /// bucket holds it; re-adding with the same type is therefore a
    /// removal plus re-append.
    pub fn add(&mut self, index: PinIndex, pin_type: PinType) {
        self.remove(index);
        self.buckets.entry(pin_type).or_default().push(index);
    }

    /// Remove the pin at `index`, returning the former owner.
    ///
    /// No-op (returns `None`) if the site is empty. The owning bucket is
    /// dropped if this removal empties it.
    pub fn remove(&mut self, index: PinIndex) -> Option<PinType> {
        let owner = self.type_at(index)?;
        if let Some(bucket) = self.buckets.get_mut(&owner) {
            bucket.retain(|&site| site != index);
            if bucket.is_empty() {
                self.buckets.shift_remove(&owner);
            }
        }
        Some(owner)
    }

    /// The type owning `index`, if any.
    pub fn type_at(&self, index: PinIndex) -> Option<PinType> {
        self.buckets
            .iter()
            .find(|(_, sites)| sites.contains(&index))
            .map(|(&pin_type, _)| pin_type)
    }

    /// Number of pins of `pin_type`.
    pub fn count_of(&self, pin_type: PinType) -> usize {
        self.buckets.get(&pin_type).map_or(0, Vec::len)
    }

    /// Total number of placed pins.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no pin is placed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Highest type number present, or `None` on an empty store.
    ///
    /// Type numbering is 1-based; shells listing per-type counts iterate
    /// `1..=max_type().get()`.
    pub fn max_type(&self) -> Option<PinType> {
        self.buckets.keys().copied().max()
    }

    /// Occupied types, in bucket insertion order.
    pub fn types(&self) -> impl Iterator<Item = PinType> + '_ {
        self.buckets.keys().copied()
    }

    /// The sites of `pin_type`, in placement order. Empty if unoccupied.
    pub fn bucket(&self, pin_type: PinType) -> &[PinIndex] {
        self.buckets.get(&pin_type).map_or(&[], Vec::as_slice)
    }

    /// All placements as `(site, type)` pairs, each placed site exactly
    /// once, walked bucket by bucket.
    pub fn placements(&self) -> impl Iterator<Item = (PinIndex, PinType)> + '_ {
        self.buckets
            .iter()
            .flat_map(|(&pin_type, sites)| sites.iter().map(move |&site| (site, pin_type)))
    }
}
