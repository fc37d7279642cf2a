//! Seeding an arrangement: fill the annulus with type-1 pins.

use pinmap_core::{LatticeParams, PinIndex, PinType, ViewTransform, SIN_60};
use pinmap_store::PlacementStore;

use crate::error::GenerateError;
use crate::transform::coordinate_of;

/// Fill the annulus described by `params` with non-overlapping pins.
///
/// Scans the index square `[-bound, +bound]²`, where
/// `bound = floor(outer_radius / (step * SIN_60)) + 1` — one column past
/// the widest the outer circle can reach — and keeps every site whose
/// pin lies entirely inside the outer circle and entirely outside the
/// inner one. A zero inner radius fills the full disk including the
/// center; a positive inner radius strictly excludes pins that would
/// straddle or fall inside the hole.
///
/// Every kept site gets [`PinType::ONE`]; overlap-freedom follows from
/// `step >= 2 * pin_radius`, already guaranteed by [`LatticeParams`].
///
/// Fails with [`GenerateError::NoPinsFit`] if no site qualifies; no
/// partial store is returned.
pub fn generate(params: &LatticeParams) -> Result<PlacementStore, GenerateError> {
    let bound = (params.outer_radius() / (params.step() * SIN_60)).floor() as i32 + 1;
    let view = ViewTransform::IDENTITY;
    let mut store = PlacementStore::new();
    for i in -bound..=bound {
        for j in -bound..=bound {
            let index = PinIndex::new(i, j);
            let r = coordinate_of(index, params, &view).norm();
            let inside_outer = r + params.pin_radius() <= params.outer_radius();
            let clear_of_inner =
                r - params.pin_radius() >= params.inner_radius() || params.inner_radius() == 0.0;
            if inside_outer && clear_of_inner {
                store.add(index, PinType::ONE);
            }
        }
    }
    if store.is_empty() {
        return Err(GenerateError::NoPinsFit {
            inner_radius: params.inner_radius(),
            outer_radius: params.outer_radius(),
            step: params.step(),
        });
    }
    Ok(store)
}
