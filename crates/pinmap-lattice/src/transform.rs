//! Forward and inverse maps between lattice indices and world positions.
//!
//! The lattice uses offset coordinates: column `i` advances by
//! `step * SIN_60` horizontally, and odd columns are shifted up by half a
//! row (`COS_60 * step`), which interleaves the rows into
//! equilateral-triangle packing. The [`ViewTransform`] center is added in
//! lattice-local space, then the whole frame is rotated about the origin.
//!
//! Both functions are pure and total: any index maps to a position, and
//! any world point resolves to its nearest lattice index.

use pinmap_core::{LatticeParams, PinIndex, Point, ViewTransform, COS_60, SIN_60};

/// World position of lattice site `index`.
///
/// Local position before rotation:
/// `x0 = i * step * SIN_60 + center.x`,
/// `y0 = (j + parity(i) * COS_60) * step + center.y`;
/// the result is `(x0, y0)` rotated about the origin by the view's
/// rotation (counter-clockwise, y-up).
///
/// # Examples
///
/// ```
/// use pinmap_core::{LatticeParams, PinIndex, ViewTransform};
/// use pinmap_lattice::coordinate_of;
///
/// let params = LatticeParams::new(1.0, 2.0, 0.0, 10.0).unwrap();
/// let p = coordinate_of(PinIndex::new(0, 2), &params, &ViewTransform::IDENTITY);
/// assert_eq!((p.x, p.y), (0.0, 4.0));
/// ```
pub fn coordinate_of(index: PinIndex, params: &LatticeParams, view: &ViewTransform) -> Point {
    let step = params.step();
    let local = Point::new(
        index.i as f64 * step * SIN_60,
        (index.j as f64 + index.parity() as f64 * COS_60) * step,
    );
    (local + view.center()).rotated_deg(view.rotation_deg())
}

/// Nearest lattice site to world position `point`.
///
/// Inverse of [`coordinate_of`]: rotate back, subtract the center, then
/// round each axis (`i` first — the row shift depends on the resolved
/// column's parity). Rounding is half away from zero on both axes, the
/// same convention the forward/inverse symmetry tests rely on. This is a
/// nearest-point query, not an exact inverse; it is exact on lattice
/// sites.
pub fn index_of(point: Point, params: &LatticeParams, view: &ViewTransform) -> PinIndex {
    let step = params.step();
    let local = point.rotated_deg(-view.rotation_deg()) - view.center();
    let i = (local.x / (step * SIN_60)).round() as i32;
    let parity = i.rem_euclid(2);
    let j = (local.y / step - parity as f64 * COS_60).round() as i32;
    PinIndex::new(i, j)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn params() -> LatticeParams {
        LatticeParams::new(1.0, 3.0, 0.0, 12.0).unwrap()
    }

    // ── Forward map ─────────────────────────────────────────────

    #[test]
    fn origin_maps_to_origin() {
        let p = coordinate_of(PinIndex::new(0, 0), &params(), &ViewTransform::IDENTITY);
        assert_eq!((p.x, p.y), (0.0, 0.0));
    }

    #[test]
    fn odd_column_is_half_row_shifted() {
        let p = coordinate_of(PinIndex::new(1, 0), &params(), &ViewTransform::IDENTITY);
        assert!((p.x - 3.0 * SIN_60).abs() < EPS);
        assert!((p.y - 1.5).abs() < EPS);
    }

    #[test]
    fn negative_odd_column_shifts_the_same_way() {
        // Column -1 must carry the same half-row shift as column +1.
        let left = coordinate_of(PinIndex::new(-1, 0), &params(), &ViewTransform::IDENTITY);
        let right = coordinate_of(PinIndex::new(1, 0), &params(), &ViewTransform::IDENTITY);
        assert!((left.y - right.y).abs() < EPS);
        assert!((left.x + right.x).abs() < EPS);
    }

    #[test]
    fn neighbours_are_one_step_apart() {
        // In-column neighbour and the two cross-column neighbours all sit
        // exactly one step away: the equilateral packing property.
        let view = ViewTransform::IDENTITY;
        let origin = coordinate_of(PinIndex::new(0, 0), &params(), &view);
        for neighbour in [
            PinIndex::new(0, 1),
            PinIndex::new(1, 0),
            PinIndex::new(1, -1),
            PinIndex::new(-1, 0),
            PinIndex::new(-1, -1),
        ] {
            let p = coordinate_of(neighbour, &params(), &view);
            assert!(
                ((p - origin).norm() - 3.0).abs() < EPS,
                "site {neighbour} not one step from origin"
            );
        }
    }

    #[test]
    fn rotation_is_about_the_origin_not_the_center() {
        // With a pure offset, rotating by 180° must negate the offset
        // world position of the origin site.
        let view = ViewTransform::new(Point::new(2.0, 1.0), 180.0);
        let p = coordinate_of(PinIndex::new(0, 0), &params(), &view);
        assert!((p.x + 2.0).abs() < EPS);
        assert!((p.y + 1.0).abs() < EPS);
    }

    // ── Inverse map ─────────────────────────────────────────────

    #[test]
    fn inverse_recovers_exactly_at_identity() {
        let view = ViewTransform::IDENTITY;
        for i in -6..=6 {
            for j in -6..=6 {
                let index = PinIndex::new(i, j);
                let p = coordinate_of(index, &params(), &view);
                assert_eq!(index_of(p, &params(), &view), index);
            }
        }
    }

    #[test]
    fn inverse_snaps_nearby_points() {
        let view = ViewTransform::IDENTITY;
        let site = PinIndex::new(2, -1);
        let p = coordinate_of(site, &params(), &view);
        let nudged = Point::new(p.x + 0.4, p.y - 0.4);
        assert_eq!(index_of(nudged, &params(), &view), site);
    }

    #[test]
    fn total_on_arbitrary_points() {
        // No failure mode: even far-off points resolve to some index.
        let view = ViewTransform::new(Point::new(-3.0, 7.0), 123.0);
        let _ = index_of(Point::new(1e6, -1e6), &params(), &view);
    }

    // ── Property tests ──────────────────────────────────────────

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn inverse_recovers_under_any_view(
                i in -20i32..20,
                j in -20i32..20,
                cx in -50.0..50.0f64,
                cy in -50.0..50.0f64,
                deg in -360.0..360.0f64,
            ) {
                let params = LatticeParams::new(0.5, 1.25, 0.0, 10.0).unwrap();
                let view = ViewTransform::new(Point::new(cx, cy), deg);
                let index = PinIndex::new(i, j);
                let p = coordinate_of(index, &params, &view);
                prop_assert_eq!(index_of(p, &params, &view), index);
            }

            #[test]
            fn distinct_indices_map_to_distinct_points(
                i1 in -10i32..10, j1 in -10i32..10,
                i2 in -10i32..10, j2 in -10i32..10,
            ) {
                prop_assume!((i1, j1) != (i2, j2));
                let params = LatticeParams::new(1.0, 2.0, 0.0, 10.0).unwrap();
                let view = ViewTransform::IDENTITY;
                let a = coordinate_of(PinIndex::new(i1, j1), &params, &view);
                let b = coordinate_of(PinIndex::new(i2, j2), &params, &view);
                // Any two sites are at least one step apart.
                prop_assert!((a - b).norm() > 2.0 - 1e-6);
            }
        }
    }
}
