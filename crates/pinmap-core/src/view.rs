//! The global view transform applied at coordinate-read time.

use crate::point::Point;

/// World-space rotation and translation applied to every coordinate query.
///
/// Stored lattice indices are never re-baked when the operator rotates or
/// shifts the arrangement; instead this value is threaded through every
/// forward/inverse coordinate computation. That keeps every geometric
/// operation exactly undoable: [`ViewTransform::reset`] restores the
/// as-generated layout with no accumulated floating-point drift.
///
/// The translation is applied in lattice-local space (before rotation);
/// rotation is about the coordinate-system origin, not about `center`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
    center: Point,
    rotation_deg: f64,
}

impl ViewTransform {
    /// The identity transform: no offset, no rotation.
    pub const IDENTITY: ViewTransform = ViewTransform {
        center: Point::ORIGIN,
        rotation_deg: 0.0,
    };

    /// Construct from an explicit center offset and rotation in degrees.
    pub const fn new(center: Point, rotation_deg: f64) -> Self {
        Self {
            center,
            rotation_deg,
        }
    }

    /// Current center offset.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Current rotation in degrees (counter-clockwise positive, y-up).
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Shift the center by `(dx, dy)`, additively.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center += Point::new(dx, dy);
    }

    /// Rotate by `delta_deg`, additively.
    pub fn rotate(&mut self, delta_deg: f64) {
        self.rotation_deg += delta_deg;
    }

    /// Restore the identity transform.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Whether this is exactly the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_are_additive() {
        let mut view = ViewTransform::default();
        view.translate(1.0, 2.0);
        view.translate(0.5, -1.0);
        view.rotate(30.0);
        view.rotate(-10.0);
        assert_eq!(view.center(), Point::new(1.5, 1.0));
        assert_eq!(view.rotation_deg(), 20.0);
    }

    #[test]
    fn reset_restores_identity() {
        let mut view = ViewTransform::new(Point::new(3.0, -4.0), 45.0);
        assert!(!view.is_identity());
        view.reset();
        assert!(view.is_identity());
        assert_eq!(view, ViewTransform::IDENTITY);
    }
}
