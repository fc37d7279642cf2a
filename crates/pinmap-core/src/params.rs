//! Validated lattice parameters.

use crate::error::ConfigError;

/// `√3 / 2` — horizontal spacing factor between adjacent columns.
pub const SIN_60: f64 = 0.866_025_403_784_438_6;

/// `1 / 2` — vertical half-row shift applied to odd columns.
pub const COS_60: f64 = 0.5;

/// Physical parameters of a triangular-lattice pin arrangement.
///
/// All four values are caller-supplied physical constants in whatever unit
/// system the caller uses; the model only requires them to be mutually
/// consistent:
///
/// - `pin_radius > 0`
/// - `step >= 2 * pin_radius` (adjacent pins must not intersect)
/// - `inner_radius >= 0`
/// - `outer_radius > inner_radius`
///
/// Construction goes through [`LatticeParams::new`], which rejects any
/// violation with a [`ConfigError`]; a held value is therefore always
/// valid. Parameters are immutable for the lifetime of an arrangement
/// except for the step, replaced wholesale via [`LatticeParams::with_step`]
/// (re-validated) when the shell rebuilds with a different pitch.
///
/// # Examples
///
/// ```
/// use pinmap_core::LatticeParams;
///
/// let params = LatticeParams::new(1.0, 3.0, 0.0, 5.0).unwrap();
/// assert_eq!(params.step(), 3.0);
/// assert_eq!(params.min_step(), 2.0);
///
/// // A step below one pin diameter is rejected.
/// assert!(LatticeParams::new(1.0, 1.5, 0.0, 5.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeParams {
    pin_radius: f64,
    step: f64,
    inner_radius: f64,
    outer_radius: f64,
}

impl LatticeParams {
    /// Validate and construct.
    pub fn new(
        pin_radius: f64,
        step: f64,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Result<Self, ConfigError> {
        if !(pin_radius > 0.0) {
            return Err(ConfigError::PinRadiusNotPositive { pin_radius });
        }
        if !(step >= 2.0 * pin_radius) {
            return Err(ConfigError::StepOverlapsPins {
                step,
                min_step: 2.0 * pin_radius,
            });
        }
        if !(inner_radius >= 0.0) {
            return Err(ConfigError::InnerRadiusNegative { inner_radius });
        }
        if !(outer_radius > inner_radius) {
            return Err(ConfigError::OuterRadiusNotBeyondInner {
                inner_radius,
                outer_radius,
            });
        }
        Ok(Self {
            pin_radius,
            step,
            inner_radius,
            outer_radius,
        })
    }

    /// Pin radius.
    pub fn pin_radius(&self) -> f64 {
        self.pin_radius
    }

    /// Center-to-center spacing between adjacent lattice sites.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Inner radius of the annulus (`0` means a full disk).
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Outer radius of the annulus.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Smallest admissible step: one pin diameter.
    pub fn min_step(&self) -> f64 {
        2.0 * self.pin_radius
    }

    /// The same parameters with a different step, re-validated.
    pub fn with_step(&self, step: f64) -> Result<Self, ConfigError> {
        Self::new(self.pin_radius, step, self.inner_radius, self.outer_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_parameters() {
        let p = LatticeParams::new(1.0, 3.0, 0.0, 5.0).unwrap();
        assert_eq!(p.pin_radius(), 1.0);
        assert_eq!(p.outer_radius(), 5.0);
    }

    #[test]
    fn accepts_touching_pins() {
        // step == 2 * pin_radius is the tangent case, still legal.
        assert!(LatticeParams::new(1.0, 2.0, 0.0, 5.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_pin_radius() {
        assert!(matches!(
            LatticeParams::new(0.0, 3.0, 0.0, 5.0),
            Err(ConfigError::PinRadiusNotPositive { .. })
        ));
        assert!(matches!(
            LatticeParams::new(-1.0, 3.0, 0.0, 5.0),
            Err(ConfigError::PinRadiusNotPositive { .. })
        ));
    }

    #[test]
    fn rejects_overlapping_step() {
        assert!(matches!(
            LatticeParams::new(1.0, 1.5, 0.0, 5.0),
            Err(ConfigError::StepOverlapsPins { min_step, .. }) if min_step == 2.0
        ));
    }

    #[test]
    fn rejects_negative_inner_radius() {
        assert!(matches!(
            LatticeParams::new(1.0, 3.0, -0.5, 5.0),
            Err(ConfigError::InnerRadiusNegative { .. })
        ));
    }

    #[test]
    fn rejects_outer_not_beyond_inner() {
        assert!(matches!(
            LatticeParams::new(1.0, 3.0, 5.0, 5.0),
            Err(ConfigError::OuterRadiusNotBeyondInner { .. })
        ));
    }

    #[test]
    fn rejects_nan_fields() {
        // NaN fails every ordered comparison, so the negated predicates
        // catch it at whichever field it appears in.
        assert!(LatticeParams::new(f64::NAN, 3.0, 0.0, 5.0).is_err());
        assert!(LatticeParams::new(1.0, f64::NAN, 0.0, 5.0).is_err());
        assert!(LatticeParams::new(1.0, 3.0, f64::NAN, 5.0).is_err());
        assert!(LatticeParams::new(1.0, 3.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn with_step_revalidates() {
        let p = LatticeParams::new(1.0, 3.0, 0.0, 5.0).unwrap();
        assert_eq!(p.with_step(2.5).unwrap().step(), 2.5);
        assert!(matches!(
            p.with_step(1.5),
            Err(ConfigError::StepOverlapsPins { .. })
        ));
    }
}
