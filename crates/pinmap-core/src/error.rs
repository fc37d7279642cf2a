//! Error types for lattice parameter validation.

use std::error::Error;
use std::fmt;

/// Errors from constructing or re-validating [`LatticeParams`].
///
/// One variant per violated predicate, carrying the offending values so
/// the shell can show a useful message.
///
/// [`LatticeParams`]: crate::LatticeParams
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `pin_radius` must be strictly positive.
    PinRadiusNotPositive {
        /// The rejected pin radius.
        pin_radius: f64,
    },
    /// `step` is smaller than one pin diameter, so adjacent pins would
    /// intersect.
    StepOverlapsPins {
        /// The rejected step.
        step: f64,
        /// The smallest admissible step (`2 * pin_radius`).
        min_step: f64,
    },
    /// `inner_radius` must be non-negative.
    InnerRadiusNegative {
        /// The rejected inner radius.
        inner_radius: f64,
    },
    /// `outer_radius` must exceed `inner_radius`.
    OuterRadiusNotBeyondInner {
        /// The inner radius.
        inner_radius: f64,
        /// The rejected outer radius.
        outer_radius: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinRadiusNotPositive { pin_radius } => {
                write!(f, "pin radius must be positive, got {pin_radius}")
            }
            Self::StepOverlapsPins { step, min_step } => {
                write!(
                    f,
                    "step {step} overlaps pins: must be at least one pin diameter ({min_step})"
                )
            }
            Self::InnerRadiusNegative { inner_radius } => {
                write!(f, "inner radius must be non-negative, got {inner_radius}")
            }
            Self::OuterRadiusNotBeyondInner {
                inner_radius,
                outer_radius,
            } => {
                write!(
                    f,
                    "outer radius {outer_radius} must exceed inner radius {inner_radius}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
