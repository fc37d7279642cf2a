//! Error types for arrangement generation.

use std::error::Error;
use std::fmt;

/// Errors from [`generate`](crate::generate).
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// The annulus is too thin to admit a single pin at the given step:
    /// generation produced no sites and no arrangement is returned.
    NoPinsFit {
        /// Inner radius of the rejected annulus.
        inner_radius: f64,
        /// Outer radius of the rejected annulus.
        outer_radius: f64,
        /// The lattice step used.
        step: f64,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPinsFit {
                inner_radius,
                outer_radius,
                step,
            } => write!(
                f,
                "no pin fits the annulus [{inner_radius}, {outer_radius}] at step {step}"
            ),
        }
    }
}

impl Error for GenerateError {}
