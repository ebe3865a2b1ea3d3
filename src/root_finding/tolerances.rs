//! Tolerance utilities for root-finding algorithms.
//!
//! [`DynamicTolerance`] is the method-specific per-iteration tolerance:
//! - `WidthTol { a, b }` : bracketing methods
//! - `StepTol  { x }`    : open methods
//!
//! Each [`Algorithm`] variant enforces that only the matching dynamic
//! tolerance type is used via [`Algorithm::calculate_tolerance`].

use super::algorithms::Algorithm;
use super::errors::ToleranceError;

#[derive(Debug, Copy, Clone)]
pub(crate) enum DynamicTolerance {
    WidthTol { a: f64, b: f64 },
    StepTol { x: [f64; 3] },
}

impl DynamicTolerance {
    pub fn step_two_scalars(x1: f64, x2: f64) -> Self {
        DynamicTolerance::StepTol { x: [x1, x2, 0.0] }
    }
}

impl Algorithm {
    /// Computes the method-specific dynamic tolerance.
    /// - bracketing : `abs_x + rel_x * max(|a|, |b|, 1.0)`
    /// - open       : `abs_x + rel_x * max(|x|..., 1.0)` over all iterates
    ///   contributing to the next estimate
    ///
    /// The relative scale is floored at 1.0 to avoid vanishing
    /// tolerances near zero.
    ///
    /// # Errors
    /// - [`ToleranceError::WidthTolNotApplicable`] /
    ///   [`ToleranceError::StepTolNotApplicable`] on a type mismatch
    /// - [`ToleranceError::InvalidTolerance`] if the result is
    ///   non-finite or <= 0
    pub(crate) fn calculate_tolerance(
        &self,
        dynamic_tol: &DynamicTolerance,
        abs_x: f64,
        rel_x: f64,
    ) -> Result<f64, ToleranceError> {
        let scale = match (self, dynamic_tol) {
            (Algorithm::Bracket(..), DynamicTolerance::WidthTol { a, b }) => {
                a.abs().max(b.abs())
            }
            (Algorithm::Open(..), DynamicTolerance::StepTol { x }) => {
                x.iter().fold(0.0_f64, |acc, xi| acc.max(xi.abs()))
            }
            (_, DynamicTolerance::WidthTol { .. }) => {
                return Err(ToleranceError::WidthTolNotApplicable { algorithm: *self });
            }
            (_, DynamicTolerance::StepTol { .. }) => {
                return Err(ToleranceError::StepTolNotApplicable { algorithm: *self });
            }
        };

        let tol = abs_x + rel_x * scale.max(1.0);
        if !tol.is_finite() || tol <= 0.0 {
            return Err(ToleranceError::InvalidTolerance { got: tol });
        }

        Ok(tol)
    }
}
