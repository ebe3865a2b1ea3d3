//! Composite midpoint (rectangle) rule.
//!
//! Splits `[a, b]` into `n` equal intervals and sums rectangle areas
//! with heights taken at the interval midpoints. Like the trapezoid
//! rule the error is O(h²), with roughly half the constant.

use crate::integration::algorithms::Rule;
use crate::integration::config::{check_bounds, QuadratureCfg};
use crate::integration::errors::IntegrationError;
use crate::integration::report::IntegrationReport;

/// Estimates `∫ₐᵇ f(x) dx` with the composite midpoint rule.
///
/// # Arguments
/// - `func` : integrand
/// - `a`    : lower bound, finite, `a < b`
/// - `b`    : upper bound, finite
/// - `cfg`  : [`QuadratureCfg`] with the subdivision count
///
/// # Returns
/// [`IntegrationReport`] with `rule_name = "midpoint"` and exactly `n`
/// evaluations.
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]
/// - [`IntegrationError::NonFiniteEvaluation`] if `f(x)` produced NaN/inf
pub fn midpoint<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: QuadratureCfg,
) -> Result<IntegrationReport, IntegrationError>
where
    F: FnMut(f64) -> f64,
{
    check_bounds(a, b)?;

    let n = cfg.subdivisions();
    let h = (b - a) / n as f64;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, IntegrationError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(IntegrationError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let mut sum = 0.0;
    for i in 0..n {
        sum += eval(a + (i as f64 + 0.5) * h)?;
    }

    Ok(IntegrationReport::new(Rule::Midpoint, sum * h, n, evals))
}
