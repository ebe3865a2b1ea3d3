//! Composite trapezoid rule.
//!
//! Splits `[a, b]` into `n` equal intervals and sums the trapezoid
//! areas `(f(x_i) + f(x_{i+1})) * h / 2`. Error is O(h²) for smooth
//! integrands.

use crate::integration::algorithms::Rule;
use crate::integration::config::{check_bounds, QuadratureCfg};
use crate::integration::errors::IntegrationError;
use crate::integration::report::IntegrationReport;

/// Estimates `∫ₐᵇ f(x) dx` with the composite trapezoid rule.
///
/// # Arguments
/// - `func` : integrand
/// - `a`    : lower bound, finite, `a < b`
/// - `b`    : upper bound, finite
/// - `cfg`  : [`QuadratureCfg`] with the subdivision count
///
/// # Returns
/// [`IntegrationReport`] with `rule_name = "trapezoid"`; each interior
/// node is evaluated once (`n + 1` evaluations total).
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]
/// - [`IntegrationError::NonFiniteEvaluation`] if `f(x)` produced NaN/inf
pub fn trapezoid<F>(
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

    // wraps func, increments evals, enforces finiteness
    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, IntegrationError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(IntegrationError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let mut sum = 0.5 * (eval(a)? + eval(b)?);
    for i in 1..n {
        sum += eval(a + i as f64 * h)?;
    }

    Ok(IntegrationReport::new(Rule::Trapezoid, sum * h, n, evals))
}
