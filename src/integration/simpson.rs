//! Composite Simpson 1/3 rule.
//!
//! Fits a parabola through each consecutive node triple, requiring an
//! even subdivision count. Error is O(h⁴) for smooth integrands, which
//! makes it the default choice among the fixed-node rules here.

use crate::integration::algorithms::Rule;
use crate::integration::config::{check_bounds, QuadratureCfg};
use crate::integration::errors::IntegrationError;
use crate::integration::report::IntegrationReport;

/// Estimates `∫ₐᵇ f(x) dx` with the composite Simpson 1/3 rule.
///
/// ```text
/// ∫ ≈ h/3 * [f(x₀) + 4f(x₁) + 2f(x₂) + ... + 4f(x_{n-1}) + f(xₙ)]
/// ```
///
/// # Arguments
/// - `func` : integrand
/// - `a`    : lower bound, finite, `a < b`
/// - `b`    : upper bound, finite
/// - `cfg`  : [`QuadratureCfg`]; the subdivision count must be even
///
/// # Returns
/// [`IntegrationReport`] with `rule_name = "simpson"` and `n + 1`
/// evaluations.
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]
/// - [`IntegrationError::OddSubdivisions`] if `n` is odd
/// - [`IntegrationError::NonFiniteEvaluation`] if `f(x)` produced NaN/inf
pub fn simpson<F>(
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
    if n % 2 != 0 {
        return Err(IntegrationError::OddSubdivisions { got: n });
    }
    let h = (b - a) / n as f64;

    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, IntegrationError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(IntegrationError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let mut sum = eval(a)? + eval(b)?;
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * eval(a + i as f64 * h)?;
    }

    Ok(IntegrationReport::new(Rule::Simpson, sum * h / 3.0, n, evals))
}
