//! Newton (divided-difference) interpolation.
//!
//! Global polynomial interpolation via the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//! Coefficients come from the recursive divided-difference table and
//! query points are evaluated with Horner's nested form for stability.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::{divided_differences, horner_newton};

/// Newton interpolation configuration.
///
/// Construct with [`NewtonCfg::new`], then chain the `set_*` builders
/// (`set_x`, `set_y`, `set_x_eval`, optional `set_x_tol`).
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}

impl NewtonCfg<'_> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);

/// Performs Newton divided-difference interpolation.
///
/// Builds the divided-difference table once, then evaluates
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
///
/// for each evaluation point.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name = "newton"`.
///
/// # Errors
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.check_ready()?;

    let x = cfg.common.x();
    let y = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n = x.len();
    let mut report = InterpolationReport::new(Algorithm::Newton, n, evals.len());

    let coeffs = divided_differences(x, y);

    let x_min = x[0];
    let x_max = x[n - 1];
    for &xq in evals {
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        report.evaluated.push(horner_newton(&coeffs, x, xq));
    }

    Ok(report)
}
