//! Piecewise-linear interpolation.
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines a
//! line segment. Evaluation points lying within `[x[i], x[i+1]]` are
//! interpolated linearly between the two end points; exact node hits
//! return the stored ordinate.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;

/// Linear interpolation configuration.
///
/// Construct with [`LinearCfg::new`], then chain the `set_*` builders
/// (`set_x`, `set_y`, `set_x_eval`, optional `set_x_tol`).
#[derive(Debug, Clone, Copy)]
pub struct LinearCfg<'a> {
    common: CommonCfg<'a>,
}

impl LinearCfg<'_> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for LinearCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LinearCfg<'a>);

#[inline]
fn lerp(x0: f64, x1: f64, y0: f64, y1: f64, xq: f64) -> f64 {
    y0 + (y1 - y0) * (xq - x0) / (x1 - x0)
}

/// Performs piecewise-linear interpolation over the configured data.
///
/// For each evaluation point `xq`:
/// - `xq` outside `[x[0], x[n-1]]` is [`InterpolationError::OutOfBounds`]
/// - an exact node hit returns `y` at the node
/// - otherwise the enclosing segment `[x[i], x[i+1]]` gives
///   `yq = y[i] + (y[i+1] - y[i]) * (xq - x[i]) / (x[i+1] - x[i])`
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name = "linear"` and the
/// interpolated values in `evaluated`.
pub fn interpolate(cfg: LinearCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.check_ready()?;

    let x = cfg.common.x();
    let y = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n = x.len();
    let mut report = InterpolationReport::new(Algorithm::Linear, n, evals.len());

    let x_min = x[0];
    let x_max = x[n - 1];
    for &xq in evals {
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }

        // total_cmp orders -0.0 below 0.0, so an in-range signed zero
        // can land outside 1..n; clamp those to the boundary nodes
        let yq = match x.binary_search_by(|xi| xi.total_cmp(&xq)) {
            Ok(idx) => y[idx],
            Err(0) => y[0],
            Err(idx) if idx == n => y[n - 1],
            Err(idx) => {
                // x[idx - 1] < xq < x[idx]
                let i = idx - 1;
                lerp(x[i], x[i + 1], y[i], y[i + 1], xq)
            }
        };
        report.evaluated.push(yq);
    }

    Ok(report)
}
