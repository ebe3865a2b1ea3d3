//! Hermite (osculating) interpolation.
//!
//! Matches both values and first derivatives at every node. Implemented
//! as divided differences over doubled nodes: each `x[i]` appears twice,
//! and the first-order difference at a repeated node is the supplied
//! derivative `dy[i]`. The resulting polynomial has degree `2n - 1`.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::{hermite_table, horner_newton};

/// Hermite interpolation configuration.
///
/// Besides the shared `set_x`/`set_y`/`set_x_eval` builders, requires a
/// derivative vector via [`HermiteCfg::set_dy`] with one entry per data
/// point.
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    dy: &'a [f64],
}

impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), dy: &[] }
    }

    /// Sets the first derivatives `dy[i] = f'(x[i])`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] for an empty vector
    /// - [`InterpolationError::NonFiniteVec`] for NaN/inf entries
    /// - [`InterpolationError::DerivativeLengthMismatch`] if `x` was set
    ///   and the lengths differ
    pub fn set_dy(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        let x_len = self.common.x().len();
        if x_len != 0 && v.len() != x_len {
            return Err(InterpolationError::DerivativeLengthMismatch {
                x_len,
                dy_len: v.len(),
            });
        }
        self.dy = v;
        Ok(self)
    }
}
impl Default for HermiteCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(HermiteCfg<'a>);

/// Performs Hermite interpolation over the configured data.
///
/// # Behavior
/// - Builds the doubled-node divided-difference table once.
/// - Evaluates the degree-`2n - 1` Newton-form polynomial at each query
///   point with Horner's nested scheme.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm_name = "hermite"`.
///
/// # Errors
/// - [`InterpolationError::MissingDerivatives`] if `set_dy` was never
///   called
/// - [`InterpolationError::DerivativeLengthMismatch`] if `dy` disagrees
///   with `x` in length
/// - [`InterpolationError::OutOfBounds`] if any evaluation point lies
///   outside the provided x-range
pub fn interpolate(cfg: HermiteCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.check_ready()?;

    let x = cfg.common.x();
    let y = cfg.common.y();
    let dy = cfg.dy;
    let evals = cfg.common.x_eval();

    if dy.is_empty() {
        return Err(InterpolationError::MissingDerivatives);
    }
    if dy.len() != x.len() {
        return Err(InterpolationError::DerivativeLengthMismatch {
            x_len: x.len(),
            dy_len: dy.len(),
        });
    }

    let n = x.len();
    let mut report = InterpolationReport::new(Algorithm::Hermite, n, evals.len());

    let (z, coeffs) = hermite_table(x, y, dy);

    let x_min = x[0];
    let x_max = x[n - 1];
    for &xq in evals {
        if xq < x_min || xq > x_max {
            return Err(InterpolationError::OutOfBounds { got: xq, x_min, x_max });
        }
        report.evaluated.push(horner_newton(&coeffs, &z, xq));
    }

    Ok(report)
}
