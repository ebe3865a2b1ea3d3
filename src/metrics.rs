//! Error metrics for comparing approximations against reference values.

/// Absolute error `|truth - approx|`.
#[inline]
pub fn absolute_error(truth: f64, approx: f64) -> f64 {
    (truth - approx).abs()
}

/// Relative error `|truth - approx| / |truth|`.
///
/// Returns `None` when `truth == 0.0`, where relative error is
/// undefined; use [`absolute_error`] instead.
#[inline]
pub fn relative_error(truth: f64, approx: f64) -> Option<f64> {
    if truth == 0.0 {
        return None;
    }
    Some(absolute_error(truth, approx) / truth.abs())
}
