//! Polynomial least-squares regression.
//!
//! Fits the degree-`d` polynomial minimizing the residual sum of
//! squares over a set of `(x, y)` samples. The fit solves the normal
//! equations of the Vandermonde system,
//!
//! ```text
//! (Vᵀ V) c = Vᵀ y,    V[i][j] = x[i]^j
//! ```
//!
//! via Cholesky decomposition (`Vᵀ V` is symmetric positive definite
//! for distinct abscissae and degree < point count). Coefficients are
//! returned in ascending degree order.

use crate::regression::errors::RegressionError;
use crate::regression::report::RegressionReport;
use nalgebra::{DMatrix, DVector};

const ALGORITHM: &str = "polynomial_least_squares";

/// Default minimum spacing below which two x-values count as duplicates.
pub const DEFAULT_X_TOL: f64 = 1e-12;

/// Polynomial fit configuration.
///
/// Construct with [`PolyFitCfg::new`], then chain the `set_*` builders.
/// `degree` defaults to 1 (straight-line fit), matching the usual
/// starting point for regression.
#[derive(Debug, Clone, Copy)]
pub struct PolyFitCfg<'a> {
    x: &'a [f64],
    y: &'a [f64],
    degree: usize,
    x_min_spacing: f64,
}

impl<'a> PolyFitCfg<'a> {
    pub fn new() -> Self {
        Self {
            x: &[],
            y: &[],
            degree: 1,
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Sets the sample abscissae. Order is irrelevant for regression,
    /// but values must be finite and pairwise distinct.
    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, RegressionError> {
        check_finite(v)?;
        self.x = v;
        Ok(self)
    }

    /// Sets the sample ordinates.
    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, RegressionError> {
        check_finite(v)?;
        self.y = v;
        Ok(self)
    }

    /// Sets the polynomial degree.
    pub fn set_degree(mut self, degree: usize) -> Self {
        self.degree = degree;
        self
    }

    /// Sets the minimum spacing below which two x-values count as
    /// duplicates.
    pub fn set_x_tol(mut self, v: f64) -> Result<Self, RegressionError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RegressionError::InvalidXTol { got: v });
        }
        self.x_min_spacing = v;
        Ok(self)
    }
}

impl Default for PolyFitCfg<'_> {
    fn default() -> Self { Self::new() }
}

fn check_finite(v: &[f64]) -> Result<(), RegressionError> {
    if v.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    if let Some(idx) = v.iter().position(|x| !x.is_finite()) {
        return Err(RegressionError::NonFiniteVec { idx });
    }
    Ok(())
}

/// Duplicate detection over unsorted abscissae: sort a copy and compare
/// neighbours against the spacing tolerance.
fn check_distinct(x: &[f64], min_spacing: f64) -> Result<(), RegressionError> {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    for w in sorted.windows(2) {
        if (w[1] - w[0]).abs() < min_spacing {
            return Err(RegressionError::DuplicateX { x1: w[0], x2: w[1] });
        }
    }
    Ok(())
}

/// Fits a polynomial of the configured degree by least squares.
///
/// # Behavior
/// - Builds the `n x (degree + 1)` Vandermonde matrix with ascending
///   powers, forms the normal equations, and solves them by Cholesky.
/// - Computes `R² = 1 - RSS/TSS` against the fitted values;
///   `r_squared` is `None` when `TSS == 0` (constant `y`).
///
/// # Errors
/// - [`RegressionError::EmptyInput`]     : `x` or `y` never set
/// - [`RegressionError::UnequalLength`]  : `x` and `y` disagree in length
/// - [`RegressionError::DegreeTooLarge`] : `degree >= n_points`, the
///   system has no unique solution
/// - [`RegressionError::DuplicateX`]     : two x-values within `x_tol`
/// - [`RegressionError::SingularSystem`] : Cholesky failed (severely
///   ill-conditioned data)
pub fn fit(cfg: PolyFitCfg) -> Result<RegressionReport, RegressionError> {
    let x = cfg.x;
    let y = cfg.y;
    let degree = cfg.degree;

    if x.is_empty() || y.is_empty() {
        return Err(RegressionError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(RegressionError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    let n = x.len();
    if degree >= n {
        return Err(RegressionError::DegreeTooLarge { degree, n_points: n });
    }
    check_distinct(x, cfg.x_min_spacing)?;

    let m = degree + 1;
    let vander = DMatrix::from_fn(n, m, |i, j| x[i].powi(j as i32));
    let yv = DVector::from_column_slice(y);

    let vt = vander.transpose();
    let normal = &vt * &vander;
    let rhs = &vt * &yv;

    let coeffs = normal
        .cholesky()
        .ok_or(RegressionError::SingularSystem)?
        .solve(&rhs);

    // R² against the fitted values
    let fitted = &vander * &coeffs;
    let residual = &yv - &fitted;
    let rss = residual.dot(&residual);

    let mean = yv.sum() / n as f64;
    let tss = yv.iter().map(|yi| (yi - mean) * (yi - mean)).sum::<f64>();

    let r_squared = if tss == 0.0 { None } else { Some(1.0 - rss / tss) };

    Ok(RegressionReport {
        algorithm_name: ALGORITHM,
        degree,
        n_points: n,
        coefficients: coeffs.iter().copied().collect(),
        r_squared,
    })
}

/// Evaluates an ascending-degree coefficient vector at `x` with
/// Horner's scheme. Companion to [`fit`] for using the returned
/// `coefficients`.
#[inline]
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
