//! Defines the [`RegressionReport`] struct returned by the fitting
//! routines.

/// Summary of a least-squares fit.
///
/// - `algorithm_name` : fitting method (e.g. `"polynomial_least_squares"`)
/// - `degree`         : degree of the fitted polynomial
/// - `n_points`       : number of input data points `(x, y)`
/// - `coefficients`   : polynomial coefficients in ascending degree order
/// - `r_squared`      : coefficient of determination `1 - RSS/TSS`;
///   `None` when the total sum of squares is zero (constant `y` data,
///   where R² is undefined)
#[derive(Debug, Clone)]
pub struct RegressionReport {
    pub algorithm_name: &'static str,
    pub degree: usize,
    pub n_points: usize,
    pub coefficients: Vec<f64>,
    pub r_squared: Option<f64>,
}
