//! Root-finding error types.
//!
//! - [`RootFindingError`] : common runtime errors (non-finite function
//!   evaluation, invalid global parameters)
//! - [`ToleranceError`]   : invalid input tolerances, invalid computed
//!   tolerances, or a tolerance type mismatched to the algorithm

use super::algorithms::Algorithm;
use thiserror::Error;

/// Root-finding runtime errors.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}

/// Tolerance configuration and evaluation errors.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid `abs_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsX { got: f64 },

    #[error("invalid `rel_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelX { got: f64 },

    #[error("either `abs_x` or `rel_x` must be > 0. got {abs_x} and {rel_x}")]
    InvalidAbsRelX { abs_x: f64, rel_x: f64 },

    #[error("width tolerance not applicable for algorithm {algorithm:?}")]
    WidthTolNotApplicable { algorithm: Algorithm },

    #[error("step tolerance not applicable for algorithm {algorithm:?}")]
    StepTolNotApplicable { algorithm: Algorithm },

    #[error("invalid computed tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
