use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("degree {degree} >= number of points {n_points}: no unique least-squares solution")]
    DegreeTooLarge { degree: usize, n_points: usize },

    #[error("normal equations are singular or not positive definite")]
    SingularSystem,

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
