use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid subdivisions: must be >= 1. got {got}")]
    InvalidSubdivisions { got: usize },

    #[error("simpson's rule requires an even subdivision count. got {got}")]
    OddSubdivisions { got: usize },

    #[error("invalid sample count: must be >= 1. got {got}")]
    InvalidSamples { got: usize },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("function non-finite at (x={x}, y={y}), f(x, y)={fxy}")]
    NonFiniteEvaluation2d { x: f64, y: f64, fxy: f64 },
}
