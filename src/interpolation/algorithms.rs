//! Interpolation algorithm variants.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Linear`]  : piecewise-linear interpolation
/// - [`Algorithm::Newton`]  : global polynomial, divided differences
/// - [`Algorithm::Hermite`] : osculating polynomial, values + derivatives
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Linear,
    Newton,
    Hermite,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Linear  => "linear",
            Algorithm::Newton  => "newton",
            Algorithm::Hermite => "hermite",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
