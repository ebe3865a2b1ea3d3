//! Shared configuration and helpers for the integration rules.

use crate::integration::errors::IntegrationError;

pub const DEFAULT_SUBDIVISIONS: usize = 1_000;
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Quadrature configuration (trapezoid, midpoint, Simpson).
///
/// # Defaults
/// - `n` : [`DEFAULT_SUBDIVISIONS`] subdivisions
#[derive(Debug, Copy, Clone)]
pub struct QuadratureCfg {
    n: usize,
}

impl QuadratureCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { n: DEFAULT_SUBDIVISIONS }
    }

    /// Sets the subdivision count; must be >= 1.
    pub fn set_subdivisions(mut self, n: usize) -> Result<Self, IntegrationError> {
        if n == 0 {
            return Err(IntegrationError::InvalidSubdivisions { got: n });
        }
        self.n = n;
        Ok(self)
    }

    pub fn subdivisions(&self) -> usize { self.n }
}

impl Default for QuadratureCfg {
    fn default() -> Self { Self::new() }
}

/// Monte Carlo configuration.
///
/// # Defaults
/// - `samples` : [`DEFAULT_SAMPLES`]
/// - `seed`    : none; the generator is seeded from the OS. Set a seed
///   for reproducible estimates.
#[derive(Debug, Copy, Clone)]
pub struct MonteCarloCfg {
    samples: usize,
    seed: Option<u64>,
}

impl MonteCarloCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { samples: DEFAULT_SAMPLES, seed: None }
    }

    /// Sets the sample count; must be >= 1.
    pub fn set_samples(mut self, n: usize) -> Result<Self, IntegrationError> {
        if n == 0 {
            return Err(IntegrationError::InvalidSamples { got: n });
        }
        self.samples = n;
        Ok(self)
    }

    /// Seeds the generator for a deterministic estimate.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn samples(&self) -> usize { self.samples }
    pub fn seed(&self) -> Option<u64> { self.seed }
}

impl Default for MonteCarloCfg {
    fn default() -> Self { Self::new() }
}

/// Bounds check shared by every rule: finite with `a < b`.
pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), IntegrationError> {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(IntegrationError::InvalidBounds { a, b });
    }
    Ok(())
}
