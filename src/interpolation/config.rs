//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with the borrowed sample data, the evaluation
//! points, and the minimum allowed spacing between adjacent `x` data
//! ([`DEFAULT_X_TOL`] by default). Every algorithm config embeds one and
//! gains validated `set_*` builders through [`impl_common_cfg!`].

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;

#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x: &'a [f64],
    pub(crate) y: &'a [f64],
    pub(crate) x_eval: &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x: &[],
            y: &[],
            x_eval: &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}

impl CommonCfg<'_> {
    /// Confirms both data vectors were supplied and agree in length.
    /// The `set_*` builders enforce per-vector shape; this catches a
    /// vector never being set at all.
    pub(crate) fn check_ready(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if self.x.len() != self.y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: self.x.len(),
                y_len: self.y.len(),
            });
        }
        Ok(())
    }
}

/// Index of the first non-finite entry, if any.
pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Validates an abscissa vector: non-empty, finite, at least two entries,
/// strictly increasing with spacing of at least `min_spacing`.
pub(crate) fn check_abscissae(v: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if v.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: v.len() });
    }
    for i in 1..v.len() {
        if (v[i] - v[i - 1]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: v[i - 1], x2: v[i] });
        }
        if v[i] <= v[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

/// Validates an ordinate vector: non-empty, finite, length agreeing with
/// `x_len` when the abscissae were already set.
pub(crate) fn check_ordinates(v: &[f64], x_len: usize) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if x_len != 0 && v.len() != x_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len: v.len() });
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_abscissae(v, self.common.x_min_spacing)?;

                // length agreement check, symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(
                        $crate::interpolation::errors::InterpolationError::UnequalLength {
                            x_len: v.len(),
                            y_len,
                        },
                    );
                }

                self.common.x = v;
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_ordinates(v, self.common.x.len())?;
                self.common.y = v;
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(
                        $crate::interpolation::errors::InterpolationError::NonFiniteVec { idx },
                    );
                }
                self.common.x_eval = v;
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::interpolation::errors::InterpolationError::InvalidXTol { got: v },
                    );
                }
                self.common.x_min_spacing = v;
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
