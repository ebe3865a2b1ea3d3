//! Mean-value Monte Carlo integration.
//!
//! Estimates the integral as the domain measure times the mean of the
//! integrand over uniformly drawn sample points. Convergence is
//! O(1/sqrt(samples)) regardless of dimension, which is why the 2-D
//! variant lives here too.
//!
//! Uses `SmallRng`; seed the config for reproducible estimates
//! (deterministic for a given seed on the same platform).

use crate::integration::algorithms::Rule;
use crate::integration::config::{check_bounds, MonteCarloCfg};
use crate::integration::errors::IntegrationError;
use crate::integration::report::IntegrationReport;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    }
}

/// Estimates `∫ₐᵇ f(x) dx` as `(b - a) * mean(f(Uᵢ))` with `Uᵢ`
/// uniform on `[a, b)`.
///
/// # Arguments
/// - `func` : integrand
/// - `a`    : lower bound, finite, `a < b`
/// - `b`    : upper bound, finite
/// - `cfg`  : [`MonteCarloCfg`] with the sample count and optional seed
///
/// # Returns
/// [`IntegrationReport`] with `rule_name = "monte_carlo"` and one
/// evaluation per sample.
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`]
/// - [`IntegrationError::NonFiniteEvaluation`] if `f(x)` produced NaN/inf
pub fn monte_carlo<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: MonteCarloCfg,
) -> Result<IntegrationReport, IntegrationError>
where
    F: FnMut(f64) -> f64,
{
    check_bounds(a, b)?;

    let samples = cfg.samples();
    let mut rng = make_rng(cfg.seed());

    let mut sum = 0.0;
    for _ in 0..samples {
        let x = rng.random_range(a..b);
        let fx = func(x);
        if !fx.is_finite() {
            return Err(IntegrationError::NonFiniteEvaluation { x, fx });
        }
        sum += fx;
    }

    let value = (b - a) * sum / samples as f64;
    Ok(IntegrationReport::new(Rule::MonteCarlo, value, samples, samples))
}

/// Estimates `∬ f(x, y) dx dy` over the rectangle `[a, b] x [c, d]` as
/// `area * mean(f(Uᵢ, Vᵢ))`.
///
/// # Arguments
/// - `func`   : integrand of two variables
/// - `a`, `b` : x-bounds, finite, `a < b`
/// - `c`, `d` : y-bounds, finite, `c < d`
/// - `cfg`    : [`MonteCarloCfg`] with the sample count and optional seed
///
/// # Errors
/// - [`IntegrationError::InvalidBounds`] for either axis
/// - [`IntegrationError::NonFiniteEvaluation2d`] if `f(x, y)` produced
///   NaN/inf
pub fn monte_carlo_2d<F>(
    mut func: F,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    cfg: MonteCarloCfg,
) -> Result<IntegrationReport, IntegrationError>
where
    F: FnMut(f64, f64) -> f64,
{
    check_bounds(a, b)?;
    check_bounds(c, d)?;

    let samples = cfg.samples();
    let mut rng = make_rng(cfg.seed());

    let mut sum = 0.0;
    for _ in 0..samples {
        let x = rng.random_range(a..b);
        let y = rng.random_range(c..d);
        let fxy = func(x, y);
        if !fxy.is_finite() {
            return Err(IntegrationError::NonFiniteEvaluation2d { x, y, fxy });
        }
        sum += fxy;
    }

    let value = (b - a) * (d - c) * sum / samples as f64;
    Ok(IntegrationReport::new(Rule::MonteCarlo, value, samples, samples))
}
