//! Newton-Raphson method.

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::tolerances::DynamicTolerance;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);

#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("invalid max step, must be > 0 or f64::INFINITY")]
    InvalidMaxStep { step: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },

    #[error("step non-finite from vanishing derivative at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("finite-difference step not representable at x={x}, h={h};\
             try smaller |x| scaling or analytic derivative")]
    FiniteDifferenceStepUnrepresentable { x: f64, h: f64 },
}

/// Newton configuration.
///
/// # Fields
/// - `common`   : [`CommonCfg`] with tolerances and optional `max_iter`
/// - `max_step` : optional limit on the absolute Newton step (default: ∞)
///
/// # Defaults
/// - If `max_iter` is `None`, [`newton`] resolves it from
///   [`Algorithm::default_max_iter`], or [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    max_step: f64,
}

impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            max_step: f64::INFINITY,
        }
    }

    /// Caps the absolute Newton step; must be > 0.
    pub fn set_max_step(mut self, v: f64) -> Result<Self, NewtonError> {
        if v <= 0.0 || v.is_nan() {
            return Err(NewtonError::InvalidMaxStep { step: v });
        }
        self.max_step = v;
        Ok(self)
    }
}
impl Default for NewtonCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg);

// ULP helpers for the finite-difference fallback near representability edges
#[inline]
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    if x == 0.0 { return f64::from_bits(1); }

    let bits = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}

#[inline]
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY { return x; }
    if x == 0.0 { return -f64::from_bits(1); }

    let bits = x.to_bits();
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}

#[inline]
fn eval_fx_checked<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
    }
    Ok(fx)
}

/// Central finite-difference derivative with ULP rescue when
/// `x +/- h` collapses onto `x`.
#[inline]
fn eval_dfx_fd<F>(f: &mut F, x: f64, evals: &mut usize) -> Result<f64, NewtonError>
where
    F: FnMut(f64) -> f64,
{
    let mut h = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let mut xp = x + h;
    let mut xm = x - h;

    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        xp = next_up(x);
        xm = next_down(x);
        h = 0.5 * (xp - xm);

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
            return Err(NewtonError::FiniteDifferenceStepUnrepresentable { x, h });
        }
    }

    let fxp = eval_fx_checked(f, xp, evals)?;
    let fxm = eval_fx_checked(f, xm, evals)?;
    let dfx = (fxp - fxm) / (2.0 * h);
    if !dfx.is_finite() {
        return Err(NewtonError::DerivativeNotFinite { x, dfx });
    }
    Ok(dfx)
}

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
/// Supports an analytic derivative or a central finite-difference
/// fallback.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : optional analytic derivative; `None` uses finite differences
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`]
///
/// # Returns
/// [`RootFindingReport`] with `algorithm_name = "newton"`; the stencil
/// holds the previous iterate that formed the last step.
///
/// # Errors
/// - [`NewtonError::InvalidGuess`] : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`] / [`NewtonError::DerivativeNotFinite`]
/// - [`NewtonError::StepNotFinite`] : `x + step` not representable
/// - [`RootFindingError`] / [`ToleranceError`] variants, wrapped
///
/// # Notes
/// - Convergence is quadratic near a simple root but *local only*; poor
///   guesses can diverge or cycle. For guaranteed convergence use a
///   bracketed method ([`super::bisection`]).
/// - If `x + step == x` at machine precision, terminates with
///   [`TerminationReason::MachinePrecisionReached`].
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let abs_fx = cfg.common.abs_fx();
    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();
    let max_step = cfg.max_step;

    let num_iter = match cfg.common.max_iter() {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None => ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals: usize = 0;

    let open_report = |root: f64,
                       f_root: f64,
                       iterations: usize,
                       evaluations: usize,
                       termination: TerminationReason,
                       tolerance: ToleranceSatisfied,
                       parent: f64| {
        RootFindingReport::finish(
            ALGORITHM,
            root,
            f_root,
            iterations,
            evaluations,
            termination,
            tolerance,
            Stencil::singleton(parent),
        )
    };

    // early exit: x0 is a root
    let mut x = x0;
    let mut fx = eval_fx_checked(&mut func, x, &mut evals)?;
    if fx.abs() <= abs_fx {
        return Ok(open_report(
            x0,
            fx,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::AbsFxReached,
            x0,
        ));
    }

    let mut prev_x = x;
    for iter in 1..=num_iter {
        let dfx = match dfunc.as_mut() {
            Some(df) => {
                let dfx = { evals += 1; df(x) };
                if !dfx.is_finite() {
                    return Err(NewtonError::DerivativeNotFinite { x, dfx });
                }
                dfx
            }
            None => eval_dfx_fd(&mut func, x, &mut evals)?,
        };

        // raw step, clipped to max_step
        let mut step = -fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }
        if step.abs() > max_step {
            step = step.signum() * max_step;
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        // machine stagnation
        if x_next == x {
            return Ok(open_report(
                x,
                fx,
                iter,
                evals,
                TerminationReason::MachinePrecisionReached,
                ToleranceSatisfied::StepSizeReached,
                x,
            ));
        }

        let fx_next = eval_fx_checked(&mut func, x_next, &mut evals)?;
        if fx_next.abs() <= abs_fx {
            return Ok(open_report(
                x_next,
                fx_next,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::AbsFxReached,
                x,
            ));
        }

        let step_tol = ALGORITHM.calculate_tolerance(
            &DynamicTolerance::step_two_scalars(x, x_next),
            abs_x,
            rel_x,
        )?;
        if (x_next - x).abs() <= step_tol {
            return Ok(open_report(
                x_next,
                fx_next,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::StepSizeReached,
                x,
            ));
        }

        prev_x = x;
        x = x_next;
        fx = fx_next;
    }

    Ok(open_report(
        x,
        fx,
        num_iter,
        evals,
        TerminationReason::IterationLimit,
        ToleranceSatisfied::ToleranceNotReached,
        prev_x,
    ))
}
