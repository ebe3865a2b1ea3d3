//! Secant method.

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::tolerances::DynamicTolerance;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Secant);

#[derive(Debug, Error)]
pub enum SecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct")]
    InvalidGuess { x0: f64, x1: f64 },

    #[error("degenerate secant: |fx2 - fx1| near 0")]
    DegenerateSecantStep,
}

/// Secant configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `max_iter` is `None`, [`secant`] resolves it from
///   [`Algorithm::default_max_iter`], or [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg {
    common: CommonCfg,
}

impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for SecantCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);

/// Secant x-intercept of the line through `(x1, fx1)` and `(x2, fx2)`.
///
/// # Returns
/// - `Ok(x)` if the denominator `fx2 - fx1` is well-scaled
/// - `Err(DegenerateSecantStep)` if it is too small to divide by
#[inline]
pub(crate) fn secant_x_intercept(
    (x1, fx1): (f64, f64),
    (x2, fx2): (f64, f64),
) -> Result<f64, SecantError> {
    let denom = fx2 - fx1;
    let scale = fx1.abs().max(fx2.abs()).max(1.0);
    let thresh = f64::EPSILON * scale + f64::MIN_POSITIVE;

    if denom.abs() <= thresh {
        return Err(SecantError::DegenerateSecantStep);
    }

    Ok((x1 * fx2 - x2 * fx1) / denom)
}

/// Step tolerance over the two iterates feeding the update formula;
/// the effective tolerance is the maximum across both.
#[inline]
fn step_tolerance(x1: f64, x2: f64, abs_x: f64, rel_x: f64) -> Result<f64, ToleranceError> {
    let tol1 = ALGORITHM.calculate_tolerance(
        &DynamicTolerance::StepTol { x: [x1, 0.0, 0.0] },
        abs_x,
        rel_x,
    )?;
    let tol2 = ALGORITHM.calculate_tolerance(
        &DynamicTolerance::StepTol { x: [x2, 0.0, 0.0] },
        abs_x,
        rel_x,
    )?;
    Ok(tol1.max(tol2))
}

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : first initial guess, finite, distinct from `x1`
/// - `x1`   : second initial guess, finite
/// - `cfg`  : [`SecantCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with `algorithm_name = "secant"`; the stencil
/// holds the pair of iterates that formed the last step.
///
/// # Behavior
/// - Update: `x_{k+1} = (x_{k-1} f(x_k) - x_k f(x_{k-1})) / (f(x_k) - f(x_{k-1}))`
/// - A collapsing denominator falls back to a half-step between the two
///   current iterates.
///
/// # Errors
/// - [`SecantError::InvalidGuess`] : `x0`/`x1` NaN/inf or equal
/// - [`RootFindingError`] / [`ToleranceError`] variants, wrapped
///
/// # Notes
/// - Convergence is superlinear (~1.618) near simple roots. Poor
///   guesses may diverge; for guaranteed convergence use a bracketed
///   method ([`super::bisection`]).
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg,
) -> Result<RootFindingReport, SecantError>
where
    F: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(SecantError::InvalidGuess { x0, x1 });
    }

    let abs_fx = cfg.common.abs_fx();
    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();

    let num_iter = match cfg.common.max_iter() {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None => ALGORITHM.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // wraps func, increments evals, enforces finiteness
    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, SecantError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let open_report = |root: f64,
                       f_root: f64,
                       iterations: usize,
                       evaluations: usize,
                       termination: TerminationReason,
                       tolerance: ToleranceSatisfied,
                       stencil: Stencil| {
        RootFindingReport::finish(
            ALGORITHM,
            root,
            f_root,
            iterations,
            evaluations,
            termination,
            tolerance,
            stencil,
        )
    };

    // early exits: a guess is already a root, or the guesses are
    // within step tolerance of each other
    let fx0 = eval(x0)?;
    if fx0.abs() <= abs_fx {
        return Ok(open_report(
            x0,
            fx0,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::AbsFxReached,
            Stencil::singleton(x0),
        ));
    }
    let fx1 = eval(x1)?;
    if fx1.abs() <= abs_fx {
        return Ok(open_report(
            x1,
            fx1,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::AbsFxReached,
            Stencil::singleton(x1),
        ));
    }

    let step_tol = step_tolerance(x0, x1, abs_x, rel_x)?;
    if (x1 - x0).abs() <= step_tol {
        return Ok(open_report(
            x1,
            fx1,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::StepSizeReached,
            Stencil::doubleton(x0, x1),
        ));
    }

    // main loop
    let mut x_curr = x1;
    let mut x_prev = x0;
    let mut f_curr = fx1;
    let mut f_prev = fx0;
    for iter in 1..=num_iter {
        let x_next = match secant_x_intercept((x_curr, f_curr), (x_prev, f_prev)) {
            Ok(x) => x,
            // denominator collapse: half-step fallback
            Err(SecantError::DegenerateSecantStep) => x_curr - (x_curr - x_prev) * 0.5,
            Err(e) => return Err(e),
        };
        let f_next = eval(x_next)?;

        if f_next.abs() <= abs_fx {
            return Ok(open_report(
                x_next,
                f_next,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::AbsFxReached,
                Stencil::doubleton(x_curr, x_prev),
            ));
        }

        let step_tol = step_tolerance(x_next, x_curr, abs_x, rel_x)?;
        if (x_next - x_curr).abs() <= step_tol {
            return Ok(open_report(
                x_next,
                f_next,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::StepSizeReached,
                Stencil::doubleton(x_curr, x_prev),
            ));
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Ok(open_report(
        x_curr,
        f_curr,
        num_iter,
        evals,
        TerminationReason::IterationLimit,
        ToleranceSatisfied::ToleranceNotReached,
        Stencil::doubleton(x_curr, x_prev),
    ))
}
