//! Bisection method.
//!
//! Bracketing solver: assumes `func` is continuous on `[a, b]` with
//! `func(a)` and `func(b)` of opposite sign, which guarantees a root in
//! the interval. Convergence is linear but unconditional.

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::config::{impl_common_cfg, CommonCfg};
use super::errors::{RootFindingError, ToleranceError};
use super::report::{RootFindingReport, Stencil, TerminationReason, ToleranceSatisfied};
use super::signs::opposite_sign;
use super::tolerances::DynamicTolerance;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    NoSignChange { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Defaults
/// - If `max_iter` is `None`, [`bisection`] uses the theoretical number
///   of halvings needed to meet the width tolerance, capped by
///   [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}

impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for BisectionCfg {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(BisectionCfg);

/// Number of halvings of `[a, b]` needed to shrink the width under
/// `width_tol`. The tolerance was validated upstream.
#[inline]
fn theoretical_iterations(a: f64, b: f64, width_tol: f64) -> usize {
    let w0 = b - a;
    if w0 <= width_tol {
        0
    } else {
        (w0 / width_tol).log2().ceil() as usize
    }
}

/// Finds a root of `func` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound, finite, `a < b`
/// - `b`    : upper bound, finite
/// - `cfg`  : [`BisectionCfg`] (tolerances, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with `algorithm_name = "bisection"` and a
/// [`Stencil::Bracket`] holding the final interval. Endpoint roots
/// return immediately with `iterations = 0`.
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a`/`b` NaN/inf or `a >= b`
/// - [`BisectionError::NoSignChange`]  : `f(a)` and `f(b)` share a sign
/// - [`RootFindingError::NonFiniteEvaluation`] via
///   [`BisectionError::RootFinding`] : `f(x)` produced NaN/inf
/// - [`ToleranceError`] variants via [`BisectionError::Tolerance`]
///
/// # Notes
/// - Even when `(b - a)` already meets the width tolerance, a sign
///   change is required; the reported root is then the midpoint, which
///   costs exactly one extra evaluation.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let abs_fx = cfg.common.abs_fx();
    let abs_x = cfg.common.abs_x();
    let rel_x = cfg.common.rel_x();

    let width_tol0 =
        ALGORITHM.calculate_tolerance(&DynamicTolerance::WidthTol { a, b }, abs_x, rel_x)?;

    let num_iter = match cfg.common.max_iter() {
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()),
        Some(v) => v,
        None => theoretical_iterations(a, b, width_tol0).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    // wraps func, increments evals, enforces finiteness
    let mut evals = 0;
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx }.into());
        }
        Ok(fx)
    };

    let bracket_report = |root: f64,
                          f_root: f64,
                          iterations: usize,
                          evaluations: usize,
                          termination: TerminationReason,
                          tolerance: ToleranceSatisfied,
                          a: f64,
                          b: f64| {
        RootFindingReport::finish(
            ALGORITHM,
            root,
            f_root,
            iterations,
            evaluations,
            termination,
            tolerance,
            Stencil::Bracket { bounds: [a, b] },
        )
    };

    // early exit: an endpoint is already a root
    let mut fa = eval(a)?;
    if fa.abs() <= abs_fx {
        return Ok(bracket_report(
            a,
            fa,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::AbsFxReached,
            a,
            b,
        ));
    }
    let fb = eval(b)?;
    if fb.abs() <= abs_fx {
        return Ok(bracket_report(
            b,
            fb,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::AbsFxReached,
            a,
            b,
        ));
    }

    if !opposite_sign(fa, fb) {
        return Err(BisectionError::NoSignChange { a, b });
    }

    // immediate narrow-width success
    if b - a <= width_tol0 {
        let midpoint = a + (b - a) * 0.5;
        let fm = eval(midpoint)?;
        return Ok(bracket_report(
            midpoint,
            fm,
            0,
            evals,
            TerminationReason::ToleranceReached,
            ToleranceSatisfied::WidthTolReached,
            a,
            b,
        ));
    }

    // main loop
    let mut midpoint = a;
    let mut fm = fa;
    for iter in 1..=num_iter {
        midpoint = a + (b - a) * 0.5;
        fm = eval(midpoint)?;

        if fm.abs() <= abs_fx {
            return Ok(bracket_report(
                midpoint,
                fm,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::AbsFxReached,
                a,
                b,
            ));
        }

        // shrink the half without the sign change
        if opposite_sign(fa, fm) {
            b = midpoint;
        } else {
            a = midpoint;
            fa = fm;
        }

        let width_tol =
            ALGORITHM.calculate_tolerance(&DynamicTolerance::WidthTol { a, b }, abs_x, rel_x)?;
        if b - a <= width_tol {
            let root = a + (b - a) * 0.5;
            let f_root = eval(root)?;
            return Ok(bracket_report(
                root,
                f_root,
                iter,
                evals,
                TerminationReason::ToleranceReached,
                ToleranceSatisfied::WidthTolReached,
                a,
                b,
            ));
        }
    }

    Ok(bracket_report(
        midpoint,
        fm,
        num_iter,
        evals,
        TerminationReason::IterationLimit,
        ToleranceSatisfied::ToleranceNotReached,
        a,
        b,
    ))
}
