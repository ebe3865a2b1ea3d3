//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms.

use super::algorithms::Algorithm;

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    MachinePrecisionReached,
}

/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]    : |f(x)| <= abs_fx, all methods
/// - [`ToleranceSatisfied::WidthTolReached`] : bracket width within tolerance
/// - [`ToleranceSatisfied::StepSizeReached`] : |x_n - x_{n-1}| within tolerance
/// - [`ToleranceSatisfied::ToleranceNotReached`] : usually alongside
///   [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}

/// Last set of points used in the update formula.
/// - [`Stencil::Bracket`] : `left`, `right` bounds of the final interval
/// - [`Stencil::Open`]    : recent iterates that produced the root
#[derive(Debug, Copy, Clone)]
pub enum Stencil {
    Bracket { bounds: [f64; 2] },
    Open { x: [f64; 3], len: usize },
}

impl Stencil {
    pub fn stencil(&self) -> &[f64] {
        match self {
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len } => &x[..*len],
        }
    }

    pub fn singleton(x: f64) -> Self {
        Stencil::Open { x: [x, 0.0, 0.0], len: 1 }
    }

    pub fn doubleton(x1: f64, x2: f64) -> Self {
        Stencil::Open { x: [x1, x2, 0.0], len: 2 }
    }
}

/// Final report returned by all root-finding algorithms.
///
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `iterations`          : total iterations
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why the solver stopped
/// - `tolerance_satisfied` : which tolerance was met
/// - `stencil`             : last set of points used in the update formula
/// - `algorithm_name`      : e.g. `"bisection"`
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub termination_reason: TerminationReason,
    pub tolerance_satisfied: ToleranceSatisfied,
    pub stencil: Stencil,
    pub algorithm_name: &'static str,
}

impl RootFindingReport {
    /// Internal constructor used by every solver on exit.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn finish(
        algorithm: Algorithm,
        root: f64,
        f_root: f64,
        iterations: usize,
        evaluations: usize,
        termination_reason: TerminationReason,
        tolerance_satisfied: ToleranceSatisfied,
        stencil: Stencil,
    ) -> Self {
        Self {
            root,
            f_root,
            iterations,
            evaluations,
            termination_reason,
            tolerance_satisfied,
            stencil,
            algorithm_name: algorithm.algorithm_name(),
        }
    }
}
