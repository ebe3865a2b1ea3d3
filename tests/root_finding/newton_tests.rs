//! tests for the newton-raphson root finding algorithm
use numera::root_finding::newton::{newton, NewtonCfg, NewtonError};
use numera::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), NewtonError>;
type NoDerivative = fn(f64) -> f64;

#[test]
fn finds_fixed_point_of_exp_decay() -> TestResult {
    // e^{-x} = x has its root at ~0.5671432904097838
    let f = |x: f64| (-x).exp() - x;
    let df = |x: f64| -(-x).exp() - 1.0;

    let res = newton(f, Some(df), 0.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 0.567_143_290_409_783_8).abs() <= 1e-9);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_2_from_quadratic() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, Some(df), 3.0, NewtonCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0).abs() <= 1e-9);
    Ok(())
}

#[test]
fn finite_difference_fallback_matches_analytic() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let cfg = NewtonCfg::new();

    let res = newton(f, None::<NoDerivative>, 3.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0).abs() <= 1e-7);
    // central differences spend two extra evaluations per iteration
    assert!(res.evaluations > res.iterations);
    Ok(())
}

#[test]
fn rootless_function_hits_iteration_limit() -> TestResult {
    let f = |x: f64| x * x + 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_iter(8)?;

    let res = newton(f, Some(df), 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 8);
    Ok(())
}

#[test]
fn guess_already_root_iterations_0() -> TestResult {
    let f = |x: f64| x;
    let df = |_x: f64| 1.0;

    let res = newton(f, Some(df), 0.0, NewtonCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn vanishing_derivative_errors() {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeTooSmall { x, dfx } if x == 0.0 && dfx == 0.0));
}

#[test]
fn non_finite_analytic_derivative_errors() {
    let f = |x: f64| x - 1.0;
    let df = |_x: f64| f64::NAN;

    let err = newton(f, Some(df), 0.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::DerivativeNotFinite { .. }));
}

#[test]
fn nan_guess_rejected() {
    let f = |x: f64| x;
    let err = newton(f, None::<NoDerivative>, f64::NAN, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { .. }));
}

#[test]
fn max_step_clipping_still_converges() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_max_step(0.5)?;

    let res = newton(f, Some(df), 5.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0).abs() <= 1e-9);
    // the clipped walk from 5 toward 2 needs at least 6 iterations
    assert!(res.iterations >= 6);
    Ok(())
}

#[test]
fn invalid_max_step_rejected() {
    let err = NewtonCfg::new().set_max_step(0.0).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidMaxStep { .. }));
}

#[test]
fn stencil_holds_previous_iterate() -> TestResult {
    let f = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, Some(df), 3.0, NewtonCfg::new())?;

    let stencil = res.stencil.stencil();
    assert_eq!(stencil.len(), 1);
    assert!(stencil[0].is_finite());
    Ok(())
}
