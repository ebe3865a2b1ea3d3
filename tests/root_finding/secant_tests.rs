//! tests for the secant root finding algorithm
use numera::root_finding::errors::RootFindingError;
use numera::root_finding::report::{TerminationReason, ToleranceSatisfied};
use numera::root_finding::secant::{secant, SecantCfg, SecantError};

type TestResult = Result<(), SecantError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let res = secant(f, 0.0, 2.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-9);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn finds_cosine_fixed_point() -> TestResult {
    let f = |x: f64| x.cos() - x;

    let res = secant(f, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!((res.root - 0.739_085_133_215_160_6).abs() <= 1e-9);
    Ok(())
}

#[test]
fn linear_function_one_iteration() -> TestResult {
    let f = |x: f64| 2.0 * x - 6.0;

    let res = secant(f, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.root, 3.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn equal_guesses_rejected() {
    let f = |x: f64| x;
    let err = secant(f, 1.0, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { x0, x1 } if x0 == 1.0 && x1 == 1.0));
}

#[test]
fn non_finite_guess_rejected() {
    let f = |x: f64| x;
    let err = secant(f, f64::INFINITY, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));
}

#[test]
fn guess_already_root_iterations_0() -> TestResult {
    let f = |x: f64| x;

    let res = secant(f, 0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn degenerate_denominator_falls_back_to_half_step() -> TestResult {
    // f(-1) == f(1), so the first intercept is undefined; the half-step
    // fallback lands on 0, which is the root
    let f = |x: f64| x * x;

    let res = secant(f, -1.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn rootless_function_hits_iteration_limit() -> TestResult {
    let f = |x: f64| x * x + 1.0;
    let cfg = SecantCfg::new().set_max_iter(5)?;

    let res = secant(f, 0.0, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 5);
    Ok(())
}

#[test]
fn non_finite_eval() {
    let f = |x: f64| 1.0 / x;
    let err = secant(f, -1.0, 1.0, SecantCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        SecantError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 0.0 && fx.is_infinite()));
}

#[test]
fn stencil_holds_last_pair() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let res = secant(f, 0.0, 2.0, SecantCfg::new())?;

    let stencil = res.stencil.stencil();
    assert_eq!(stencil.len(), 2);
    assert!(stencil.iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn close_guesses_stop_on_step_tolerance() -> TestResult {
    let f = |x: f64| x - 10.0;
    let cfg = SecantCfg::new().set_abs_x(1e-6)?;

    // |x1 - x0| is already below the step tolerance
    let res = secant(f, 1.0, 1.0 + 1e-8, cfg)?;

    assert_eq!(res.iterations, 0);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    Ok(())
}
