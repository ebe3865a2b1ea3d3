use numera::interpolation::errors::InterpolationError;
use numera::interpolation::linear::{interpolate, LinearCfg};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn exact_node_hits() -> TestResult {
    let x = [0.0, 1.0, 3.0, 4.0, 6.0];
    let y = [0.0, 2.0, 1.0, 5.0, 4.0];
    let x_eval = [0.0, 1.0, 3.0, 4.0, 6.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "linear");
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_evaluated, 5);
    for (got, want) in rep.evaluated.iter().zip(y.iter()) {
        assert!(approx_eq(*got, *want));
    }
    Ok(())
}

#[test]
fn segment_midpoints() -> TestResult {
    let x = [0.0, 1.0, 3.0, 4.0, 6.0];
    let y = [0.0, 2.0, 1.0, 5.0, 4.0];
    let x_eval = [0.5, 2.0, 5.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 1.0));
    assert!(approx_eq(rep.evaluated[1], 1.5));
    assert!(approx_eq(rep.evaluated[2], 4.5));
    Ok(())
}

#[test]
fn upper_endpoint_returns_last_y() -> TestResult {
    let x = [0.0, 2.0, 5.0];
    let y = [1.0, 4.0, 9.0];
    let x_eval = [5.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 9.0));
    Ok(())
}

#[test]
fn extrapolation_low_is_out_of_bounds() {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0, 1.0];
    let x_eval = [-1.0];

    let cfg = LinearCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, x_min, x_max }
        if got == -1.0 && x_min == 0.0 && x_max == 3.0));
}

#[test]
fn extrapolation_high_is_out_of_bounds() {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0, 1.0];
    let x_eval = [7.0];

    let cfg = LinearCfg::new()
        .set_x(&x).unwrap()
        .set_y(&y).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, .. } if got == 7.0));
}

#[test]
fn unequal_length_error() {
    let x = [0.0, 1.0, 3.0];
    let y = [0.0, 2.0];
    let cfg = LinearCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn repeated_x_error() {
    let x = [0.0, 2.0, 2.0, 4.0];
    let err = LinearCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::DuplicateX { .. } | InterpolationError::NonIncreasingX
    ));
}

#[test]
fn single_point_insufficient() {
    let x = [1.0];
    let err = LinearCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn non_finite_input_error() {
    let x = [0.0, f64::NAN, 2.0];
    let err = LinearCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn missing_y_is_empty_input() {
    let x = [0.0, 1.0];
    let cfg = LinearCfg::new().set_x(&x).unwrap();
    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn negative_zero_eval_point_hits_first_node() -> TestResult {
    // -0.0 == 0.0 under IEEE comparison, so it is in range; it must
    // resolve to the node value, not fall off the front of the grid
    let x = [0.0, 1.0, 3.0];
    let y = [5.0, 2.0, 1.0];
    let x_eval = [-0.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 5.0));
    Ok(())
}

#[test]
fn positive_zero_hits_trailing_negative_zero_node() -> TestResult {
    let x = [-2.0, -1.0, -0.0];
    let y = [4.0, 1.0, 7.0];
    let x_eval = [0.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 7.0));
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> TestResult {
    let x = [0.0, 1.0];
    let y = [3.0, 5.0];

    let cfg = LinearCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}
