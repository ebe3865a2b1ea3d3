use numera::interpolation::errors::InterpolationError;
use numera::interpolation::hermite::{interpolate, HermiteCfg};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

// data sampled from f(x) = x^2, f'(x) = 2x; the osculating interpolant
// of this data is x^2 itself
const X: [f64; 5] = [0.0, 1.0, 3.0, 4.0, 6.0];
const Y: [f64; 5] = [0.0, 1.0, 9.0, 16.0, 36.0];
const DY: [f64; 5] = [0.0, 2.0, 6.0, 8.0, 12.0];

#[test]
fn reproduces_values_at_nodes() -> TestResult {
    let x_eval = [0.0, 3.0, 6.0];

    let cfg = HermiteCfg::new()
        .set_x(&X)?
        .set_y(&Y)?
        .set_dy(&DY)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "hermite");
    assert!(approx_eq(rep.evaluated[0], 0.0));
    assert!(approx_eq(rep.evaluated[1], 9.0));
    assert!(approx_eq(rep.evaluated[2], 36.0));
    Ok(())
}

#[test]
fn reproduces_square_between_nodes() -> TestResult {
    let x_eval = [1.0, 2.0, 5.0];

    let cfg = HermiteCfg::new()
        .set_x(&X)?
        .set_y(&Y)?
        .set_dy(&DY)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 1.0));
    assert!(approx_eq(rep.evaluated[1], 4.0));
    assert!(approx_eq(rep.evaluated[2], 25.0));
    Ok(())
}

#[test]
fn two_points_cubic_hermite() -> TestResult {
    // f(x) = x^2 on two nodes; 2n - 1 = 3, still reproduces x^2
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    let dy = [0.0, 2.0];
    let x_eval = [0.5];

    let cfg = HermiteCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_dy(&dy)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert!(approx_eq(rep.evaluated[0], 0.25));
    Ok(())
}

#[test]
fn extrapolation_is_out_of_bounds() {
    let x_eval = [-1.0];

    let cfg = HermiteCfg::new()
        .set_x(&X).unwrap()
        .set_y(&Y).unwrap()
        .set_dy(&DY).unwrap()
        .set_x_eval(&x_eval).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, .. } if got == -1.0));
}

#[test]
fn missing_dy_error() {
    let cfg = HermiteCfg::new()
        .set_x(&X).unwrap()
        .set_y(&Y).unwrap();

    let err = interpolate(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::MissingDerivatives));
}

#[test]
fn dy_length_mismatch_error() {
    let dy = [0.0, 2.0];
    let err = HermiteCfg::new()
        .set_x(&X).unwrap()
        .set_dy(&dy)
        .unwrap_err();
    assert!(matches!(
        err,
        InterpolationError::DerivativeLengthMismatch { x_len: 5, dy_len: 2 }
    ));
}

#[test]
fn non_finite_dy_error() {
    let dy = [0.0, f64::INFINITY, 6.0, 8.0, 12.0];
    let err = HermiteCfg::new()
        .set_x(&X).unwrap()
        .set_dy(&dy)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn empty_x_eval_ok() -> TestResult {
    let cfg = HermiteCfg::new()
        .set_x(&X)?
        .set_y(&Y)?
        .set_dy(&DY)?
        .set_x_eval(&[])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_provided, 5);
    assert_eq!(rep.n_evaluated, 0);
    Ok(())
}
