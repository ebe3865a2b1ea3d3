//! Divided-difference tables shared by the Newton and Hermite methods.

/// Computes Newton divided-difference coefficients in place.
///
/// Returns `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`.
pub(crate) fn divided_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut c = y.to_vec();

    for j in 1..n {
        for i in (j..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - j]);
        }
    }

    c
}

/// Builds the Hermite table on doubled nodes.
///
/// Each data point `x[i]` appears twice in the node vector `z`
/// (`z[2i] = z[2i+1] = x[i]`). First-order differences at repeated nodes
/// are the supplied derivatives `dy[i]`; higher orders follow the usual
/// recurrence. Returns `(z, c)` with `c` the Newton-form coefficients
/// over `z`.
pub(crate) fn hermite_table(x: &[f64], y: &[f64], dy: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len();
    let m = 2 * n;

    let mut z = vec![0.0; m];
    let mut c = vec![0.0; m];
    for i in 0..n {
        z[2 * i] = x[i];
        z[2 * i + 1] = x[i];
        c[2 * i] = y[i];
        c[2 * i + 1] = y[i];
    }

    // first-order column: derivative at repeated nodes (odd i pairs with
    // its twin), slope otherwise; descending order keeps c[i - 1] untouched
    for i in (1..m).rev() {
        if i % 2 == 1 {
            c[i] = dy[i / 2];
        } else {
            c[i] = (c[i] - c[i - 1]) / (z[i] - z[i - 1]);
        }
    }

    // higher-order columns; z[i] != z[i - j] for j >= 2 since only
    // adjacent nodes repeat
    for j in 2..m {
        for i in (j..m).rev() {
            c[i] = (c[i] - c[i - 1]) / (z[i] - z[i - j]);
        }
    }

    (z, c)
}

/// Evaluates a Newton-form polynomial with coefficients `c` over
/// centers `nodes` at `xq` using Horner's nested scheme.
#[inline]
pub(crate) fn horner_newton(c: &[f64], nodes: &[f64], xq: f64) -> f64 {
    let n = c.len();
    let mut p = c[n - 1];
    for j in (0..n - 1).rev() {
        p = c[j] + (xq - nodes[j]) * p;
    }
    p
}
