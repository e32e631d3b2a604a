//! Trapezoidal integration of tabulated values.
//!
//! The normalization check integrates a density over its grid. The grid is
//! uniform in practice, but the rule is written for any strictly increasing
//! abscissa so saved density files replay exactly.

/// Definite integral of `y` over `x` by the composite trapezoidal rule.
///
/// Grids with fewer than two points integrate to zero.
///
/// # Panics
/// Panics if `x` and `y` differ in length. Callers build both from the same
/// grid, so a mismatch is a programming error.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(
        x.len(),
        y.len(),
        "trapezoid: grid and values must have equal length"
    );

    let mut sum = 0.0;
    for i in 1..x.len() {
        sum += 0.5 * (y[i - 1] + y[i]) * (x[i] - x[i - 1]);
    }
    sum
}
