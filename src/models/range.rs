//! Plot-range selection.
//!
//! Both axes derive from the physics rather than from fixed bounds: the x
//! axis tracks the classical turning points (which grow like `√(2n+1)`), the
//! y axis tracks the quantum density peak. A fixed margin keeps the
//! exponential tails and the peak off the frame edges.

use crate::domain::EnergyLevel;

/// Margin applied beyond the turning points (x) and the density peak (y).
pub const RANGE_FACTOR: f64 = 1.2;

/// Symmetric x interval covering the classically allowed region with margin.
pub fn x_range(level: EnergyLevel) -> (f64, f64) {
    let half_width = RANGE_FACTOR * level.turning_point();
    (-half_width, half_width)
}

/// Largest value in a density slice, 0 for an empty slice.
pub fn y_max(density: &[f64]) -> f64 {
    density.iter().copied().fold(0.0, f64::max)
}

/// y interval from zero to the density peak with margin.
pub fn y_range(density: &[f64]) -> (f64, f64) {
    (0.0, RANGE_FACTOR * y_max(density))
}
