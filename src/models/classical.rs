//! Classical position distribution of an oscillator at energy `E_n`.
//!
//! A classical particle with energy `E` spends most of its time near the
//! turning points `±√(2E)` where it moves slowly. Its time-averaged position
//! density is
//!
//! ```text
//! ρ(x) = 1 / (π·√(2E - x²))   for x² < 2E,   0 otherwise
//! ```
//!
//! The density diverges at the turning points themselves, but the divergence
//! is integrable: the total probability mass is still 1. Points on or past
//! the turning points are classically unreachable and get exactly zero, never
//! a NaN from a negative square root.

use std::f64::consts::PI;

use crate::domain::EnergyLevel;

/// Classification of a grid point against the turning points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    /// `x² < 2E`: the particle passes through here.
    Allowed,
    /// `x² ≥ 2E`: out of reach at this energy.
    Forbidden,
}

fn classify(xi: f64, two_e: f64) -> Region {
    if xi * xi < two_e {
        Region::Allowed
    } else {
        Region::Forbidden
    }
}

/// Evaluate the classical density at energy `E_n` on a position grid.
pub fn classical_distribution(level: EnergyLevel, x: &[f64]) -> Vec<f64> {
    let two_e = 2.0 * level.energy();
    x.iter()
        .map(|&xi| match classify(xi, two_e) {
            Region::Allowed => 1.0 / (PI * (two_e - xi * xi).sqrt()),
            Region::Forbidden => 0.0,
        })
        .collect()
}
