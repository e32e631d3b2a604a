//! Shared domain types.
//!
//! These types are intentionally kept lightweight and (where exported)
//! serializable so they can be:
//!
//! - used in-memory during evaluation
//! - exported to JSON/CSV
//! - reloaded later for plotting or comparisons

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Highest energy level the evaluator accepts.
///
/// The Hermite recurrence is evaluated on raw `H_n(x)` values, which grow
/// roughly like `(2x)^n` at the edge of the plotted range. At the default
/// 20%-extended range that stays inside f64 up to n ≈ 185; 150 leaves
/// headroom while comfortably covering the 0..=100 range the explorer is
/// designed for.
pub const MAX_LEVEL: u32 = 150;

/// Default number of position grid points per evaluation.
pub const DEFAULT_GRID_POINTS: usize = 1000;

/// Default terminal plot size (columns x rows).
pub const DEFAULT_PLOT_WIDTH: usize = 100;
pub const DEFAULT_PLOT_HEIGHT: usize = 25;

/// Oscillator energy level (quantum number `n`).
///
/// Non-negative by representation (`u32`); construction enforces the
/// `MAX_LEVEL` cap before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EnergyLevel(u32);

impl EnergyLevel {
    pub fn new(n: u32) -> Result<Self, AppError> {
        if n > MAX_LEVEL {
            return Err(AppError::usage(format!(
                "Energy level n={n} exceeds the supported maximum of {MAX_LEVEL}."
            )));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Eigenenergy `E_n = n + 1/2` in natural units (ħ = m = ω = 1).
    pub fn energy(self) -> f64 {
        self.0 as f64 + 0.5
    }

    /// Classical turning point `x_t = √(2n + 1)`: the position where a
    /// classical particle with energy `E_n` has zero kinetic energy.
    pub fn turning_point(self) -> f64 {
        (2.0 * self.0 as f64 + 1.0).sqrt()
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of integrating a density over its grid.
///
/// Transient diagnostic: produced per evaluation, echoed into summaries and
/// exports, never cached across levels.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationReport {
    /// Trapezoidal integral of the density over the grid.
    pub integral: f64,
    /// Whether the integral is within 1% of unity.
    pub within_tolerance: bool,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags or TUI state (plus defaults).
#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub level: EnergyLevel,
    pub grid_points: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_density: Option<PathBuf>,
}

impl Default for EvalConfig {
    /// Ground state on the default grid, plot on, no exports.
    fn default() -> Self {
        Self {
            level: EnergyLevel(0),
            grid_points: DEFAULT_GRID_POINTS,
            plot: true,
            plot_width: DEFAULT_PLOT_WIDTH,
            plot_height: DEFAULT_PLOT_HEIGHT,
            export_results: None,
            export_density: None,
        }
    }
}

/// A saved density file (JSON).
///
/// The "portable" representation of one evaluation: level metadata, both
/// density arrays on their shared grid, and the measured normalization
/// integrals. `qho plot` re-renders these without recomputing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityFile {
    pub tool: String,
    pub level: u32,
    pub energy: f64,
    pub turning_point: f64,
    /// Trapezoidal integral of the quantum density (never rescaled).
    pub quantum_integral: f64,
    /// Trapezoidal integral of the classical density as measured, before
    /// any rescale.
    pub classical_integral: f64,
    /// Whether the stored classical density was divided by its integral.
    pub classical_rescaled: bool,
    pub grid: DensityGrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityGrid {
    pub x: Vec<f64>,
    pub quantum: Vec<f64>,
    pub classical: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_accessors() {
        let n4 = EnergyLevel::new(4).unwrap();
        assert_eq!(n4.get(), 4);
        assert!((n4.energy() - 4.5).abs() < 1e-15);
        // 2*4 + 1 = 9, so the turning point is exactly 3.
        assert!((n4.turning_point() - 3.0).abs() < 1e-15);

        let ground = EnergyLevel::new(0).unwrap();
        assert!((ground.energy() - 0.5).abs() < 1e-15);
        assert!((ground.turning_point() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn level_cap_fails_fast() {
        assert!(EnergyLevel::new(MAX_LEVEL).is_ok());
        let err = EnergyLevel::new(MAX_LEVEL + 1).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
