//! Read/write density JSON files.
//!
//! Density JSON is the "portable" representation of one evaluation:
//! - level metadata (n, energy, turning point)
//! - both density arrays on their shared position grid
//! - the measured normalization integrals and whether the classical curve
//!   was rescaled
//!
//! The schema is defined by `domain::DensityFile`. `qho plot` re-renders
//! these files without recomputing anything.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::domain::{DensityFile, DensityGrid};
use crate::error::AppError;

/// Write a density JSON file.
pub fn write_density_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::runtime(format!(
            "Failed to create density JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, &density_file(run))
        .map_err(|e| AppError::runtime(format!("Failed to write density JSON: {e}")))?;

    Ok(())
}

/// Read a density JSON file.
pub fn read_density_json(path: &Path) -> Result<DensityFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::usage(format!(
            "Failed to open density JSON '{}': {e}",
            path.display()
        ))
    })?;
    let density: DensityFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid density JSON: {e}")))?;
    Ok(density)
}

/// Snapshot an evaluation into the portable schema.
pub fn density_file(run: &RunOutput) -> DensityFile {
    DensityFile {
        tool: "qho-density".to_string(),
        level: run.config.level.get(),
        energy: run.config.level.energy(),
        turning_point: run.turning_point,
        quantum_integral: run.quantum_norm.integral,
        classical_integral: run.classical_norm.integral,
        classical_rescaled: run.classical_rescaled,
        grid: DensityGrid {
            x: run.grid.clone(),
            quantum: run.quantum.clone(),
            classical: run.classical.clone(),
        },
    }
}
