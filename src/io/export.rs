//! Export per-point results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per grid point, wavefunction and both densities side by
//! side.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::RunOutput;
use crate::error::AppError;

/// Write per-point results to a CSV file.
pub fn write_results_csv(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::runtime(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writeln!(file, "index,x,psi,quantum_density,classical_density")
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV header: {e}")))?;

    for i in 0..run.grid.len() {
        writeln!(
            file,
            "{},{:.10},{:.10},{:.10},{:.10}",
            i, run.grid[i], run.psi[i], run.quantum[i], run.classical[i],
        )
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
