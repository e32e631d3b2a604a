//! Debug bundle writer for inspecting evaluations across levels.
//!
//! A bundle is a single markdown file: the current run's configuration, a
//! normalization sweep over every level up to the current one, and sampled
//! density values. Useful when a drift report needs investigating outside
//! the terminal.

use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::pipeline::{evaluate, RunOutput};
use crate::domain::{EnergyLevel, EvalConfig};
use crate::error::AppError;

pub fn write_debug_bundle(run: &RunOutput) -> Result<PathBuf, AppError> {
    write_debug_bundle_to(Path::new("debug"), run)
}

fn write_debug_bundle_to(dir: &Path, run: &RunOutput) -> Result<PathBuf, AppError> {
    create_dir_all(dir)
        .map_err(|e| AppError::runtime(format!("Failed to create debug dir: {e}")))?;

    let level = run.config.level;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("qho_debug_n{}_{ts}.md", level.get()));

    let mut file = File::create(&path)
        .map_err(|e| AppError::runtime(format!("Failed to create debug file: {e}")))?;

    writeln!(file, "# qho debug bundle").map_err(io_err)?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339()).map_err(io_err)?;
    writeln!(file, "- level: n={}", level.get()).map_err(io_err)?;
    writeln!(file, "- energy: {:.1}", level.energy()).map_err(io_err)?;
    writeln!(file, "- turning_point: {:.6}", run.turning_point).map_err(io_err)?;
    writeln!(file, "- grid_points: {}", run.grid.len()).map_err(io_err)?;
    writeln!(
        file,
        "- x_range: [{:.6}, {:.6}]",
        run.x_range.0, run.x_range.1
    )
    .map_err(io_err)?;

    writeln!(file, "\n## Normalization sweep (n = 0..={})", level.get()).map_err(io_err)?;
    writeln!(file, "| n | quantum | drift | classical | drift | rescaled |").map_err(io_err)?;
    writeln!(file, "| - | - | - | - | - | - |").map_err(io_err)?;
    for k in 0..=level.get() {
        let config = EvalConfig {
            level: EnergyLevel::new(k)?,
            grid_points: run.config.grid_points,
            ..EvalConfig::default()
        };
        let sweep = evaluate(&config)?;
        writeln!(
            file,
            "| {k} | {:.6} | {:+.3}% | {:.6} | {:+.3}% | {} |",
            sweep.quantum_norm.integral,
            (sweep.quantum_norm.integral - 1.0) * 100.0,
            sweep.classical_norm.integral,
            (sweep.classical_norm.integral - 1.0) * 100.0,
            sweep.classical_rescaled
        )
        .map_err(io_err)?;
    }

    writeln!(file, "\n## Sampled densities").map_err(io_err)?;
    writeln!(file, "| x | psi | quantum | classical |").map_err(io_err)?;
    writeln!(file, "| - | - | - | - |").map_err(io_err)?;
    let len = run.grid.len();
    for idx in [0, len / 4, len / 2, 3 * len / 4, len - 1] {
        writeln!(
            file,
            "| {:.6} | {:.6} | {:.6} | {:.6} |",
            run.grid[idx], run.psi[idx], run.quantum[idx], run.classical[idx]
        )
        .map_err(io_err)?;
    }

    if !run.diagnostics.is_empty() {
        writeln!(file, "\n## Diagnostics").map_err(io_err)?;
        for d in &run.diagnostics {
            writeln!(file, "- {d}").map_err(io_err)?;
        }
    }

    Ok(path)
}

fn io_err(e: std::io::Error) -> AppError {
    AppError::runtime(format!("Failed to write debug file: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_contains_sweep_and_samples() {
        let config = EvalConfig {
            level: EnergyLevel::new(3).unwrap(),
            grid_points: 64,
            ..EvalConfig::default()
        };
        let run = evaluate(&config).unwrap();

        let dir = std::env::temp_dir().join(format!("qho_debug_test_{}", std::process::id()));
        let path = write_debug_bundle_to(&dir, &run).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);

        assert!(text.contains("# qho debug bundle"));
        assert!(text.contains("- level: n=3"));
        assert!(text.contains("## Normalization sweep (n = 0..=3)"));
        // Sweep rows for n = 0, 1, 2, 3 plus the sampled-density rows.
        assert!(text.lines().filter(|l| l.starts_with("| ")).count() >= 4 + 5);
        assert!(text.contains("## Sampled densities"));
    }
}
