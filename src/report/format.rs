//! Reporting utilities: formatted terminal output for runs and sweeps.
//!
//! We keep formatting code in one place so:
//! - the math/model code stays clean and testable
//! - output changes are localized (the ASCII plot has its own module)

use crate::app::pipeline::RunOutput;
use crate::domain::{DensityFile, NormalizationReport};

/// One row of the normalization sweep table.
#[derive(Debug, Clone)]
pub struct CheckRow {
    pub level: u32,
    pub energy: f64,
    pub quantum: NormalizationReport,
    pub classical: NormalizationReport,
    pub rescaled: bool,
    /// Peak of the quantum density, the value the y-range is derived from.
    pub peak: f64,
}

/// Format the full run summary (level data + normalization diagnostics).
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();
    let level = run.config.level;

    out.push_str("=== qho - harmonic oscillator probability density ===\n");
    out.push_str(&format!("Level : n={level}\n"));
    out.push_str(&format!("Energy: E={:.1} (units of ħω)\n", level.energy()));
    out.push_str(&format!("Turning points: x=±{:.4}\n", run.turning_point));
    out.push_str(&format!(
        "Grid  : {} points over x=[{:.4}, {:.4}]\n",
        run.grid.len(),
        run.x_range.0,
        run.x_range.1
    ));

    out.push_str("\nNormalization:\n");
    out.push_str(&format!("- quantum  : {}\n", fmt_norm(&run.quantum_norm)));
    out.push_str(&format!(
        "- classical: {}{}\n",
        fmt_norm(&run.classical_norm),
        if run.classical_rescaled {
            " -> rescaled for display"
        } else {
            ""
        }
    ));

    if !run.diagnostics.is_empty() {
        out.push_str("\nDiagnostics:\n");
        for d in &run.diagnostics {
            out.push_str(&format!("- {d}\n"));
        }
    }

    out
}

/// Format the normalization sweep as a fixed-width table.
pub fn format_check_table(rows: &[CheckRow]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>5} {:>8} {:>12} {:>9} {:>12} {:>9} {:>9}  {:<18}\n",
        "n", "energy", "quantum", "drift", "classical", "drift", "peak", "status"
    ));
    out.push_str(&format!(
        "{:->5} {:->8} {:->12} {:->9} {:->12} {:->9} {:->9}  {:->18}\n",
        "", "", "", "", "", "", "", ""
    ));

    for row in rows {
        let status = match (row.quantum.within_tolerance, row.classical.within_tolerance) {
            (true, true) => "ok",
            (false, true) => "quantum drift",
            (true, false) => "classical rescaled",
            (false, false) => "both drifted",
        };
        out.push_str(&format!(
            "{:>5} {:>8.1} {:>12.6} {:>8.3}% {:>12.6} {:>8.3}% {:>9.4}  {:<18}\n",
            row.level,
            row.energy,
            row.quantum.integral,
            drift_pct(&row.quantum),
            row.classical.integral,
            drift_pct(&row.classical),
            row.peak,
            status
        ));
    }

    let quantum_drifted = rows.iter().filter(|r| !r.quantum.within_tolerance).count();
    let rescaled = rows.iter().filter(|r| r.rescaled).count();
    out.push_str(&format!(
        "\nLevels checked: {} | quantum drift beyond tolerance: {} | classical rescaled: {}\n",
        rows.len(),
        quantum_drifted,
        rescaled
    ));

    out
}

/// One-paragraph summary of a density file loaded from disk.
pub fn format_file_summary(file: &DensityFile) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Loaded n={} (E={:.1}, turning points ±{:.4}), {} grid points\n",
        file.level,
        file.energy,
        file.turning_point,
        file.grid.x.len()
    ));
    out.push_str(&format!(
        "Stored integrals: quantum={:.6}, classical={:.6}{}\n",
        file.quantum_integral,
        file.classical_integral,
        if file.classical_rescaled {
            " (rescaled)"
        } else {
            ""
        }
    ));
    out
}

fn fmt_norm(report: &NormalizationReport) -> String {
    let status = if report.within_tolerance {
        "ok"
    } else {
        "outside 1% tolerance"
    };
    format!("integral={:.6} [{status}]", report.integral)
}

fn drift_pct(report: &NormalizationReport) -> f64 {
    (report.integral - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::evaluate;
    use crate::domain::{EnergyLevel, EvalConfig};

    fn run(n: u32) -> RunOutput {
        let config = EvalConfig {
            level: EnergyLevel::new(n).unwrap(),
            ..EvalConfig::default()
        };
        evaluate(&config).unwrap()
    }

    #[test]
    fn summary_carries_the_key_facts() {
        let summary = format_run_summary(&run(4));
        assert!(summary.contains("n=4"));
        assert!(summary.contains("E=4.5"));
        assert!(summary.contains("±3.0000"));
        assert!(summary.contains("1000 points"));
        assert!(summary.contains("rescaled for display"));
    }

    #[test]
    fn summary_flags_quantum_drift_on_coarse_grids() {
        let config = EvalConfig {
            level: EnergyLevel::new(2).unwrap(),
            grid_points: 8,
            ..EvalConfig::default()
        };
        let summary = format_run_summary(&evaluate(&config).unwrap());
        assert!(summary.contains("outside 1% tolerance"));
        assert!(summary.contains("Diagnostics:"));
    }

    #[test]
    fn check_table_has_header_rows_and_totals() {
        let rows = vec![
            CheckRow {
                level: 0,
                energy: 0.5,
                quantum: NormalizationReport {
                    integral: 0.9998,
                    within_tolerance: true,
                },
                classical: NormalizationReport {
                    integral: 0.9653,
                    within_tolerance: false,
                },
                rescaled: true,
                peak: 0.5642,
            },
            CheckRow {
                level: 1,
                energy: 1.5,
                quantum: NormalizationReport {
                    integral: 1.0001,
                    within_tolerance: true,
                },
                classical: NormalizationReport {
                    integral: 0.9701,
                    within_tolerance: false,
                },
                rescaled: true,
                peak: 0.4151,
            },
        ];

        let table = format_check_table(&rows);
        assert!(table.contains("status"));
        assert!(table.contains("peak"));
        assert!(table.contains("0.5642"));
        assert!(table.contains("classical rescaled"));
        assert!(table.contains("Levels checked: 2"));
        assert!(table.contains("classical rescaled: 2"));
        assert_eq!(table.lines().count(), 2 + 2 + 2);
    }
}
