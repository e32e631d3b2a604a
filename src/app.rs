//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the evaluation pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{CheckArgs, Command, ComputeArgs, PlotArgs};
use crate::domain::{EnergyLevel, EvalConfig};
use crate::error::AppError;
use crate::report::CheckRow;

pub mod pipeline;

/// Entry point for the `qho` binary.
pub fn run() -> Result<(), AppError> {
    // We want `qho` and `qho -n 12` to behave like `qho tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Compute(args) => handle_compute(args),
        Command::Check(args) => handle_check(args),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_compute(args: ComputeArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args)?;
    let run = pipeline::evaluate(&config)?;

    println!("{}", crate::report::format_run_summary(&run));

    if config.plot {
        let plot = crate::plot::render_ascii_plot(&run, config.plot_width, config.plot_height);
        println!("{plot}");
    }

    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run)?;
    }
    if let Some(path) = &config.export_density {
        crate::io::density::write_density_json(path, &run)?;
    }

    Ok(())
}

fn handle_check(args: CheckArgs) -> Result<(), AppError> {
    let rows = check_rows(&args)?;
    println!("{}", crate::report::format_check_table(&rows));
    Ok(())
}

/// Build one sweep row per level in `0..=max_level`.
///
/// The sweep bound goes through the same cap validation as a single level,
/// before the row buffer is sized from it; an over-cap bound is a usage
/// error and nothing gets evaluated.
fn check_rows(args: &CheckArgs) -> Result<Vec<CheckRow>, AppError> {
    let top = EnergyLevel::new(args.max_level)?;

    let mut rows = Vec::with_capacity(top.get() as usize + 1);
    for n in 0..=top.get() {
        let config = EvalConfig {
            level: EnergyLevel::new(n)?,
            grid_points: args.grid_points,
            ..EvalConfig::default()
        };
        let run = pipeline::evaluate(&config)?;
        rows.push(CheckRow {
            level: n,
            energy: run.config.level.energy(),
            quantum: run.quantum_norm,
            classical: run.classical_norm,
            rescaled: run.classical_rescaled,
            peak: crate::models::y_max(&run.quantum),
        });
    }

    Ok(rows)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let density = crate::io::density::read_density_json(&args.density)?;

    print!("{}", crate::report::format_file_summary(&density));
    let plot = crate::plot::render_ascii_plot_from_density_file(&density, args.width, args.height);
    println!("{plot}");
    Ok(())
}

fn handle_tui(args: ComputeArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

/// Build the pipeline config from CLI arguments, validating the level cap.
pub fn eval_config_from_args(args: &ComputeArgs) -> Result<EvalConfig, AppError> {
    Ok(EvalConfig {
        level: EnergyLevel::new(args.level)?,
        grid_points: args.grid_points,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_density: args.export_density.clone(),
    })
}

/// Rewrite argv so `qho` defaults to `qho tui`.
///
/// Rules:
/// - `qho`                      -> `qho tui`
/// - `qho -n 12 ...`            -> `qho tui -n 12 ...`
/// - `qho --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "compute" | "check" | "plot" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
