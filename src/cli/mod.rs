//! Command-line parsing for the oscillator density explorer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{DEFAULT_GRID_POINTS, DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "qho",
    version,
    about = "Quantum harmonic oscillator probability density explorer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one energy level, print the summary, and optionally plot/export.
    Compute(ComputeArgs),
    /// Sweep normalization over a range of levels (useful for scripting).
    Check(CheckArgs),
    /// Plot a previously exported density JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same evaluation pipeline as `qho compute`, but renders
    /// the densities in a terminal UI using Ratatui.
    Tui(ComputeArgs),
}

/// Common options for evaluating a level.
#[derive(Debug, Parser, Clone)]
pub struct ComputeArgs {
    /// Energy level n (quantum number, 0-based).
    #[arg(short = 'n', long, default_value_t = 0)]
    pub level: u32,

    /// Number of position grid points.
    #[arg(long, default_value_t = DEFAULT_GRID_POINTS)]
    pub grid_points: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
    pub height: usize,

    /// Export per-point results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export both densities (grid + metadata) to JSON.
    #[arg(long = "export-density")]
    pub export_density: Option<PathBuf>,
}

/// Options for the normalization sweep.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Highest level to sweep (inclusive, starting from n = 0).
    #[arg(long, default_value_t = 100)]
    pub max_level: u32,

    /// Number of position grid points per level.
    #[arg(long, default_value_t = DEFAULT_GRID_POINTS)]
    pub grid_points: usize,
}

/// Options for plotting a saved density file.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Density JSON file produced by `qho compute --export-density`.
    #[arg(long, value_name = "JSON")]
    pub density: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = DEFAULT_PLOT_HEIGHT)]
    pub height: usize,
}
