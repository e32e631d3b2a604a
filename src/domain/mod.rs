//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the validated energy level (`EnergyLevel`) and its derived scalars
//! - per-run configuration (`EvalConfig`)
//! - normalization diagnostics (`NormalizationReport`)
//! - the density export schema (`DensityFile`, `DensityGrid`)

pub mod types;

pub use types::*;
