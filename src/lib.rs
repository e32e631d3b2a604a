//! `qho-density` library crate.
//!
//! Quantum harmonic oscillator probability densities, side by side with the
//! classical distribution at the same energy. The binary (`qho`) is a thin
//! wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod tui;
