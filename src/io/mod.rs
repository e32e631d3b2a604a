//! File input/output: density JSON snapshots and CSV exports.

pub mod density;
pub mod export;
