//! Terminal reporting.

pub mod format;

pub use format::{format_check_table, format_file_summary, format_run_summary, CheckRow};
