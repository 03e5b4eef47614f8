//! Output writers for analysis data.
//!
//! This module handles writing data to disk and the terminal:
//! - Versioned JSON reports
//! - CSV exports (without the raw sequence)
//! - Text summaries

pub mod csv;
pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use csv::{results_to_csv, write_csv};
pub use json::{read_report, report_to_string, write_report};
pub use schema::{Report, ReportRequest, ResultRecord};
pub use text::{format_sequence, format_sequence_preview, render_insights_summary, render_result_summary};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create parent directories if needed
fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Calculate file size in bytes
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
