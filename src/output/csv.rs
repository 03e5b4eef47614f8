//! CSV export of per-number metrics.
//!
//! One row per result, columns from `CSV_COLUMNS`. The raw sequence is
//! never written.

use crate::sequence::SequenceResult;
use crate::utils::config::CSV_COLUMNS;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render results as CSV text
///
/// **Public** - header line followed by one row per result
///
/// # Errors
/// * `OutputError::NoData` - nothing to export
pub fn results_to_csv(results: &[SequenceResult]) -> Result<String, OutputError> {
    if results.is_empty() {
        return Err(OutputError::NoData);
    }

    let mut csv = CSV_COLUMNS.join(",");
    csv.push('\n');

    for result in results {
        csv.push_str(&format_row(result));
        csv.push('\n');
    }

    Ok(csv)
}

/// Write results to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Errors
/// * `OutputError::NoData` - nothing to export
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_csv(results: &[SequenceResult], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing CSV to: {}", output_path.display());

    let content = results_to_csv(results)?;

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("CSV written successfully ({} rows)", results.len());

    Ok(())
}

/// Format one CSV row
///
/// **Private** - every field is numeric or a timestamp, so nothing needs quoting
fn format_row(result: &SequenceResult) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        result.starting_number(),
        result.sequence_length(),
        result.max_value(),
        result.steps_to_peak(),
        result.total_steps(),
        result.execution_time(),
        result.timestamp().to_rfc3339()
    )
}
