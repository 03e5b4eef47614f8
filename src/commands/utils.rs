use crate::output::{format_sequence, read_report, ReportRequest};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported schema version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    for record in &report.results {
        record
            .result
            .verify()
            .context("Report contains an inconsistent result")?;

        if record.sequence_str != format_sequence(record.result.sequence()) {
            anyhow::bail!(
                "sequence_str for {} does not match its sequence",
                record.result.starting_number()
            );
        }
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    match report.request {
        ReportRequest::Single { number } => println!("  Request: single number {}", number),
        ReportRequest::Range { start, end } => println!("  Request: range {} to {}", start, end),
    }
    println!("  Results: {}", report.results.len());
    println!("  Skipped: {}", report.failures.len());
    println!("  Insights: {}", if report.insights.is_some() { "yes" } else { "no" });

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Collatz Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  request: object            - {{kind: single, number}} or {{kind: range, start, end}}");
        println!("  results: array             - One entry per analyzed number");
        println!("    starting_number: number");
        println!("    sequence: array          - Full trajectory, ends with 1");
        println!("    sequence_str: string     - Arrow-joined trajectory");
        println!("    sequence_length: number");
        println!("    max_value: number        - Peak value");
        println!("    steps_to_peak: number    - Index of the first peak");
        println!("    total_steps: number");
        println!("    execution_time: number   - Seconds");
        println!("    timestamp: string");
        println!("  failures: array?           - Skipped numbers with reasons");
        println!("  insights: object?          - Range statistics and rankings");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Collatz Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Collatz sequence analysis: per-number metrics and range statistics.");
}
