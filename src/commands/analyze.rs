//! Analyze and range command implementations.
//!
//! The range command:
//! 1. Validates and normalizes the requested bounds
//! 2. Analyzes every number in the range
//! 3. Aggregates insights
//! 4. Writes output files

use super::models::{AnalyzeArgs, RangeArgs};
use crate::analyzer::{analyze_range_with, parse_number, validate_range};
use crate::output::{
    render_insights_summary, render_result_summary, write_csv, write_report, Report,
};
use crate::sequence::analyze_one_with;
use crate::utils::config::{MAX_SPAN_LIMIT, MAX_TOP_K};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Malformed or non-positive number
/// * A step cap of zero
/// * Overflow or step cap while generating
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    if args.max_steps == Some(0) {
        anyhow::bail!("max_steps must be greater than 0");
    }

    let number = parse_number(&args.number).context("Invalid starting number")?;

    info!("Analyzing sequence for n = {}", number);

    let result = analyze_one_with(number, &args.engine_config())
        .with_context(|| format!("Failed to analyze {}", number))?;

    println!("{}", render_result_summary(&result, args.full_sequence));

    if let Some(path) = &args.output_json {
        write_report(&Report::single(&result), path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    Ok(())
}

/// Execute the range command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid bounds or oversized span
/// * No number in the range could be analyzed
/// * File write errors
pub fn execute_range(args: RangeArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = args.engine_config();

    // Step 1: Validate bounds
    info!("Step 1/4: Validating range...");
    let start = parse_number(&args.start).context("Invalid range start")?;
    let end = parse_number(&args.end).context("Invalid range end")?;
    let (start, end) = validate_range(start, end, &config).context("Invalid range")?;

    debug!("Normalized range: {}..={} (max span {})", start, end, config.max_span);

    // Step 2 and 3: Analyze and aggregate
    info!("Step 2/4: Analyzing {} numbers...", end - start + 1);
    let report = analyze_range_with(start, end, &config)
        .with_context(|| format!("Failed to analyze range {} to {}", start, end))?;

    info!("Step 3/4: Insights: {}", report.insights.summary());

    if report.failure_count() > 0 {
        info!(
            "{} numbers were skipped: {:?}",
            report.failure_count(),
            report.failures.iter().map(|f| f.number).collect::<Vec<_>>()
        );
    }

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");

    if let Some(path) = &args.output_json {
        write_report(&Report::range(&report), path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if let Some(path) = &args.output_csv {
        write_csv(&report.results, path).context("Failed to write CSV export")?;
        info!("✓ CSV written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("RANGE SUMMARY: {} to {}", report.start, report.end);
        println!("{}", "=".repeat(60));
        println!("{}", render_insights_summary(&report.insights));
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Range analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate range arguments
///
/// **Public** - can be called before execute_range for early validation
pub fn validate_range_args(args: &RangeArgs) -> Result<()> {
    if args.top_k == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_k > MAX_TOP_K {
        anyhow::bail!("top is too large (max {})", MAX_TOP_K);
    }

    if args.max_steps == Some(0) {
        anyhow::bail!("max_steps must be greater than 0");
    }

    if args.max_span > MAX_SPAN_LIMIT {
        anyhow::bail!("max_span is too large (max {})", MAX_SPAN_LIMIT);
    }

    let start = parse_number(&args.start).context("Invalid range start")?;
    let end = parse_number(&args.end).context("Invalid range end")?;
    validate_range(start, end, &args.engine_config()).context("Invalid range")?;

    Ok(())
}
