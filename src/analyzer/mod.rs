//! Range Analyzer.
//!
//! Drives the sequence generator over a validated range, isolates
//! per-number failures and aggregates the successes into insights.

pub mod range;

// Re-export main types and functions
pub use range::{
    analyze_range, analyze_range_with, parse_number, validate_range, FailedInput, RangeReport,
};
