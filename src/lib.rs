//! Collatz Studio
//!
//! Collatz ("3n + 1") sequence generation, per-number metrics and
//! range-level statistics.
//!
//! This crate provides the core implementation for the `collatz` CLI tool.
//!
//! ## Getting Started
//!
//! ```
//! use collatz_studio::analyzer::analyze_range;
//! use collatz_studio::sequence::analyze_one;
//!
//! let result = analyze_one(27).unwrap();
//! assert_eq!(result.total_steps(), 111);
//!
//! let report = analyze_range(5, 2).unwrap();
//! assert_eq!(report.results.len(), 4);
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod commands;
pub mod output;
pub mod sequence;
pub mod utils;
