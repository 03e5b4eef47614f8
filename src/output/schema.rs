//! Output JSON schema definitions for analysis reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use super::text::format_sequence;
use crate::aggregator::RangeInsights;
use crate::analyzer::{FailedInput, RangeReport};
use crate::sequence::SequenceResult;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,

    /// What was asked for
    pub request: ReportRequest,

    /// One record per analyzed number, ascending
    pub results: Vec<ResultRecord>,

    /// Numbers skipped during a range analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedInput>,

    /// Aggregate statistics (range requests only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<RangeInsights>,
}

/// The request a report answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRequest {
    Single { number: u64 },
    Range { start: u64, end: u64 },
}

/// A result with its sequence rendered as text alongside the full list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(flatten)]
    pub result: SequenceResult,

    /// Arrow-joined sequence, e.g. "4 → 2 → 1"
    pub sequence_str: String,
}

impl From<&SequenceResult> for ResultRecord {
    fn from(result: &SequenceResult) -> Self {
        Self {
            sequence_str: format_sequence(result.sequence()),
            result: result.clone(),
        }
    }
}

impl Report {
    /// Report for a single number
    pub fn single(result: &SequenceResult) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            request: ReportRequest::Single {
                number: result.starting_number(),
            },
            results: vec![ResultRecord::from(result)],
            failures: Vec::new(),
            insights: None,
        }
    }

    /// Report for a range request
    pub fn range(report: &RangeReport) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            request: ReportRequest::Range {
                start: report.start,
                end: report.end,
            },
            results: report.results.iter().map(ResultRecord::from).collect(),
            failures: report.failures.clone(),
            insights: Some(report.insights.clone()),
        }
    }
}
