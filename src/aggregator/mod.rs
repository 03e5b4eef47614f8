//! Aggregation of per-number results into range insights.
//!
//! This module transforms analyzed sequences into:
//! - Scalar statistics (mean/min/max of length, peak, steps to peak, timing)
//! - Stable top-K rankings
//! - Distribution statistics and a correlation matrix
//! - Outlier findings

pub mod distribution;
pub mod findings;
pub mod metrics;
pub mod ranking;

// Re-export main types and functions
pub use distribution::{CorrelationMatrix, Distribution};
pub use findings::Findings;
pub use metrics::{build_insights, ExecutionStatistics, RangeInsights, RunningStats};
pub use ranking::{top_by, RankEntry, TopK};
