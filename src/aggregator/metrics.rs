//! Calculate range-level insights from per-number results.
//!
//! Everything is accumulated in one pass over the results: running
//! sum/min/max for the scalar statistics, bounded rankings for the top
//! lists, and the metric columns for distribution and correlation.

use super::distribution::{CorrelationMatrix, Distribution, CORRELATION_COLUMNS};
use super::findings::{detect_findings, Findings};
use super::ranking::{RankEntry, TopK};
use crate::sequence::SequenceResult;
use crate::utils::error::AnalysisError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Running count/sum/min/max over integer values
///
/// **Public** - sums are kept in `u128` so they cannot overflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    count: u64,
    sum: u128,
    min: Option<u64>,
    max: Option<u64>,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u64) {
        self.count += 1;
        self.sum += u128::from(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> u128 {
        self.sum
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum as f64 / self.count as f64)
        }
    }
}

/// Timing rollup, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStatistics {
    pub average_execution_time: f64,
    pub total_execution_time: f64,
    pub fastest_execution: f64,
    pub slowest_execution: f64,
}

/// Aggregate view over one range request
///
/// **Public** - returned from `build_insights`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeInsights {
    pub total_numbers_analyzed: usize,

    pub average_sequence_length: f64,
    pub min_sequence_length: usize,
    pub max_sequence_length: usize,

    pub average_max_value: f64,
    pub highest_peak_value: u64,

    pub average_steps_to_peak: f64,

    pub execution_statistics: ExecutionStatistics,

    /// Longest sequences, descending
    pub top_longest: Vec<RankEntry>,

    /// Highest peaks, descending
    pub top_highest_peak: Vec<RankEntry>,

    /// Slowest climbs to the peak, descending
    pub top_steps_to_peak: Vec<RankEntry>,

    pub sequence_length_distribution: Distribution,
    pub max_value_distribution: Distribution,

    /// `None` with fewer than two results
    pub correlations: Option<CorrelationMatrix>,

    pub findings: Findings,
}

impl RangeInsights {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Numbers: {} | Avg length: {:.2} | Longest: {} | Highest peak: {} | Avg steps to peak: {:.2}",
            self.total_numbers_analyzed,
            self.average_sequence_length,
            self.max_sequence_length,
            self.highest_peak_value,
            self.average_steps_to_peak
        )
    }
}

/// Build insights from analyzed results
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `results` - Successful results in ascending starting-number order
/// * `top_k` - Size of each ranking
///
/// # Errors
/// * `AnalysisError::NoData` - `results` is empty
pub fn build_insights(
    results: &[SequenceResult],
    top_k: usize,
) -> Result<RangeInsights, AnalysisError> {
    if results.is_empty() {
        return Err(AnalysisError::NoData);
    }

    debug!("Aggregating {} results (top {})", results.len(), top_k);

    let mut lengths = RunningStats::new();
    let mut peaks = RunningStats::new();
    let mut climbs = RunningStats::new();

    let mut total_time = 0.0;
    let mut fastest = f64::INFINITY;
    let mut slowest = 0.0_f64;

    let mut longest = TopK::new(top_k);
    let mut highest = TopK::new(top_k);
    let mut slowest_climb = TopK::new(top_k);

    let mut start_col = Vec::with_capacity(results.len());
    let mut length_col = Vec::with_capacity(results.len());
    let mut peak_col = Vec::with_capacity(results.len());
    let mut climb_col = Vec::with_capacity(results.len());
    let mut steps_col = Vec::with_capacity(results.len());

    for result in results {
        let entry = RankEntry::from(result);

        lengths.push(result.sequence_length() as u64);
        peaks.push(result.max_value());
        climbs.push(result.steps_to_peak() as u64);

        total_time += result.execution_time();
        fastest = fastest.min(result.execution_time());
        slowest = slowest.max(result.execution_time());

        longest.push(result.sequence_length() as u64, entry);
        highest.push(result.max_value(), entry);
        slowest_climb.push(result.steps_to_peak() as u64, entry);

        start_col.push(result.starting_number() as f64);
        length_col.push(result.sequence_length() as f64);
        peak_col.push(result.max_value() as f64);
        climb_col.push(result.steps_to_peak() as f64);
        steps_col.push(result.total_steps() as f64);
    }

    let count = results.len();
    let sequence_length_distribution =
        Distribution::from_values(&length_col).ok_or(AnalysisError::NoData)?;
    let max_value_distribution =
        Distribution::from_values(&peak_col).ok_or(AnalysisError::NoData)?;

    let findings = detect_findings(
        results,
        &sequence_length_distribution,
        &max_value_distribution,
    );

    let correlations = CorrelationMatrix::from_columns(&[
        (CORRELATION_COLUMNS[0], start_col),
        (CORRELATION_COLUMNS[1], length_col),
        (CORRELATION_COLUMNS[2], peak_col),
        (CORRELATION_COLUMNS[3], climb_col),
        (CORRELATION_COLUMNS[4], steps_col),
    ]);

    Ok(RangeInsights {
        total_numbers_analyzed: count,
        average_sequence_length: lengths.mean().unwrap_or_default(),
        min_sequence_length: lengths.min().unwrap_or_default() as usize,
        max_sequence_length: lengths.max().unwrap_or_default() as usize,
        average_max_value: peaks.mean().unwrap_or_default(),
        highest_peak_value: peaks.max().unwrap_or_default(),
        average_steps_to_peak: climbs.mean().unwrap_or_default(),
        execution_statistics: ExecutionStatistics {
            average_execution_time: total_time / count as f64,
            total_execution_time: total_time,
            fastest_execution: fastest,
            slowest_execution: slowest,
        },
        top_longest: longest.into_vec(),
        top_highest_peak: highest.into_vec(),
        top_steps_to_peak: slowest_climb.into_vec(),
        sequence_length_distribution,
        max_value_distribution,
        correlations,
        findings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::analyze_one;

    fn results_for(range: std::ops::RangeInclusive<u64>) -> Vec<SequenceResult> {
        range.map(|n| analyze_one(n).unwrap()).collect()
    }

    #[test]
    fn test_running_stats() {
        let mut stats = RunningStats::new();
        assert_eq!(stats.mean(), None);

        for value in [4, 8, 6] {
            stats.push(value);
        }

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.sum(), 18);
        assert_eq!(stats.min(), Some(4));
        assert_eq!(stats.max(), Some(8));
        assert_eq!(stats.mean(), Some(6.0));
    }

    #[test]
    fn test_build_insights_empty() {
        assert_eq!(build_insights(&[], 5), Err(AnalysisError::NoData));
    }

    #[test]
    fn test_build_insights_small_range() {
        // Lengths for 1..=5: 1, 2, 8, 3, 6
        let results = results_for(1..=5);
        let insights = build_insights(&results, 5).unwrap();

        assert_eq!(insights.total_numbers_analyzed, 5);
        assert_eq!(insights.min_sequence_length, 1);
        assert_eq!(insights.max_sequence_length, 8);
        assert_eq!(insights.average_sequence_length, 4.0);
        assert_eq!(insights.highest_peak_value, 16);
        assert_eq!(insights.top_longest[0].starting_number, 3);
        assert_eq!(insights.top_longest.len(), 5);
    }

    #[test]
    fn test_build_insights_single_result() {
        let results = results_for(7..=7);
        let insights = build_insights(&results, 5).unwrap();

        assert_eq!(insights.top_longest.len(), 1);
        assert!(insights.correlations.is_none());
        assert_eq!(insights.sequence_length_distribution.std_dev, None);
    }

    #[test]
    fn test_summary_mentions_counts() {
        let results = results_for(1..=10);
        let insights = build_insights(&results, 5).unwrap();
        assert!(insights.summary().starts_with("Numbers: 10 |"));
    }
}
