//! Range analysis.
//!
//! A range request is validated up front (positive bounds, bounded span),
//! then every number in the inclusive range is analyzed independently. A
//! number that fails is recorded and skipped; only request-level problems
//! abort the call.

use crate::aggregator::{build_insights, RangeInsights};
use crate::sequence::{analyze_one_with, SequenceResult};
use crate::utils::config::{EngineConfig, MAX_SPAN_LIMIT};
use crate::utils::error::AnalysisError;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A number that could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedInput {
    pub number: u64,
    pub reason: String,
}

/// Outcome of one range request
///
/// **Public** - owned by the caller, nothing is retained between calls
#[derive(Debug, Clone)]
pub struct RangeReport {
    /// Normalized lower bound
    pub start: u64,

    /// Normalized upper bound
    pub end: u64,

    /// Successful analyses, ascending by starting number
    pub results: Vec<SequenceResult>,

    /// Skipped numbers with the reason they failed
    pub failures: Vec<FailedInput>,

    pub insights: RangeInsights,
}

impl RangeReport {
    pub fn success_count(&self) -> usize {
        self.results.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Normalize and check range bounds
///
/// **Public** - runs before any sequence is generated
///
/// # Returns
/// `(start, end)` with `start <= end`
///
/// # Errors
/// * `AnalysisError::InvalidInput` - a bound is zero, or `config.max_span`
///   is above `MAX_SPAN_LIMIT`
/// * `AnalysisError::RangeTooLarge` - `end - start` exceeds `config.max_span`
pub fn validate_range(
    start: u64,
    end: u64,
    config: &EngineConfig,
) -> Result<(u64, u64), AnalysisError> {
    if config.max_span > MAX_SPAN_LIMIT {
        return Err(AnalysisError::InvalidInput(format!(
            "max span {} exceeds the limit of {}",
            config.max_span, MAX_SPAN_LIMIT
        )));
    }

    let (start, end) = if start > end { (end, start) } else { (start, end) };

    if start == 0 {
        return Err(AnalysisError::InvalidInput(
            "range bounds must be positive".to_string(),
        ));
    }

    let span = end - start;
    if span > config.max_span {
        return Err(AnalysisError::RangeTooLarge {
            span,
            max: config.max_span,
        });
    }

    Ok((start, end))
}

/// Analyze every number in `[start, end]` with the default configuration
///
/// **Public** - main entry point for range analysis
pub fn analyze_range(start: u64, end: u64) -> Result<RangeReport, AnalysisError> {
    analyze_range_with(start, end, &EngineConfig::default())
}

/// Analyze every number in `[start, end]`
///
/// **Public** - bounds may be given in either order
///
/// # Arguments
/// * `start`, `end` - Inclusive bounds
/// * `config` - Span cap, ranking size, sequence limits and parallelism
///
/// # Errors
/// * `AnalysisError::InvalidInput` / `RangeTooLarge` - from `validate_range`
/// * `AnalysisError::NoData` - every number in the range failed
pub fn analyze_range_with(
    start: u64,
    end: u64,
    config: &EngineConfig,
) -> Result<RangeReport, AnalysisError> {
    let (start, end) = validate_range(start, end, config)?;

    info!("Analyzing Collatz sequences for numbers {} to {}...", start, end);

    // Collecting into a Vec keeps ascending order regardless of scheduling
    let outcomes: Vec<(u64, Result<SequenceResult, AnalysisError>)> = if config.parallel {
        debug!("Running on {} worker threads", rayon::current_num_threads());
        (start..=end)
            .into_par_iter()
            .map(|n| (n, analyze_one_with(n, config)))
            .collect()
    } else {
        (start..=end)
            .map(|n| (n, analyze_one_with(n, config)))
            .collect()
    };

    let mut results = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for (number, outcome) in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!("Error processing {}: {}", number, e);
                failures.push(FailedInput {
                    number,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Analysis complete! Processed {} numbers ({} skipped)",
        results.len(),
        failures.len()
    );

    let insights = build_insights(&results, config.top_k)?;
    debug!("Insights: {}", insights.summary());

    Ok(RangeReport {
        start,
        end,
        results,
        failures,
        insights,
    })
}

/// Parse a starting number from text
///
/// **Public** - accepts signed decimal so negatives get a clear error
///
/// # Errors
/// * `AnalysisError::InvalidInput` - not an integer, zero, or negative
pub fn parse_number(text: &str) -> Result<u64, AnalysisError> {
    let trimmed = text.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| AnalysisError::InvalidInput(format!("not an integer: '{}'", trimmed)))?;

    if value <= 0 {
        return Err(AnalysisError::InvalidInput(
            "starting number must be positive".to_string(),
        ));
    }

    u64::try_from(value).map_err(|_| {
        AnalysisError::InvalidInput(format!("{} is larger than {}", value, u64::MAX))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range_swaps() {
        let config = EngineConfig::default();
        assert_eq!(validate_range(5, 2, &config), Ok((2, 5)));
        assert_eq!(validate_range(2, 5, &config), Ok((2, 5)));
    }

    #[test]
    fn test_validate_range_zero() {
        let config = EngineConfig::default();
        assert!(matches!(
            validate_range(0, 10, &config),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_range(10, 0, &config),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_validate_range_span_edges() {
        let config = EngineConfig::default();
        assert_eq!(validate_range(1, 1001, &config), Ok((1, 1001)));
        assert_eq!(
            validate_range(1, 1002, &config),
            Err(AnalysisError::RangeTooLarge { span: 1001, max: 1000 })
        );
    }

    #[test]
    fn test_oversized_span_cap_rejected() {
        let config = EngineConfig::default().with_max_span(u64::MAX);
        assert!(matches!(
            validate_range(1, 10, &config),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            analyze_range_with(1, u64::MAX, &config),
            Err(AnalysisError::InvalidInput(_))
        ));

        let at_limit = EngineConfig::default().with_max_span(MAX_SPAN_LIMIT);
        assert_eq!(validate_range(1, 5000, &at_limit), Ok((1, 5000)));
    }

    #[test]
    fn test_parallel_keeps_order() {
        let config = EngineConfig::default().with_parallel(true);
        let report = analyze_range_with(40, 1, &config).unwrap();
        let starts: Vec<u64> = report.results.iter().map(|r| r.starting_number()).collect();
        assert_eq!(starts, (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn test_failures_are_skipped() {
        // 27 climbs past 1000, its neighbours do not
        let config = EngineConfig::default().with_value_ceiling(1000);
        let report = analyze_range_with(25, 28, &config).unwrap();

        let starts: Vec<u64> = report.results.iter().map(|r| r.starting_number()).collect();
        assert_eq!(starts, vec![25, 26, 28]);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].number, 27);
        assert_eq!(report.insights.total_numbers_analyzed, 3);
    }

    #[test]
    fn test_all_failed_is_no_data() {
        let config = EngineConfig::default().with_max_steps(Some(1));
        assert_eq!(
            analyze_range_with(6, 7, &config).unwrap_err(),
            AnalysisError::NoData
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 27 "), Ok(27));
        assert!(matches!(parse_number("0"), Err(AnalysisError::InvalidInput(_))));
        assert!(matches!(parse_number("-4"), Err(AnalysisError::InvalidInput(_))));
        assert!(matches!(parse_number("abc"), Err(AnalysisError::InvalidInput(_))));
        assert!(matches!(
            parse_number("99999999999999999999999"),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}
