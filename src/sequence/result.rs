//! Per-number analysis: run the generator and extract metrics.

use super::generator::{generate_with, next_value};
use crate::utils::config::EngineConfig;
use crate::utils::error::AnalysisError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Analysis of a single starting number
///
/// **Public** - produced by `analyze_one`, read-only afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceResult {
    starting_number: u64,
    sequence: Vec<u64>,
    sequence_length: usize,
    max_value: u64,
    steps_to_peak: usize,
    total_steps: usize,
    /// Generation time in seconds
    execution_time: f64,
    timestamp: DateTime<Utc>,
}

impl SequenceResult {
    /// Build a result from a generated trajectory
    ///
    /// **Private** - callers go through `analyze_one`
    fn from_sequence(sequence: Vec<u64>, execution_time: f64) -> Self {
        let (steps_to_peak, max_value) = locate_peak(&sequence);
        let sequence_length = sequence.len();

        Self {
            starting_number: sequence[0],
            sequence,
            sequence_length,
            max_value,
            steps_to_peak,
            total_steps: sequence_length - 1,
            execution_time,
            timestamp: Utc::now(),
        }
    }

    pub fn starting_number(&self) -> u64 {
        self.starting_number
    }

    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn steps_to_peak(&self) -> usize {
        self.steps_to_peak
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Compare two results ignoring timing fields
    ///
    /// **Public** - `execution_time` and `timestamp` vary between runs
    pub fn same_trajectory(&self, other: &SequenceResult) -> bool {
        self.starting_number == other.starting_number
            && self.sequence == other.sequence
            && self.sequence_length == other.sequence_length
            && self.max_value == other.max_value
            && self.steps_to_peak == other.steps_to_peak
            && self.total_steps == other.total_steps
    }

    /// Check that the stored metrics describe the stored trajectory
    ///
    /// **Public** - results read back from JSON are not re-derived
    ///
    /// # Errors
    /// * `AnalysisError::InvalidInput` - the first inconsistency found
    pub fn verify(&self) -> Result<(), AnalysisError> {
        let invalid = |detail: String| -> Result<(), AnalysisError> {
            Err(AnalysisError::InvalidInput(format!(
                "result for {}: {}",
                self.starting_number, detail
            )))
        };

        let (first, last) = match (self.sequence.first(), self.sequence.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return invalid("sequence is empty".to_string()),
        };

        if first != self.starting_number {
            return invalid(format!("sequence starts at {}", first));
        }
        if last != 1 {
            return invalid(format!("sequence ends at {}", last));
        }
        if self.sequence[..self.sequence.len() - 1].contains(&1) {
            return invalid("sequence continues past 1".to_string());
        }
        if let Some(index) = self
            .sequence
            .windows(2)
            .position(|pair| next_value(pair[0]) != Some(pair[1]))
        {
            return invalid(format!("step {} breaks the 3n + 1 rule", index + 1));
        }
        if self.sequence_length != self.sequence.len() {
            return invalid(format!(
                "sequence_length {} but {} values",
                self.sequence_length,
                self.sequence.len()
            ));
        }
        if self.total_steps != self.sequence.len() - 1 {
            return invalid(format!("total_steps {} is inconsistent", self.total_steps));
        }

        let (steps_to_peak, max_value) = locate_peak(&self.sequence);
        if (steps_to_peak, max_value) != (self.steps_to_peak, self.max_value) {
            return invalid(format!(
                "peak {} at step {} does not match the sequence",
                self.max_value, self.steps_to_peak
            ));
        }

        Ok(())
    }
}

/// Index and value of the first occurrence of the maximum
///
/// **Private** - a later equal value never replaces an earlier one
fn locate_peak(sequence: &[u64]) -> (usize, u64) {
    let mut peak = (0, sequence[0]);
    for (index, &value) in sequence.iter().enumerate().skip(1) {
        if value > peak.1 {
            peak = (index, value);
        }
    }
    peak
}

/// Analyze one starting number with the default configuration
///
/// **Public** - main entry point for single-number analysis
///
/// # Example
/// ```
/// use collatz_studio::sequence::analyze_one;
/// let result = analyze_one(27).unwrap();
/// assert_eq!(result.sequence_length(), 112);
/// assert_eq!(result.max_value(), 9232);
/// ```
pub fn analyze_one(n: u64) -> Result<SequenceResult, AnalysisError> {
    analyze_one_with(n, &EngineConfig::default())
}

/// Analyze one starting number
///
/// **Public** - times the generator and derives peak and step metrics
///
/// # Errors
/// Whatever `generate_with` reports; nothing is retried.
pub fn analyze_one_with(n: u64, config: &EngineConfig) -> Result<SequenceResult, AnalysisError> {
    let started = Instant::now();
    let sequence = generate_with(n, config)?;
    let execution_time = started.elapsed().as_secs_f64();

    Ok(SequenceResult::from_sequence(sequence, execution_time))
}
