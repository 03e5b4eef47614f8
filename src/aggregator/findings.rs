//! Numbers whose peak and length disagree.

use super::distribution::Distribution;
use crate::sequence::SequenceResult;
use serde::{Deserialize, Serialize};

/// Outliers worth a closer look
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    /// First number peaking above the 90th percentile with a below-median length
    pub high_peak_short_sequence: Option<u64>,

    /// First number longer than the 90th percentile with a below-median peak
    pub long_sequence_low_peak: Option<u64>,
}

/// Scan results (ascending) for the first match of each finding
pub fn detect_findings(
    results: &[SequenceResult],
    lengths: &Distribution,
    peaks: &Distribution,
) -> Findings {
    let high_peak_short_sequence = results
        .iter()
        .find(|r| r.max_value() as f64 > peaks.p90 && (r.sequence_length() as f64) < lengths.median)
        .map(SequenceResult::starting_number);

    let long_sequence_low_peak = results
        .iter()
        .find(|r| r.sequence_length() as f64 > lengths.p90 && (r.max_value() as f64) < peaks.median)
        .map(SequenceResult::starting_number);

    Findings {
        high_peak_short_sequence,
        long_sequence_low_peak,
    }
}
