//! Bounded top-K rankings.
//!
//! Rankings are built in a single pass over results in ascending
//! starting-number order. Entries are kept sorted by key (descending) and an
//! entry never overtakes an earlier one with the same key, so ties keep
//! their order of first appearance.

use crate::sequence::SequenceResult;
use serde::{Deserialize, Serialize};

/// Compact ranking row
///
/// **Public** - one per ranked result in the insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub starting_number: u64,
    pub sequence_length: usize,
    pub max_value: u64,
    pub steps_to_peak: usize,
}

impl From<&SequenceResult> for RankEntry {
    fn from(result: &SequenceResult) -> Self {
        Self {
            starting_number: result.starting_number(),
            sequence_length: result.sequence_length(),
            max_value: result.max_value(),
            steps_to_peak: result.steps_to_peak(),
        }
    }
}

/// Stable bounded top-K selection
///
/// **Public** - keeps at most `capacity` items with the greatest keys
#[derive(Debug, Clone)]
pub struct TopK<T> {
    capacity: usize,
    entries: Vec<(u64, T)>,
}

impl<T> TopK<T> {
    /// Create an empty ranking
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.saturating_add(1).min(1024)),
        }
    }

    /// Offer an item to the ranking
    ///
    /// **Public** - O(K) per insert, items that cannot place are dropped
    pub fn push(&mut self, key: u64, item: T) {
        // First slot whose key is strictly smaller; equal keys stay ahead
        let position = self.entries.partition_point(|(existing, _)| *existing >= key);

        if position >= self.capacity {
            return;
        }

        self.entries.insert(position, (key, item));
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the ranking, highest key first
    pub fn into_vec(self) -> Vec<T> {
        self.entries.into_iter().map(|(_, item)| item).collect()
    }
}

/// Rank results by an arbitrary metric
///
/// **Public** - for library callers ranking by a metric the insights
/// do not precompute
pub fn top_by<F>(results: &[SequenceResult], k: usize, key: F) -> Vec<RankEntry>
where
    F: Fn(&SequenceResult) -> u64,
{
    let mut ranking = TopK::new(k);
    for result in results {
        ranking.push(key(result), RankEntry::from(result));
    }
    ranking.into_vec()
}
