//! Human-readable rendering for the terminal.

use crate::aggregator::{RangeInsights, RankEntry};
use crate::sequence::SequenceResult;
use crate::utils::config::SEQUENCE_SEPARATOR;

/// Render a sequence as arrow-joined text
///
/// **Public** - e.g. `[4, 2, 1]` becomes `"4 → 2 → 1"`
pub fn format_sequence(sequence: &[u64]) -> String {
    sequence
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEPARATOR)
}

/// Render the head and tail of a long sequence
///
/// **Public** - sequences no longer than `head + tail` are rendered whole
pub fn format_sequence_preview(sequence: &[u64], head: usize, tail: usize) -> String {
    if sequence.len() <= head + tail {
        return format_sequence(sequence);
    }

    format!(
        "{}{}...{}{}",
        format_sequence(&sequence[..head]),
        SEQUENCE_SEPARATOR,
        SEQUENCE_SEPARATOR,
        format_sequence(&sequence[sequence.len() - tail..])
    )
}

/// Summary block for one analyzed number
pub fn render_result_summary(result: &SequenceResult, full_sequence: bool) -> String {
    let sequence = if full_sequence {
        format_sequence(result.sequence())
    } else {
        format_sequence_preview(result.sequence(), 10, 5)
    };

    let lines = [
        format!("Starting number: {}", result.starting_number()),
        format!("Sequence length: {}", result.sequence_length()),
        format!("Peak value:      {}", result.max_value()),
        format!("Steps to peak:   {}", result.steps_to_peak()),
        format!("Total steps:     {}", result.total_steps()),
        format!("Execution time:  {:.6} seconds", result.execution_time()),
        format!("Sequence:        {}", sequence),
    ];

    lines.join("\n")
}

/// Summary block for range insights
pub fn render_insights_summary(insights: &RangeInsights) -> String {
    let mut lines = vec![
        "KEY INSIGHTS".to_string(),
        "-".repeat(40),
        format!("Total numbers analyzed: {}", insights.total_numbers_analyzed),
        format!("Average sequence length: {:.2}", insights.average_sequence_length),
        format!(
            "Sequence length range: {} - {}",
            insights.min_sequence_length, insights.max_sequence_length
        ),
        format!("Average peak value: {:.2}", insights.average_max_value),
        format!("Highest peak value: {}", insights.highest_peak_value),
        format!("Average steps to peak: {:.2}", insights.average_steps_to_peak),
    ];

    let lengths = &insights.sequence_length_distribution;
    lines.push(String::new());
    lines.push("Sequence length statistics:".to_string());
    lines.push(format!("  Median: {:.2}", lengths.median));
    if let Some(sd) = lengths.std_dev {
        lines.push(format!("  Standard deviation: {:.2}", sd));
    }
    lines.push(format!("  90th percentile: {:.2}", lengths.p90));
    lines.push(format!("  95th percentile: {:.2}", lengths.p95));

    lines.push(String::new());
    lines.push(format!("Top {} Longest Sequences:", insights.top_longest.len()));
    lines.extend(render_ranking(&insights.top_longest, |e| {
        format!("{} steps", e.sequence_length)
    }));

    lines.push(String::new());
    lines.push(format!("Top {} Highest Peaks:", insights.top_highest_peak.len()));
    lines.extend(render_ranking(&insights.top_highest_peak, |e| {
        format!("peak at {}", e.max_value)
    }));

    lines.push(String::new());
    lines.push(format!("Top {} Most Steps to Peak:", insights.top_steps_to_peak.len()));
    lines.extend(render_ranking(&insights.top_steps_to_peak, |e| {
        format!("{} steps to peak", e.steps_to_peak)
    }));

    if let Some(correlations) = &insights.correlations {
        lines.push(String::new());
        lines.push("Key correlations:".to_string());
        for (a, b, label) in [
            ("starting_number", "sequence_length", "Starting number vs Sequence length"),
            ("starting_number", "max_value", "Starting number vs Max value"),
            ("sequence_length", "max_value", "Sequence length vs Max value"),
        ] {
            let value = correlations
                .get(a, b)
                .map_or_else(|| "n/a".to_string(), |r| format!("{:.3}", r));
            lines.push(format!("  {}: {}", label, value));
        }
    }

    let findings = &insights.findings;
    if let Some(n) = findings.high_peak_short_sequence {
        lines.push(format!("High peak, short sequence: {}", n));
    }
    if let Some(n) = findings.long_sequence_low_peak {
        lines.push(format!("Long sequence, low peak: {}", n));
    }

    let timing = &insights.execution_statistics;
    lines.push(String::new());
    lines.push(format!(
        "Execution: avg {:.6}s | total {:.6}s | fastest {:.6}s | slowest {:.6}s",
        timing.average_execution_time,
        timing.total_execution_time,
        timing.fastest_execution,
        timing.slowest_execution
    ));

    lines.join("\n")
}

fn render_ranking<F>(entries: &[RankEntry], describe: F) -> Vec<String>
where
    F: Fn(&RankEntry) -> String,
{
    entries
        .iter()
        .map(|entry| format!("  {}: {}", entry.starting_number, describe(entry)))
        .collect()
}
