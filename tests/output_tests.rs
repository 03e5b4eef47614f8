use collatz_studio::analyzer::analyze_range;
use collatz_studio::output::validate_path;
use collatz_studio::output::{
    format_sequence, read_report, render_insights_summary, results_to_csv, write_csv,
    write_report, Report, ReportRequest,
};
use collatz_studio::sequence::analyze_one;
use collatz_studio::utils::error::OutputError;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_write_and_read_range_report() {
    let range = analyze_range(1, 20).unwrap();
    let report = Report::range(&range);
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, "1.0.0");
    assert_eq!(loaded.request, ReportRequest::Range { start: 1, end: 20 });
    assert_eq!(loaded.results.len(), 20);
    assert_eq!(loaded.results[2].sequence_str, "3 → 10 → 5 → 16 → 8 → 4 → 2 → 1");
    assert_eq!(loaded.results[2].result.sequence(), &[3, 10, 5, 16, 8, 4, 2, 1]);

    let insights = loaded.insights.unwrap();
    assert_eq!(insights.total_numbers_analyzed, 20);
    assert_eq!(insights.top_longest, range.insights.top_longest);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    let report = Report::single(&analyze_one(7).unwrap());
    write_report(&report, &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_csv_omits_raw_sequence() {
    let range = analyze_range(1, 30).unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("export.csv");

    write_csv(&range.results, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    let header: Vec<&str> = content.lines().next().unwrap().split(',').collect();
    assert!(!header.contains(&"sequence"));
    assert!(!header.contains(&"sequence_str"));
    assert!(!content.contains('→'));
    assert!(!content.contains('['));
    assert_eq!(content.lines().count(), 31);
}

#[test]
fn test_csv_rejects_empty_export() {
    assert!(matches!(results_to_csv(&[]), Err(OutputError::NoData)));
}

#[test]
fn test_format_sequence_for_27() {
    let result = analyze_one(27).unwrap();
    let text = format_sequence(result.sequence());

    assert!(text.starts_with("27 → 82 → 41 → 124"));
    assert!(text.ends_with("4 → 2 → 1"));
    assert_eq!(text.matches(" → ").count(), 111);
}

#[test]
fn test_insights_summary_lists_rankings() {
    let range = analyze_range(1, 10).unwrap();
    let summary = render_insights_summary(&range.insights);

    assert!(summary.contains("Total numbers analyzed: 10"));
    assert!(summary.contains("Top 5 Longest Sequences:"));
    assert!(summary.contains("  9: 20 steps"));
    assert!(summary.contains("  7: peak at 52"));
}
