use collatz_studio::commands::{
    execute_analyze, execute_range, validate_range_args, validate_report_file, AnalyzeArgs,
    RangeArgs,
};
use collatz_studio::output::read_report;

#[test]
fn test_validate_range_args_valid() {
    let args = RangeArgs {
        start: "2".to_string(),
        end: "5".to_string(),
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_ok());
}

#[test]
fn test_validate_range_args_reversed() {
    let args = RangeArgs {
        start: "1001".to_string(),
        end: "1".to_string(),
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_ok());
}

#[test]
fn test_validate_range_args_negative() {
    let args = RangeArgs {
        start: "-5".to_string(),
        end: "10".to_string(),
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_err());
}

#[test]
fn test_validate_range_args_span_too_large() {
    let args = RangeArgs {
        start: "1".to_string(),
        end: "2000".to_string(),
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_err());
}

#[test]
fn test_validate_range_args_custom_span() {
    let args = RangeArgs {
        start: "1".to_string(),
        end: "2000".to_string(),
        max_span: 5000,
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_ok());
}

#[test]
fn test_validate_range_args_top_too_large() {
    let args = RangeArgs {
        top_k: 2000,
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_err());
}

#[test]
fn test_execute_range_writes_outputs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("range.json");
    let csv_path = temp_dir.path().join("range.csv");

    let args = RangeArgs {
        start: "50".to_string(),
        end: "10".to_string(),
        output_json: Some(json_path.clone()),
        output_csv: Some(csv_path.clone()),
        parallel: true,
        ..Default::default()
    };

    execute_range(args).unwrap();

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.results.len(), 41);
    assert_eq!(report.results[0].result.starting_number(), 10);
    assert!(csv_path.exists());
}

#[test]
fn test_execute_analyze_writes_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("single.json");

    let args = AnalyzeArgs {
        number: "27".to_string(),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };

    execute_analyze(args).unwrap();

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].result.max_value(), 9232);
    assert!(report.insights.is_none());
}

#[test]
fn test_execute_analyze_rejects_zero() {
    let args = AnalyzeArgs {
        number: "0".to_string(),
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
}

#[test]
fn test_execute_analyze_rejects_zero_step_cap() {
    let args = AnalyzeArgs {
        number: "7".to_string(),
        max_steps: Some(0),
        ..Default::default()
    };

    assert!(execute_analyze(args).is_err());
}

#[test]
fn test_validate_range_args_unbounded_span_cap() {
    let args = RangeArgs {
        start: "1".to_string(),
        end: u64::MAX.to_string(),
        max_span: u64::MAX,
        ..Default::default()
    };

    assert!(validate_range_args(&args).is_err());
}

#[test]
fn test_validate_report_file_accepts_written_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("range.json");

    let args = RangeArgs {
        start: "1".to_string(),
        end: "25".to_string(),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };
    execute_range(args).unwrap();

    assert!(validate_report_file(json_path).is_ok());
}

#[test]
fn test_validate_report_file_rejects_inconsistent_result() {
    let temp_dir = tempfile::tempdir().unwrap();
    let json_path = temp_dir.path().join("single.json");

    let args = AnalyzeArgs {
        number: "6".to_string(),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };
    execute_analyze(args).unwrap();

    let content = std::fs::read_to_string(&json_path).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["results"][0]["sequence_length"] = serde_json::json!(3);
    std::fs::write(&json_path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

    assert!(validate_report_file(json_path).is_err());
}
