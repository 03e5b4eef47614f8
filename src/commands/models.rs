use crate::utils::config::{EngineConfig, DEFAULT_MAX_SPAN, DEFAULT_MAX_STEPS, DEFAULT_TOP_K};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Starting number, as typed by the user
    pub number: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the whole sequence instead of a preview
    pub full_sequence: bool,

    /// Optional transition cap
    pub max_steps: Option<usize>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            number: String::new(),
            output_json: None,
            full_sequence: false,
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl AnalyzeArgs {
    /// Engine configuration for this request
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_max_steps(self.max_steps)
    }
}

/// Arguments for the range command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RangeArgs {
    /// First bound, as typed by the user
    pub start: String,

    /// Second bound, as typed by the user
    pub end: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the CSV export (optional)
    pub output_csv: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Analyze numbers on the thread pool
    pub parallel: bool,

    /// Maximum `end - start`
    pub max_span: u64,

    /// Entries per ranking
    pub top_k: usize,

    /// Optional transition cap
    pub max_steps: Option<usize>,
}

impl Default for RangeArgs {
    fn default() -> Self {
        Self {
            start: "1".to_string(),
            end: "100".to_string(),
            output_json: None,
            output_csv: None,
            print_summary: false,
            parallel: false,
            max_span: DEFAULT_MAX_SPAN,
            top_k: DEFAULT_TOP_K,
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl RangeArgs {
    /// Engine configuration for this request
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_max_span(self.max_span)
            .with_top_k(self.top_k)
            .with_max_steps(self.max_steps)
            .with_parallel(self.parallel)
    }
}
