//! Configuration and constants for the engine and the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Largest allowed `end - start` for a range request
pub const DEFAULT_MAX_SPAN: u64 = 1000;

/// Upper bound accepted for a configured span cap
pub const MAX_SPAN_LIMIT: u64 = 1_000_000;

/// Number of entries kept in each ranking
pub const DEFAULT_TOP_K: usize = 5;

/// Upper bound accepted for `--top`
pub const MAX_TOP_K: usize = 1000;

/// Transition cap for a single sequence, far above any known trajectory
/// length for 64-bit starting numbers
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Separator used when rendering a sequence as text
pub const SEQUENCE_SEPARATOR: &str = " → ";

/// Column order for CSV exports (the raw sequence is never exported)
pub const CSV_COLUMNS: &[&str] = &[
    "starting_number",
    "sequence_length",
    "max_value",
    "steps_to_peak",
    "total_steps",
    "execution_time",
    "timestamp",
];

/// Tunables shared by the generator and the range analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum `end - start` of a range request
    pub max_span: u64,

    /// Size of each ranking in the insights
    pub top_k: usize,

    /// Optional cap on the number of transitions per sequence
    pub max_steps: Option<usize>,

    /// Largest intermediate value a sequence may reach
    pub value_ceiling: u64,

    /// Analyze range members on the rayon thread pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_span: DEFAULT_MAX_SPAN,
            top_k: DEFAULT_TOP_K,
            max_steps: Some(DEFAULT_MAX_STEPS),
            value_ceiling: u64::MAX,
            parallel: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_span(mut self, max_span: u64) -> Self {
        self.max_span = max_span;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_value_ceiling(mut self, value_ceiling: u64) -> Self {
        self.value_ceiling = value_ceiling;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
