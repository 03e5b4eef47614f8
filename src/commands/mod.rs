//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, execute_range, validate_range_args};
pub use models::{AnalyzeArgs, RangeArgs};
pub use utils::{display_schema, display_version, validate_report_file};
