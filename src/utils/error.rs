//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while generating or analyzing sequences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Range too large: span of {span} exceeds the maximum of {max}")]
    RangeTooLarge { span: u64, max: u64 },

    #[error("Overflow while computing sequence for {starting_number}: next value after {value} is out of range")]
    Overflow { starting_number: u64, value: u64 },

    #[error("Sequence for {starting_number} exceeded {max_steps} steps")]
    SequenceTooLong { starting_number: u64, max_steps: usize },

    #[error("No data available for analysis")]
    NoData,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("No results to export")]
    NoData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AnalysisError::RangeTooLarge { span: 1999, max: 1000 };
        assert_eq!(
            err.to_string(),
            "Range too large: span of 1999 exceeds the maximum of 1000"
        );

        let err = AnalysisError::InvalidInput("starting number must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: starting number must be positive");
    }
}
