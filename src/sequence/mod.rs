//! Sequence generation and per-number metrics.
//!
//! This module handles:
//! - Generating Collatz trajectories with checked arithmetic
//! - Timing each generation
//! - Extracting peak, steps-to-peak and length metrics

pub mod generator;
pub mod result;

// Re-export main types and functions
pub use generator::{generate, generate_with, next_value};
pub use result::{analyze_one, analyze_one_with, SequenceResult};
