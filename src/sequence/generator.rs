//! Collatz trajectory generation.
//!
//! Starting from `n`, even values are halved and odd values become `3n + 1`
//! until the trajectory reaches 1. All arithmetic is checked: a value that
//! would leave the `u64` domain (or the configured ceiling) is reported as
//! an error instead of wrapping.

use crate::utils::config::EngineConfig;
use crate::utils::error::AnalysisError;

/// Apply one Collatz step
///
/// **Public** - the step function on its own
///
/// Returns `None` when `3n + 1` does not fit in a `u64`.
pub fn next_value(current: u64) -> Option<u64> {
    if current % 2 == 0 {
        Some(current / 2)
    } else {
        current.checked_mul(3)?.checked_add(1)
    }
}

/// Generate the Collatz sequence for `n` with the default configuration
///
/// **Public** - main entry point for sequence generation
///
/// # Example
/// ```
/// use collatz_studio::sequence::generate;
/// assert_eq!(generate(6).unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
pub fn generate(n: u64) -> Result<Vec<u64>, AnalysisError> {
    generate_with(n, &EngineConfig::default())
}

/// Generate the Collatz sequence for `n`
///
/// **Public** - honors `max_steps` and `value_ceiling` from `config`
///
/// # Arguments
/// * `n` - Starting number, must be at least 1
/// * `config` - Engine limits
///
/// # Returns
/// The full trajectory, starting with `n` and ending with 1
///
/// # Errors
/// * `AnalysisError::InvalidInput` - `n` is zero or above the ceiling
/// * `AnalysisError::Overflow` - an intermediate value left the supported domain
/// * `AnalysisError::SequenceTooLong` - more than `max_steps` transitions
pub fn generate_with(n: u64, config: &EngineConfig) -> Result<Vec<u64>, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::InvalidInput(
            "starting number must be positive".to_string(),
        ));
    }

    if n > config.value_ceiling {
        return Err(AnalysisError::InvalidInput(format!(
            "starting number exceeds the supported maximum of {}",
            config.value_ceiling
        )));
    }

    let mut sequence = vec![n];
    let mut current = n;

    while current != 1 {
        if let Some(max_steps) = config.max_steps {
            if sequence.len() > max_steps {
                return Err(AnalysisError::SequenceTooLong {
                    starting_number: n,
                    max_steps,
                });
            }
        }

        current = next_value(current)
            .filter(|next| *next <= config.value_ceiling)
            .ok_or(AnalysisError::Overflow {
                starting_number: n,
                value: current,
            })?;

        sequence.push(current);
    }

    Ok(sequence)
}
