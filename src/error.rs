//! Configuration errors.
//!
//! Both engines validate their configuration once, at the start of a run.
//! A failed validation means no candidate has been generated yet.

use thiserror::Error;

/// Errors raised when a run is started with an unusable configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// No populator was supplied.
    #[error("a populator must be set")]
    MissingPopulator,

    /// No success threshold was supplied.
    #[error("fitness_success_threshold must be set")]
    MissingSuccessThreshold,

    /// The genetic engine breeds in pairs, so the population must be even.
    #[error("population_size must be even, got {0}")]
    OddPopulationSize(usize),

    #[error("population_size must be at least 2")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("max_rounds must be at least 1")]
    ZeroRounds,

    #[error("max_iterations_per_round must be at least 1")]
    ZeroIterations,

    /// A probability lies outside `[0, 1]` (or is NaN).
    #[error("{name} must be in [0, 1], got {value}")]
    InvalidProbability {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Checks that `value` is a usable probability.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}
