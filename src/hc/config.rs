//! Hill-climbing configuration.

use super::acceptance::{Acceptance, StrictImprovement};
use super::types::HillClimbingPopulator;
use crate::error::ConfigError;
use crate::fitness::FitnessOf;

/// Configuration for the hill-climbing engine.
///
/// `populator` and `fitness_success_threshold` are required. The
/// acceptance policy defaults to [`StrictImprovement`].
///
/// # Examples
///
/// ```ignore
/// use u_stochastic::hc::{HcConfig, Metropolis};
///
/// let config = HcConfig::new()
///     .with_populator(MyPopulator)
///     .with_success_threshold(0)
///     .with_max_rounds(20)
///     .with_max_iterations_per_round(5_000)
///     .with_acceptance(Metropolis::default());
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig<P, A = StrictImprovement>
where
    P: HillClimbingPopulator,
    A: Acceptance<P::Candidate>,
{
    /// Supplies starting candidates and neighbours. Required.
    pub populator: Option<P>,

    /// Number of independent restarts.
    pub max_rounds: usize,

    /// Neighbour evaluations per round.
    pub max_iterations_per_round: usize,

    /// The run stops as soon as the current candidate reaches this value.
    /// Required.
    pub fitness_success_threshold: Option<FitnessOf<P::Candidate>>,

    /// Decides whether a neighbour replaces the current candidate.
    pub acceptance: A,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl<P: HillClimbingPopulator> Default for HcConfig<P> {
    fn default() -> Self {
        Self {
            populator: None,
            max_rounds: 1,
            max_iterations_per_round: 10_000,
            fitness_success_threshold: None,
            acceptance: StrictImprovement,
            seed: None,
        }
    }
}

impl<P: HillClimbingPopulator> HcConfig<P> {
    /// Creates a configuration with default parameters and no populator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P, A> HcConfig<P, A>
where
    P: HillClimbingPopulator,
    A: Acceptance<P::Candidate>,
{
    pub fn with_populator(mut self, populator: P) -> Self {
        self.populator = Some(populator);
        self
    }

    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_max_iterations_per_round(mut self, n: usize) -> Self {
        self.max_iterations_per_round = n;
        self
    }

    pub fn with_success_threshold(mut self, threshold: FitnessOf<P::Candidate>) -> Self {
        self.fitness_success_threshold = Some(threshold);
        self
    }

    /// Replaces the acceptance policy, possibly with one of a different type.
    pub fn with_acceptance<A2: Acceptance<P::Candidate>>(self, acceptance: A2) -> HcConfig<P, A2> {
        HcConfig {
            populator: self.populator,
            max_rounds: self.max_rounds,
            max_iterations_per_round: self.max_iterations_per_round,
            fitness_success_threshold: self.fitness_success_threshold,
            acceptance,
            seed: self.seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.populator.is_none() {
            return Err(ConfigError::MissingPopulator);
        }
        if self.fitness_success_threshold.is_none() {
            return Err(ConfigError::MissingSuccessThreshold);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.max_iterations_per_round == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
