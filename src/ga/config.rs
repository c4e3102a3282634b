//! GA configuration.
//!
//! [`GaConfig`] holds the populator, the selector and every parameter that
//! controls the generational loop. Nothing is checked when the config is
//! built; [`GaConfig::validate`] runs at the start of each run.

use super::selection::{Selection, Selector};
use super::types::GeneticPopulator;
use crate::error::{check_probability, ConfigError};
use crate::fitness::{max_fitness, Fitness, FitnessOf};

/// Configuration for the genetic engine.
///
/// # Defaults
///
/// | field                     | default          |
/// |---------------------------|------------------|
/// | `population_size`         | 2000             |
/// | `max_generations`         | `usize::MAX`     |
/// | `crossover_probability`   | 0.3              |
/// | `selector`                | 2-tournament     |
/// | `mutation_probability`    | 0.1              |
/// | `fitness_death_threshold` | `None` (no floor)|
/// | `fitness_death_factor`    | 0.0 (no floor)   |
/// | `permissible_dead_rounds` | `usize::MAX`     |
/// | `output_rounds`           | 1000             |
///
/// `populator` and `fitness_success_threshold` have no default and must be
/// set before running.
///
/// # Builder Pattern
///
/// ```ignore
/// let config = GaConfig::new()
///     .with_populator(OneMax(64))
///     .with_success_threshold(64)
///     .with_population_size(200)
///     .with_crossover_probability(0.6)
///     .with_permissible_dead_rounds(50)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig<P: GeneticPopulator, S: Selector = Selection> {
    /// Supplies generate/mutate/crossover/survive. Required.
    pub populator: Option<P>,

    /// Number of candidates in every generation. Must be even.
    pub population_size: usize,

    /// Maximum number of generations, counting the initial population.
    pub max_generations: usize,

    /// Probability that a pair slot breeds rather than copying its two
    /// inputs forward (0.0–1.0).
    pub crossover_probability: f64,

    /// Chooses parents when a pair slot breeds.
    pub selector: S,

    /// Probability that each child of a crossover is mutated (0.0–1.0).
    pub mutation_probability: f64,

    /// The run stops as soon as the best fitness reaches this value. Required.
    pub fitness_success_threshold: Option<FitnessOf<P::Candidate>>,

    /// Candidates at or below this fitness are discarded and regenerated.
    /// `None` disables the absolute floor.
    pub fitness_death_threshold: Option<FitnessOf<P::Candidate>>,

    /// Candidates at or below `fitness_death_factor * best` are discarded
    /// and regenerated. 0.0 disables the relative floor.
    pub fitness_death_factor: f64,

    /// After this many consecutive generations without improvement the
    /// whole next generation is regenerated from scratch.
    pub permissible_dead_rounds: usize,

    /// Report progress every this many generations, starting with the
    /// first bred generation. 0 disables reporting.
    pub output_rounds: usize,

    /// Whether to build generations on the rayon thread pool.
    ///
    /// Results are identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl<P: GeneticPopulator> Default for GaConfig<P> {
    fn default() -> Self {
        Self {
            populator: None,
            population_size: 2000,
            max_generations: usize::MAX,
            crossover_probability: 0.3,
            selector: Selection::default(),
            mutation_probability: 0.1,
            fitness_success_threshold: None,
            fitness_death_threshold: None,
            fitness_death_factor: 0.0,
            permissible_dead_rounds: usize::MAX,
            output_rounds: 1_000,
            parallel: true,
            seed: None,
        }
    }
}

impl<P: GeneticPopulator> GaConfig<P> {
    /// Creates a configuration with default parameters and no populator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: GeneticPopulator, S: Selector> GaConfig<P, S> {
    /// Sets the populator.
    pub fn with_populator(mut self, populator: P) -> Self {
        self.populator = Some(populator);
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Replaces the selector, possibly with one of a different type.
    pub fn with_selector<S2: Selector>(self, selector: S2) -> GaConfig<P, S2> {
        GaConfig {
            populator: self.populator,
            population_size: self.population_size,
            max_generations: self.max_generations,
            crossover_probability: self.crossover_probability,
            selector,
            mutation_probability: self.mutation_probability,
            fitness_success_threshold: self.fitness_success_threshold,
            fitness_death_threshold: self.fitness_death_threshold,
            fitness_death_factor: self.fitness_death_factor,
            permissible_dead_rounds: self.permissible_dead_rounds,
            output_rounds: self.output_rounds,
            parallel: self.parallel,
            seed: self.seed,
        }
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the success threshold.
    pub fn with_success_threshold(mut self, threshold: FitnessOf<P::Candidate>) -> Self {
        self.fitness_success_threshold = Some(threshold);
        self
    }

    /// Sets the absolute death threshold.
    pub fn with_death_threshold(mut self, threshold: FitnessOf<P::Candidate>) -> Self {
        self.fitness_death_threshold = Some(threshold);
        self
    }

    /// Sets the death factor relative to the best fitness.
    pub fn with_death_factor(mut self, factor: f64) -> Self {
        self.fitness_death_factor = factor.max(0.0);
        self
    }

    /// Sets the number of tolerated generations without improvement.
    pub fn with_permissible_dead_rounds(mut self, n: usize) -> Self {
        self.permissible_dead_rounds = n;
        self
    }

    /// Sets the progress reporting interval (0 to disable).
    pub fn with_output_rounds(mut self, n: usize) -> Self {
        self.output_rounds = n;
        self
    }

    /// Enables or disables parallel generation building.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fitness floor at or below which a candidate dies, given the current
    /// best fitness: `max(fitness_death_threshold, fitness_death_factor * best)`.
    ///
    /// Each floor only applies when set (`Some` threshold, positive
    /// factor). `None` means nothing dies for being unfit.
    pub fn kill_threshold(
        &self,
        best: FitnessOf<P::Candidate>,
    ) -> Option<FitnessOf<P::Candidate>> {
        let relative =
            (self.fitness_death_factor > 0.0).then(|| best.scaled(self.fitness_death_factor));
        match (self.fitness_death_threshold, relative) {
            (Some(absolute), Some(relative)) => Some(max_fitness(absolute, relative)),
            (absolute, relative) => absolute.or(relative),
        }
    }

    /// Validates the configuration.
    ///
    /// Checks run in a fixed order; the first failure is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.populator.is_none() {
            return Err(ConfigError::MissingPopulator);
        }
        if self.population_size % 2 == 1 {
            return Err(ConfigError::OddPopulationSize(self.population_size));
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.fitness_success_threshold.is_none() {
            return Err(ConfigError::MissingSuccessThreshold);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_probability", self.mutation_probability)?;
        Ok(())
    }
}
