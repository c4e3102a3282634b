//! Generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → breeding → best tracking → death → shuffle → repeat.
//!
//! Each generation contains two data-parallel fan-outs, each a barrier:
//!
//! 1. **Breeding** over `population_size / 2` pair slots. Slot `i` writes
//!    only output positions `2i` and `2i + 1`, reading the previous
//!    generation and the selector.
//! 2. **Death** over all `population_size` slots. Slot `i` may replace
//!    only position `i`.
//!
//! Before each fan-out the master generator draws one seed per slot in
//! slot order, and every slot builds its own generator from that seed (see
//! [`crate::random`]). Output is therefore identical for `parallel = true`
//! and `parallel = false`.

use super::config::GaConfig;
use super::selection::Selector;
use super::types::GeneticPopulator;
use crate::error::ConfigError;
use crate::fitness::{fittest_index, Candidate, Fitness, FitnessOf};
use crate::observer::{LogObserver, Observer, Progress, Step};
use crate::random::{create_rng, master_rng, slot_seeds};
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of a genetic run.
///
/// Running out of generations is a normal outcome: `solved` is then
/// `false` and `best` is the fittest candidate seen.
#[derive(Debug, Clone)]
pub struct GaResult<C: Candidate> {
    /// Independent snapshot of the fittest candidate seen during the run.
    pub best: C,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: C::Fitness,

    /// Index of the last generation built. 0 means only the initial
    /// population was generated.
    pub last_generation: usize,

    /// Whether `best` reached the success threshold.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Total number of candidates discarded and regenerated by the death
    /// pass, including stagnation resets.
    pub regenerated: usize,

    /// Best fitness after each generation, starting with generation 0.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::new()
///     .with_populator(MyPopulator::new())
///     .with_success_threshold(81)
///     .with_seed(42);
/// let result = GaRunner::run(&config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic engine, logging progress through [`LogObserver`].
    pub fn run<P, S>(config: &GaConfig<P, S>) -> Result<GaResult<P::Candidate>, ConfigError>
    where
        P: GeneticPopulator,
        S: Selector,
    {
        Self::run_observed(config, &mut LogObserver, None)
    }

    /// Runs the genetic engine with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before starting the next generation and returns the best candidate
    /// found so far.
    pub fn run_with_cancel<P, S>(
        config: &GaConfig<P, S>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Candidate>, ConfigError>
    where
        P: GeneticPopulator,
        S: Selector,
    {
        Self::run_observed(config, &mut LogObserver, cancel)
    }

    /// Runs the genetic engine, reporting every event to `observer`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] before any candidate is generated if the
    /// configuration is invalid.
    pub fn run_observed<P, S, O>(
        config: &GaConfig<P, S>,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Candidate>, ConfigError>
    where
        P: GeneticPopulator,
        S: Selector,
        O: Observer<FitnessOf<P::Candidate>>,
    {
        config.validate()?;
        let populator = config
            .populator
            .as_ref()
            .ok_or(ConfigError::MissingPopulator)?;
        let threshold = config
            .fitness_success_threshold
            .ok_or(ConfigError::MissingSuccessThreshold)?;

        let start = Instant::now();
        let mut rng = master_rng(config.seed);

        // 1. Generation 0
        let mut population: Vec<P::Candidate> = (0..config.population_size)
            .map(|_| populator.generate(&mut rng))
            .collect();
        let mut best = populator.survive(&population[fittest_index(&population)]);
        observer.on_new_best(Step::Generation(0), best.fitness());

        let mut fitness_history = vec![best.fitness().to_f64()];

        if best.fitness() >= threshold {
            observer.on_solved(Step::Generation(0), best.fitness());
            return Ok(finish(best, 0, true, false, 0, fitness_history));
        }

        let mut dead_rounds = 0usize;
        let mut regenerated = 0usize;
        let mut last_generation = 0usize;
        let mut cancelled = false;

        // 2. Generational loop
        for generation in 1..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let seeds = slot_seeds(&mut rng, config.population_size / 2);
            let mut next = breed(config, populator, &population, seeds);
            last_generation = generation;

            // Best tracking
            let fittest = fittest_index(&next);
            let improved = next[fittest].fitness() > best.fitness();
            if improved {
                best = populator.survive(&next[fittest]);
                observer.on_new_best(Step::Generation(generation), best.fitness());
            }
            fitness_history.push(best.fitness().to_f64());

            if best.fitness() >= threshold {
                observer.on_solved(Step::Generation(generation), best.fitness());
                return Ok(finish(
                    best,
                    generation,
                    true,
                    false,
                    regenerated,
                    fitness_history,
                ));
            }

            if improved {
                dead_rounds = 0;
            } else {
                dead_rounds += 1;
            }

            // Death
            let reset = dead_rounds >= config.permissible_dead_rounds;
            let kill_threshold = config.kill_threshold(best.fitness());
            let seeds = slot_seeds(&mut rng, config.population_size);
            regenerated += cull(
                populator,
                &mut next,
                reset,
                kill_threshold,
                seeds,
                config.parallel,
            );
            if reset {
                dead_rounds = 0;
                observer.on_population_reset(generation);
            }

            // First report right after the first bred generation.
            if config.output_rounds > 0 && (generation - 1) % config.output_rounds == 0 {
                observer.on_progress(&Progress {
                    generation,
                    best_fitness: best.fitness(),
                    dead_rounds,
                    elapsed: start.elapsed(),
                });
            }

            // Pairs were formed from adjacent slots; shuffle so the next
            // generation pairs differently.
            population = next;
            population.shuffle(&mut rng);
        }

        Ok(finish(
            best,
            last_generation,
            false,
            cancelled,
            regenerated,
            fitness_history,
        ))
    }
}

fn finish<C: Candidate>(
    best: C,
    last_generation: usize,
    solved: bool,
    cancelled: bool,
    regenerated: usize,
    fitness_history: Vec<f64>,
) -> GaResult<C> {
    GaResult {
        best_fitness: best.fitness(),
        best,
        last_generation,
        solved,
        cancelled,
        regenerated,
        fitness_history,
    }
}

/// Builds the next generation, one pair slot per seed.
fn breed<P, S>(
    config: &GaConfig<P, S>,
    populator: &P,
    prev: &[P::Candidate],
    seeds: Vec<u64>,
) -> Vec<P::Candidate>
where
    P: GeneticPopulator,
    S: Selector,
{
    let crossover_probability = config.crossover_probability;
    let mutation_probability = config.mutation_probability;
    let selector = &config.selector;

    let slot = |(i, seed): (usize, u64)| -> (P::Candidate, P::Candidate) {
        let mut rng = create_rng(seed);
        if rng.random_range(0.0..1.0) < crossover_probability {
            let p0 = selector.select(prev, &mut rng);
            let p1 = selector.select(prev, &mut rng);
            let (c0, c1) = populator.crossover(&prev[p0], &prev[p1], &mut rng);
            (
                maybe_mutate(populator, c0, mutation_probability, &mut rng),
                maybe_mutate(populator, c1, mutation_probability, &mut rng),
            )
        } else {
            (
                populator.survive(&prev[2 * i]),
                populator.survive(&prev[2 * i + 1]),
            )
        }
    };

    let pairs: Vec<(P::Candidate, P::Candidate)> = if config.parallel {
        seeds.into_par_iter().enumerate().map(slot).collect()
    } else {
        seeds.into_iter().enumerate().map(slot).collect()
    };

    let mut next = Vec::with_capacity(prev.len());
    for (c0, c1) in pairs {
        next.push(c0);
        next.push(c1);
    }
    next
}

fn maybe_mutate<P: GeneticPopulator, R: Rng>(
    populator: &P,
    child: P::Candidate,
    probability: f64,
    rng: &mut R,
) -> P::Candidate {
    if rng.random_range(0.0..1.0) < probability {
        populator.mutate(&child, rng)
    } else {
        child
    }
}

/// Replaces every candidate at or below `kill_threshold` (or all of them
/// when `reset` is set) with a fresh one. Returns the number replaced.
/// Without a threshold only a reset replaces anything.
fn cull<P: GeneticPopulator>(
    populator: &P,
    population: &mut [P::Candidate],
    reset: bool,
    kill_threshold: Option<FitnessOf<P::Candidate>>,
    seeds: Vec<u64>,
    parallel: bool,
) -> usize {
    let slot = |(candidate, seed): (&mut P::Candidate, u64)| -> usize {
        if reset || kill_threshold.is_some_and(|t| candidate.fitness() <= t) {
            *candidate = populator.generate(&mut create_rng(seed));
            1
        } else {
            0
        }
    };

    if parallel {
        population
            .par_iter_mut()
            .zip(seeds.into_par_iter())
            .map(slot)
            .sum()
    } else {
        population.iter_mut().zip(seeds).map(slot).sum()
    }
}

// ============================================================================
// Tests
// ============================================================================
