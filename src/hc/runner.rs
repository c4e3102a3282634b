//! Hill-climbing loop execution.
//!
//! # Algorithm
//!
//! For each of `max_rounds` independent restarts:
//!
//! 1. Create fresh per-round acceptance state
//! 2. Generate a starting candidate
//! 3. For up to `max_iterations_per_round` iterations:
//!    a. Generate a neighbour of the current candidate
//!    b. Move to it if the acceptance policy agrees
//!    c. Stop the whole run if the current candidate reaches the threshold
//!    d. Snapshot the current candidate if it beats the best seen
//!
//! Only the running best carries over between rounds. Iterations within a
//! round are strictly sequential, so the engine runs on the caller's
//! thread.

use super::acceptance::Acceptance;
use super::config::HcConfig;
use super::types::HillClimbingPopulator;
use crate::error::ConfigError;
use crate::fitness::{Candidate, Fitness, FitnessOf};
use crate::observer::{LogObserver, Observer, Step};
use crate::random::master_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HcResult<C: Candidate> {
    /// The fittest candidate observed. When `solved`, the candidate that
    /// reached the threshold.
    pub best: C,

    /// Fitness of `best`.
    pub best_fitness: C::Fitness,

    /// The current candidate when the run stopped.
    pub current: C,

    /// Number of rounds started.
    pub rounds: usize,

    /// Total neighbour evaluations across all rounds.
    pub iterations: usize,

    /// Number of neighbours accepted as the new current candidate.
    pub accepted_moves: usize,

    /// Whether the success threshold was reached.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness at the end of each completed round.
    pub fitness_history: Vec<f64>,
}

/// Executes the hill-climbing loop.
pub struct HcRunner;

impl HcRunner {
    /// Runs the hill-climbing engine, logging through [`LogObserver`].
    pub fn run<P, A>(config: &HcConfig<P, A>) -> Result<HcResult<P::Candidate>, ConfigError>
    where
        P: HillClimbingPopulator,
        A: Acceptance<P::Candidate>,
    {
        Self::run_observed(config, &mut LogObserver, None)
    }

    /// Runs the hill-climbing engine with an optional cancellation token.
    ///
    /// The flag is checked between rounds; the first round always runs.
    pub fn run_with_cancel<P, A>(
        config: &HcConfig<P, A>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HcResult<P::Candidate>, ConfigError>
    where
        P: HillClimbingPopulator,
        A: Acceptance<P::Candidate>,
    {
        Self::run_observed(config, &mut LogObserver, cancel)
    }

    /// Runs the hill-climbing engine, reporting every event to `observer`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] before any candidate is generated if the
    /// configuration is invalid.
    pub fn run_observed<P, A, O>(
        config: &HcConfig<P, A>,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HcResult<P::Candidate>, ConfigError>
    where
        P: HillClimbingPopulator,
        A: Acceptance<P::Candidate>,
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

        let mut rng = master_rng(config.seed);

        let mut round = 0usize;
        let mut state = config.acceptance.init_state();
        let mut current = populator.generate(&mut rng);
        let mut best = current.clone();
        observer.on_new_best(start_of(round), best.fitness());

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut cancelled = false;
        let mut fitness_history = Vec::new();

        loop {
            if current.fitness() >= threshold {
                observer.on_solved(start_of(round), current.fitness());
                return Ok(HcResult {
                    best_fitness: current.fitness(),
                    best: current.clone(),
                    current,
                    rounds: round + 1,
                    iterations,
                    accepted_moves,
                    solved: true,
                    cancelled: false,
                    fitness_history,
                });
            }
            if current.fitness() > best.fitness() {
                best = current.clone();
                observer.on_new_best(start_of(round), best.fitness());
            }

            for iteration in 0..config.max_iterations_per_round {
                let next = populator.generate_neighbour(&current, &mut rng);
                iterations += 1;
                if config.acceptance.accept(&next, &current, &mut state, &mut rng) {
                    current = next;
                    accepted_moves += 1;
                }

                let step = Step::Iteration {
                    round,
                    iteration: Some(iteration),
                };
                if current.fitness() >= threshold {
                    observer.on_solved(step, current.fitness());
                    return Ok(HcResult {
                        best_fitness: current.fitness(),
                        best: current.clone(),
                        current,
                        rounds: round + 1,
                        iterations,
                        accepted_moves,
                        solved: true,
                        cancelled: false,
                        fitness_history,
                    });
                }
                if current.fitness() > best.fitness() {
                    best = current.clone();
                    observer.on_new_best(step, best.fitness());
                }
            }

            fitness_history.push(best.fitness().to_f64());
            round += 1;
            if round >= config.max_rounds {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            state = config.acceptance.init_state();
            current = populator.generate(&mut rng);
        }

        Ok(HcResult {
            best_fitness: best.fitness(),
            best,
            current,
            rounds: round,
            iterations,
            accepted_moves,
            solved: false,
            cancelled,
            fitness_history,
        })
    }
}

fn start_of(round: usize) -> Step {
    Step::Iteration {
        round,
        iteration: None,
    }
}
