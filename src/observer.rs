//! Progress reporting.
//!
//! Engines never print. They report to an [`Observer`], and the default
//! [`LogObserver`] forwards those reports to the `log` facade. Callers that
//! want the raw events (UIs, tests, metrics) implement [`Observer`]
//! themselves and pass it to `run_observed`.

use crate::fitness::Fitness;
use std::fmt;
use std::time::Duration;

/// Position of an event within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Generation index of the genetic engine. Generation 0 is the
    /// initial population.
    Generation(usize),

    /// Round and iteration of the hill-climbing engine. `iteration` is
    /// `None` for the starting candidate of a round.
    Iteration {
        round: usize,
        iteration: Option<usize>,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Generation(g) => write!(f, "generation {g}"),
            Step::Iteration {
                round,
                iteration: Some(i),
            } => write!(f, "round {round}, iteration {i}"),
            Step::Iteration {
                round,
                iteration: None,
            } => write!(f, "round {round}, start"),
        }
    }
}

/// Periodic snapshot of a genetic run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress<F> {
    /// Generation the snapshot was taken after.
    pub generation: usize,

    /// Best fitness seen so far.
    pub best_fitness: F,

    /// Consecutive generations without improvement, after any reset.
    pub dead_rounds: usize,

    /// Wall-clock time since the run started.
    pub elapsed: Duration,
}

/// Sink for engine events. Every method defaults to a no-op.
pub trait Observer<F: Fitness> {
    /// Called after generation 1 and then every `output_rounds` generations.
    fn on_progress(&mut self, _progress: &Progress<F>) {}

    /// Called whenever the running best strictly improves.
    fn on_new_best(&mut self, _step: Step, _fitness: F) {}

    /// Called once when the success threshold is reached.
    fn on_solved(&mut self, _step: Step, _fitness: F) {}

    /// Called when stagnation forced a full regeneration of the population.
    fn on_population_reset(&mut self, _generation: usize) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<F: Fitness> Observer<F> for NoopObserver {}

/// Forwards events to the `log` facade under the `u_stochastic` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<F: Fitness> Observer<F> for LogObserver {
    fn on_progress(&mut self, p: &Progress<F>) {
        log::info!(
            "generation {}: fittest {:?}, dead rounds {}, elapsed {:.3}s",
            p.generation,
            p.best_fitness,
            p.dead_rounds,
            p.elapsed.as_secs_f64()
        );
    }

    fn on_new_best(&mut self, step: Step, fitness: F) {
        log::debug!("new best at {step}: {fitness:?}");
    }

    fn on_solved(&mut self, step: Step, fitness: F) {
        log::info!("solved at {step} with fitness {fitness:?}");
    }

    fn on_population_reset(&mut self, generation: usize) {
        log::info!("generation {generation}: population stagnated, regenerated from scratch");
    }
}
