//! Acceptance policies.
//!
//! The hill-climbing loop is fixed; what varies between local search
//! strategies is when a neighbour replaces the current candidate and what
//! memory that decision keeps. [`Acceptance`] captures both: a per-round
//! [`State`](Acceptance::State) created fresh at the start of every round,
//! and a decision that may update it.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use crate::fitness::{Candidate, Fitness};
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashSet, VecDeque};
use std::hash::{Hash, Hasher};

/// Decides whether the engine moves from `current` to `next`.
pub trait Acceptance<C: Candidate> {
    /// Per-round memory. `()` for stateless policies.
    type State;

    /// Creates the state for a new round.
    fn init_state(&self) -> Self::State;

    /// Returns `true` to make `next` the current candidate.
    fn accept<R: Rng>(&self, next: &C, current: &C, state: &mut Self::State, rng: &mut R)
        -> bool;
}

/// Accepts a neighbour only if it is strictly fitter. Plain hill climbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictImprovement;

impl<C: Candidate> Acceptance<C> for StrictImprovement {
    type State = ();

    fn init_state(&self) {}

    fn accept<R: Rng>(&self, next: &C, current: &C, _state: &mut (), _rng: &mut R) -> bool {
        next.fitness() > current.fitness()
    }
}

/// Accepts a neighbour unless it is strictly worse, so the search can
/// drift across plateaus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonWorsening;

impl<C: Candidate> Acceptance<C> for NonWorsening {
    type State = ();

    fn init_state(&self) {}

    fn accept<R: Rng>(&self, next: &C, current: &C, _state: &mut (), _rng: &mut R) -> bool {
        next.fitness() >= current.fitness()
    }
}

/// Accepts every neighbour. A random walk that still tracks the best.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysAccept;

impl<C: Candidate> Acceptance<C> for AlwaysAccept {
    type State = ();

    fn init_state(&self) {}

    fn accept<R: Rng>(&self, _next: &C, _current: &C, _state: &mut (), _rng: &mut R) -> bool {
        true
    }
}

/// Metropolis acceptance: simulated annealing on top of the hill-climbing
/// loop.
///
/// Improvements are always accepted. A neighbour worse by `delta` is
/// accepted with probability `exp(-delta / T)`. The per-round state is the
/// temperature `T`, which starts at `initial_temperature` and is multiplied
/// by `alpha` after every decision, never dropping below `min_temperature`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metropolis {
    /// Starting temperature of every round.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Typical: 0.95–0.999.
    pub alpha: f64,

    /// Temperature floor.
    pub min_temperature: f64,
}

impl Default for Metropolis {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            alpha: 0.995,
            min_temperature: 1e-6,
        }
    }
}

impl<C: Candidate> Acceptance<C> for Metropolis {
    type State = f64;

    fn init_state(&self) -> f64 {
        self.initial_temperature
    }

    fn accept<R: Rng>(&self, next: &C, current: &C, temperature: &mut f64, rng: &mut R) -> bool {
        let delta = current.fitness().to_f64() - next.fitness().to_f64();
        let accept = if delta < 0.0 {
            true
        } else if *temperature > 0.0 {
            rng.random_range(0.0..1.0) < (-delta / *temperature).exp()
        } else {
            false
        };
        *temperature = (*temperature * self.alpha).max(self.min_temperature);
        accept
    }
}

/// Tabu acceptance: rejects neighbours visited recently, otherwise accepts
/// anything not worse than the current candidate.
///
/// The per-round state remembers the hashes of the last `tenure` accepted
/// candidates, which keeps the search from cycling on plateaus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tabu {
    /// Number of recent candidates that may not be revisited.
    pub tenure: usize,
}

/// Short-term memory for [`Tabu`].
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    queue: VecDeque<u64>,
    set: HashSet<u64>,
}

impl TabuList {
    fn contains(&self, key: u64) -> bool {
        self.set.contains(&key)
    }

    fn push(&mut self, key: u64, tenure: usize) {
        if tenure == 0 || !self.set.insert(key) {
            return;
        }
        self.queue.push_back(key);
        while self.queue.len() > tenure {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
    }

    /// Number of candidates currently tabu.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

fn key_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<C: Candidate + Hash> Acceptance<C> for Tabu {
    type State = TabuList;

    fn init_state(&self) -> TabuList {
        TabuList::default()
    }

    fn accept<R: Rng>(&self, next: &C, current: &C, list: &mut TabuList, _rng: &mut R) -> bool {
        if list.is_empty() {
            list.push(key_of(current), self.tenure);
        }
        let key = key_of(next);
        if list.contains(key) || next.fitness() < current.fitness() {
            return false;
        }
        list.push(key, self.tenure);
        true
    }
}
