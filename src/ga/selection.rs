//! Parent selection.
//!
//! Selection determines which candidates are chosen as parents for
//! crossover. [`Selector`] is the extension point; [`Selection`] provides
//! the common strategies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::fitness::{Candidate, Fitness};
use rand::Rng;

/// Chooses a parent index from a population.
///
/// Implementations are shared across rayon workers, so they must be
/// `Send + Sync`. They hold no mutable state: all randomness comes from
/// the per-slot generator passed in.
pub trait Selector: Send + Sync {
    /// Returns an index in `0..population.len()`.
    fn select<C: Candidate, R: Rng>(&self, population: &[C], rng: &mut R) -> usize;
}

/// Built-in selection strategies.
///
/// All strategies **maximize** fitness.
///
/// # Examples
///
/// ```
/// use u_stochastic::ga::Selection;
///
/// // Binary tournament, the default
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Tournament(2));
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` indices uniformly with replacement,
    /// keep the fittest. Earlier draws win ties.
    ///
    /// - k=2: light pressure (good for diversity)
    /// - k=3-5: moderate pressure
    /// - k>5: strong pressure (risk of premature convergence)
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights are shifted by the population minimum so negative fitness
    /// is handled.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank-based selection.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(2)
    }
}

impl Selector for Selection {
    /// # Panics
    /// Panics if `population` is empty.
    fn select<C: Candidate, R: Rng>(&self, population: &[C], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

fn tournament<C: Candidate, R: Rng>(population: &[C], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection.
///
/// weight_i = fitness_i - min_fitness + epsilon, so the least fit candidate
/// still has a small chance.
fn roulette<C: Candidate, R: Rng>(population: &[C], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = population.iter().map(|c| c.fitness().to_f64()).collect();
    let min_fitness = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            let w = f - min_fitness + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Linear ranking: the fittest gets weight n, the least fit weight 1.
fn rank<C: Candidate, R: Rng>(population: &[C], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    // Fittest first
    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c.fitness().to_f64()))
        .collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed[n - 1].0
}
