//! Property tests for both engines.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use u_stochastic::ga::{GaConfig, GaRunner, GeneticPopulator, Selection, Selector};
use u_stochastic::hc::{HcConfig, HcRunner, HillClimbingPopulator, Metropolis};
use u_stochastic::{Candidate, ConfigError, NoopObserver};

// ===========================================================================
// Permutation problem: count fixed points (maximize)
// ===========================================================================

#[derive(Clone, Debug, PartialEq)]
struct Perm(Vec<usize>);

impl Candidate for Perm {
    type Fitness = usize;
    fn fitness(&self) -> usize {
        self.0.iter().enumerate().filter(|&(i, &v)| i == v).count()
    }
}

fn is_permutation(p: &Perm, n: usize) -> bool {
    let mut seen = vec![false; n];
    p.0.len() == n
        && p.0.iter().all(|&v| {
            if v >= n || seen[v] {
                false
            } else {
                seen[v] = true;
                true
            }
        })
}

struct FixedPoints {
    n: usize,
    generated: AtomicUsize,
}

impl FixedPoints {
    fn new(n: usize) -> Self {
        Self {
            n,
            generated: AtomicUsize::new(0),
        }
    }
}

impl GeneticPopulator for FixedPoints {
    type Candidate = Perm;

    fn generate<R: Rng>(&self, rng: &mut R) -> Perm {
        self.generated.fetch_add(1, Ordering::Relaxed);
        let mut v: Vec<usize> = (0..self.n).collect();
        v.shuffle(rng);
        Perm(v)
    }

    fn mutate<R: Rng>(&self, c: &Perm, rng: &mut R) -> Perm {
        let mut v = c.0.clone();
        let i = rng.random_range(0..self.n);
        let j = rng.random_range(0..self.n);
        v.swap(i, j);
        Perm(v)
    }

    /// Order crossover: keep a slice of one parent, fill the rest in the
    /// other parent's order.
    fn crossover<R: Rng>(&self, a: &Perm, b: &Perm, rng: &mut R) -> (Perm, Perm) {
        let i = rng.random_range(0..self.n);
        let j = rng.random_range(i..self.n);
        (order_cross(a, b, i, j), order_cross(b, a, i, j))
    }
}

fn order_cross(keep: &Perm, fill: &Perm, i: usize, j: usize) -> Perm {
    let n = keep.0.len();
    let kept = &keep.0[i..=j];
    let mut rest = fill.0.iter().filter(|v| !kept.contains(v)).copied();
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        if k >= i && k <= j {
            out.push(keep.0[k]);
        } else if let Some(v) = rest.next() {
            out.push(v);
        }
    }
    Perm(out)
}

impl HillClimbingPopulator for FixedPoints {
    type Candidate = Perm;

    fn generate<R: Rng>(&self, rng: &mut R) -> Perm {
        GeneticPopulator::generate(self, rng)
    }

    fn generate_neighbour<R: Rng>(&self, c: &Perm, rng: &mut R) -> Perm {
        self.mutate(c, rng)
    }
}

struct SizeProbe {
    sizes: Mutex<Vec<usize>>,
}

impl Selector for SizeProbe {
    fn select<C: Candidate, R: Rng>(&self, population: &[C], rng: &mut R) -> usize {
        if let Ok(mut sizes) = self.sizes.lock() {
            sizes.push(population.len());
        }
        Selection::Tournament(2).select(population, rng)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn mutate_and_crossover_keep_permutations(seed in any::<u64>(), n in 2usize..30) {
        let populator = FixedPoints::new(n);
        let mut rng = u_stochastic::random::create_rng(seed);
        let a = GeneticPopulator::generate(&populator, &mut rng);
        let b = GeneticPopulator::generate(&populator, &mut rng);

        let m = populator.mutate(&a, &mut rng);
        prop_assert!(is_permutation(&m, n));
        let (c0, c1) = populator.crossover(&a, &b, &mut rng);
        prop_assert!(is_permutation(&c0, n));
        prop_assert!(is_permutation(&c1, n));
        // Inputs untouched
        prop_assert!(is_permutation(&a, n));
    }

    #[test]
    fn ga_population_constant_and_best_monotone(
        seed in any::<u64>(),
        half in 1usize..12,
        crossover in 0.0f64..=1.0,
        mutation in 0.0f64..=1.0,
        death_factor in 0.0f64..1.0,
        dead_rounds in 1usize..8,
        parallel in any::<bool>(),
    ) {
        let n = 12;
        let size = half * 2;
        let config = GaConfig::new()
            .with_populator(FixedPoints::new(n))
            .with_success_threshold(n + 1)
            .with_population_size(size)
            .with_max_generations(20)
            .with_crossover_probability(crossover)
            .with_mutation_probability(mutation)
            .with_death_factor(death_factor)
            .with_permissible_dead_rounds(dead_rounds)
            .with_parallel(parallel)
            .with_seed(seed)
            .with_selector(SizeProbe { sizes: Mutex::new(Vec::new()) });

        let result = GaRunner::run_observed(&config, &mut NoopObserver, None).unwrap();

        prop_assert!(!result.solved);
        prop_assert_eq!(result.fitness_history.len(), 20);
        for w in result.fitness_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
        prop_assert!(is_permutation(&result.best, n));
        let sizes = config.selector.sizes.lock().unwrap();
        prop_assert!(sizes.iter().all(|&s| s == size));
    }

    #[test]
    fn ga_odd_population_rejected_without_side_effects(half in 0usize..50) {
        let size = half * 2 + 1;
        let config = GaConfig::new()
            .with_populator(FixedPoints::new(5))
            .with_success_threshold(5)
            .with_population_size(size);

        let err = GaRunner::run(&config).unwrap_err();
        prop_assert_eq!(err, ConfigError::OddPopulationSize(size));
        let populator = config.populator.as_ref().unwrap();
        prop_assert_eq!(populator.generated.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn kill_threshold_is_max_of_floor_and_scaled_best(
        floor in -100.0f64..100.0,
        factor in 0.0f64..2.0,
        best in -100.0f64..100.0,
    ) {
        let config = GaConfig::<Reals>::new()
            .with_death_threshold(floor)
            .with_death_factor(factor);
        let expected = if factor > 0.0 { floor.max(factor * best) } else { floor };
        let threshold = config.kill_threshold(best);
        prop_assert!(threshold.is_some());
        prop_assert!((threshold.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn hc_best_monotone_across_rounds(seed in any::<u64>(), rounds in 1usize..6) {
        let n = 10;
        let config = HcConfig::new()
            .with_populator(FixedPoints::new(n))
            .with_success_threshold(n + 1)
            .with_max_rounds(rounds)
            .with_max_iterations_per_round(30)
            .with_acceptance(Metropolis { initial_temperature: 2.0, alpha: 0.9, min_temperature: 0.01 })
            .with_seed(seed);

        let result = HcRunner::run_observed(&config, &mut NoopObserver, None).unwrap();

        prop_assert_eq!(result.rounds, rounds);
        prop_assert_eq!(result.fitness_history.len(), rounds);
        for w in result.fitness_history.windows(2) {
            prop_assert!(w[1] >= w[0]);
        }
        prop_assert!(is_permutation(&result.current, n));
    }
}

// ===========================================================================
// Real-valued fitness used for kill-threshold checks
// ===========================================================================

#[derive(Clone, Debug)]
struct Real(f64);

impl Candidate for Real {
    type Fitness = f64;
    fn fitness(&self) -> f64 {
        self.0
    }
}

struct Reals;

impl GeneticPopulator for Reals {
    type Candidate = Real;

    fn generate<R: Rng>(&self, rng: &mut R) -> Real {
        Real(rng.random_range(0.0..1.0))
    }

    fn mutate<R: Rng>(&self, c: &Real, rng: &mut R) -> Real {
        Real((c.0 + rng.random_range(-0.1..0.1)).clamp(0.0, 1.0))
    }

    fn crossover<R: Rng>(&self, a: &Real, b: &Real, _rng: &mut R) -> (Real, Real) {
        let mid = (a.0 + b.0) / 2.0;
        (Real(mid), Real(mid))
    }
}

#[test]
fn kill_threshold_disabled_by_default() {
    let config = GaConfig::<Reals>::new();
    assert_eq!(config.kill_threshold(0.0), None);
    assert_eq!(config.kill_threshold(-0.75), None);
    assert_eq!(config.kill_threshold(0.75), None);
}

#[test]
fn ga_real_valued_reaches_threshold() {
    let config = GaConfig::new()
        .with_populator(Reals)
        .with_success_threshold(0.99)
        .with_population_size(20)
        .with_max_generations(2_000)
        .with_crossover_probability(0.8)
        .with_mutation_probability(0.5)
        .with_death_factor(0.5)
        .with_seed(17);

    let result = GaRunner::run(&config).unwrap();
    assert!(result.solved);
    assert!(result.best_fitness >= 0.99);
}
