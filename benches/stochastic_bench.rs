//! Criterion benchmarks for the stochastic search engines.
//!
//! Uses OneMax (maximize set bits) to measure pure engine overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_stochastic::ga::{GaConfig, GaRunner, GeneticPopulator};
use u_stochastic::hc::{HcConfig, HcRunner, HillClimbingPopulator, Metropolis};
use u_stochastic::{Candidate, NoopObserver};

// ===========================================================================
// OneMax
// ===========================================================================

#[derive(Clone)]
struct Bits(Vec<bool>);

impl Candidate for Bits {
    type Fitness = usize;
    fn fitness(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

struct OneMax {
    n: usize,
}

impl OneMax {
    fn flip<R: Rng>(&self, c: &Bits, rng: &mut R) -> Bits {
        let mut bits = c.0.clone();
        let i = rng.random_range(0..self.n);
        bits[i] = !bits[i];
        Bits(bits)
    }
}

impl GeneticPopulator for OneMax {
    type Candidate = Bits;

    fn generate<R: Rng>(&self, rng: &mut R) -> Bits {
        Bits((0..self.n).map(|_| rng.random_bool(0.5)).collect())
    }

    fn mutate<R: Rng>(&self, c: &Bits, rng: &mut R) -> Bits {
        self.flip(c, rng)
    }

    fn crossover<R: Rng>(&self, a: &Bits, b: &Bits, rng: &mut R) -> (Bits, Bits) {
        let point = rng.random_range(0..self.n);
        let mut c0 = a.0.clone();
        let mut c1 = b.0.clone();
        c0[point..].copy_from_slice(&b.0[point..]);
        c1[point..].copy_from_slice(&a.0[point..]);
        (Bits(c0), Bits(c1))
    }
}

impl HillClimbingPopulator for OneMax {
    type Candidate = Bits;

    fn generate<R: Rng>(&self, rng: &mut R) -> Bits {
        GeneticPopulator::generate(self, rng)
    }

    fn generate_neighbour<R: Rng>(&self, c: &Bits, rng: &mut R) -> Bits {
        self.flip(c, rng)
    }
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_ga_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax");
    group.sample_size(10);

    for (n, pop, gen) in [(64usize, 100usize, 50usize), (256, 200, 30), (1024, 200, 20)] {
        for parallel in [false, true] {
            let config = GaConfig::new()
                .with_populator(OneMax { n })
                .with_success_threshold(n + 1)
                .with_population_size(pop)
                .with_max_generations(gen)
                .with_crossover_probability(0.8)
                .with_parallel(parallel)
                .with_seed(42);
            let label = if parallel { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(format!("n{n}_p{pop}_g{gen}_{label}"), n),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result =
                            GaRunner::run_observed(black_box(config), &mut NoopObserver, None);
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_hc_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc_onemax");
    group.sample_size(10);

    for &n in &[64usize, 256, 1024] {
        let config = HcConfig::new()
            .with_populator(OneMax { n })
            .with_success_threshold(n + 1)
            .with_max_rounds(4)
            .with_max_iterations_per_round(2_000)
            .with_acceptance(Metropolis::default())
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| {
                let result = HcRunner::run_observed(black_box(config), &mut NoopObserver, None);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_onemax, bench_hc_onemax);
criterion_main!(benches);
