//! Fitness values and candidates.
//!
//! [`Candidate`] is the only thing the engines know about a point in the
//! search space: it can be cloned and it reports a [`Fitness`]. Higher
//! fitness is better.

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable. Unlike
/// minimizing frameworks, **higher fitness is better** here.
///
/// Built-in implementations exist for `f64`, `f32` and the primitive
/// integer types.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;

    /// Returns `factor * self`, converted back into the fitness type.
    ///
    /// Integer fitness truncates toward zero.
    fn scaled(self, factor: f64) -> Self;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn scaled(self, factor: f64) -> Self {
        factor * self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn scaled(self, factor: f64) -> Self {
        (factor * self as f64) as f32
    }
}

macro_rules! integer_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn scaled(self, factor: f64) -> Self {
                    (factor * self as f64) as $t
                }
            }
        )*
    };
}

integer_fitness!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A candidate solution.
///
/// Candidates own their representation and compute (or cache) their own
/// fitness. Engines never mutate a candidate in place: every populator
/// operation hands back a new, independently owned value.
///
/// ```
/// use u_stochastic::Candidate;
///
/// #[derive(Clone)]
/// struct Bits {
///     bits: Vec<bool>,
/// }
///
/// impl Candidate for Bits {
///     type Fitness = usize;
///     fn fitness(&self) -> usize {
///         self.bits.iter().filter(|&&b| b).count()
///     }
/// }
/// ```
pub trait Candidate: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness of this candidate.
    fn fitness(&self) -> Self::Fitness;
}

/// Fitness type of a candidate type.
pub type FitnessOf<C> = <C as Candidate>::Fitness;

/// Returns the larger of two fitness values, preferring `a` when unordered.
pub(crate) fn max_fitness<F: Fitness>(a: F, b: F) -> F {
    if b > a {
        b
    } else {
        a
    }
}

/// Index of the fittest candidate. Ties resolve to the lowest index.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn fittest_index<C: Candidate>(population: &[C]) -> usize {
    assert!(!population.is_empty(), "population must not be empty");
    let mut best = 0;
    let mut best_fitness = population[0].fitness();
    for (i, candidate) in population.iter().enumerate().skip(1) {
        let f = candidate.fitness();
        if f > best_fitness {
            best = i;
            best_fitness = f;
        }
    }
    best
}
