//! Populator trait for the genetic engine.
//!
//! [`GeneticPopulator`] is the contract between the generic generational
//! loop and a domain: it knows how to create, recombine, perturb, and copy
//! candidates. The engine supplies all randomness.

use crate::fitness::Candidate;
use rand::Rng;

/// Supplies domain semantics to the genetic engine.
///
/// Every operation returns a **new, independently owned** candidate; inputs
/// are only borrowed. All operations are infallible by contract: a
/// populator that cannot complete one should panic, and the panic
/// propagates out of the engine unmodified.
///
/// # Thread Safety
///
/// `GeneticPopulator` must be `Send + Sync` because the engine builds each
/// generation as a data-parallel map over pair slots, calling the populator
/// from rayon worker threads. Each call receives its own generator.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_stochastic::Candidate;
/// use u_stochastic::ga::GeneticPopulator;
///
/// #[derive(Clone)]
/// struct Bits(Vec<bool>);
///
/// impl Candidate for Bits {
///     type Fitness = usize;
///     fn fitness(&self) -> usize {
///         self.0.iter().filter(|&&b| b).count()
///     }
/// }
///
/// struct OneMax(usize);
///
/// impl GeneticPopulator for OneMax {
///     type Candidate = Bits;
///
///     fn generate<R: Rng>(&self, rng: &mut R) -> Bits {
///         Bits((0..self.0).map(|_| rng.random_bool(0.5)).collect())
///     }
///
///     fn mutate<R: Rng>(&self, c: &Bits, rng: &mut R) -> Bits {
///         let mut bits = c.0.clone();
///         let i = rng.random_range(0..bits.len());
///         bits[i] = !bits[i];
///         Bits(bits)
///     }
///
///     fn crossover<R: Rng>(&self, a: &Bits, b: &Bits, rng: &mut R) -> (Bits, Bits) {
///         let cut = rng.random_range(0..self.0);
///         let c0 = a.0[..cut].iter().chain(&b.0[cut..]).copied().collect();
///         let c1 = b.0[..cut].iter().chain(&a.0[cut..]).copied().collect();
///         (Bits(c0), Bits(c1))
///     }
/// }
/// ```
pub trait GeneticPopulator: Send + Sync {
    /// The candidate type this populator produces.
    type Candidate: Candidate;

    /// Creates a fresh random candidate.
    ///
    /// Used for the initial population and to replace candidates that die.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Candidate;

    /// Returns a perturbed copy of `candidate`.
    ///
    /// The result must satisfy the domain's validity constraints whether or
    /// not its fitness improves.
    fn mutate<R: Rng>(&self, candidate: &Self::Candidate, rng: &mut R) -> Self::Candidate;

    /// Recombines two parents into two children.
    fn crossover<R: Rng>(
        &self,
        parent0: &Self::Candidate,
        parent1: &Self::Candidate,
        rng: &mut R,
    ) -> (Self::Candidate, Self::Candidate);

    /// Returns an independent deep copy of `candidate`.
    ///
    /// The engine uses this for unchanged survivors and for its snapshot of
    /// the best candidate. The default clones.
    fn survive(&self, candidate: &Self::Candidate) -> Self::Candidate {
        candidate.clone()
    }
}
