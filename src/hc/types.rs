//! Populator trait for the hill-climbing engine.

use crate::fitness::Candidate;
use rand::Rng;

/// Supplies domain semantics to the hill-climbing engine.
///
/// The engine handles restarts, acceptance and best tracking; the populator
/// only creates starting points and neighbours. Both operations are
/// infallible by contract.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_stochastic::Candidate;
/// use u_stochastic::hc::HillClimbingPopulator;
///
/// #[derive(Clone)]
/// struct Point(i64);
///
/// impl Candidate for Point {
///     type Fitness = i64;
///     fn fitness(&self) -> i64 {
///         -(self.0 - 17).abs()
///     }
/// }
///
/// struct Line;
///
/// impl HillClimbingPopulator for Line {
///     type Candidate = Point;
///
///     fn generate<R: Rng>(&self, rng: &mut R) -> Point {
///         Point(rng.random_range(-100..100))
///     }
///
///     fn generate_neighbour<R: Rng>(&self, p: &Point, rng: &mut R) -> Point {
///         Point(p.0 + if rng.random_bool(0.5) { 1 } else { -1 })
///     }
/// }
/// ```
pub trait HillClimbingPopulator: Send + Sync {
    /// The candidate type this populator produces.
    type Candidate: Candidate;

    /// Creates a random starting candidate for a round.
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Candidate;

    /// Creates a new candidate "close" to `candidate`.
    ///
    /// The input is only borrowed; the result is independently owned.
    fn generate_neighbour<R: Rng>(&self, candidate: &Self::Candidate, rng: &mut R)
        -> Self::Candidate;
}
