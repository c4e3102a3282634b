//! Domain-agnostic stochastic search.
//!
//! Provides two interchangeable engines over an abstract [`Candidate`]
//! type with a scalar [`Fitness`] (higher is better):
//!
//! - **Genetic Algorithm ([`ga`])**: generational evolution with
//!   data-parallel breeding in pair slots, pluggable parent selection,
//!   fitness-floor pruning and stagnation-driven regeneration.
//! - **Hill Climbing ([`hc`])**: restart-based local search with a
//!   pluggable acceptance policy and per-round state, covering plain hill
//!   climbing, simulated annealing and tabu search.
//!
//! Domain semantics come from a populator trait per engine. Engines own
//! all randomness ([`random`]) and report through an [`Observer`]; the
//! default observer writes to the `log` facade.
//!
//! # Architecture
//!
//! This crate contains no domain-specific concepts. Puzzles, schedules,
//! routes and so on are defined by consumers that implement the populator
//! traits.

pub mod error;
pub mod fitness;
pub mod ga;
pub mod hc;
pub mod observer;
pub mod random;

pub use error::ConfigError;
pub use fitness::{Candidate, Fitness, FitnessOf};
pub use observer::{LogObserver, NoopObserver, Observer, Progress, Step};
