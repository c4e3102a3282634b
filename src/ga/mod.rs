//! Generational genetic algorithm.
//!
//! A generic, domain-agnostic engine built on trait-based abstractions.
//! Users plug in a [`GeneticPopulator`] that creates, mutates, recombines
//! and copies candidates; the engine runs the generational loop with
//! data-parallel breeding, stagnation-driven regeneration and
//! fitness-floor pruning.
//!
//! # Core Traits
//!
//! - [`GeneticPopulator`]: generate / mutate / crossover / survive
//! - [`Selector`]: parent choice policy
//!
//! # Key Types
//!
//! - [`GaConfig`]: populator, selector and loop parameters
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best candidate and run statistics
//!
//! # Algorithm
//!
//! Every generation is built in `population_size / 2` pair slots. A slot
//! either breeds (two selected parents, crossover, independent mutation of
//! each child) or copies its two input candidates forward. The fittest
//! candidate updates the running best; reaching the success threshold ends
//! the run. Candidates at or below the kill threshold are regenerated, and
//! after `permissible_dead_rounds` generations without improvement the
//! whole population is.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{Selection, Selector};
pub use types::GeneticPopulator;
