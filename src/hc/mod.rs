//! Generalized hill climbing.
//!
//! A restart-based local search whose acceptance rule is pluggable.
//! Users implement [`HillClimbingPopulator`] (starting candidates and
//! neighbours) and choose an [`Acceptance`] policy; the same loop then runs
//! plain hill climbing, random walks, simulated annealing or tabu search.
//!
//! # Key Types
//!
//! - [`HcConfig`]: populator, acceptance policy and budgets
//! - [`HcRunner`]: executes rounds and iterations
//! - [`HcResult`]: best candidate and run statistics
//!
//! # Acceptance Policies
//!
//! - [`StrictImprovement`]: move only to fitter neighbours (default)
//! - [`NonWorsening`]: also move across plateaus
//! - [`AlwaysAccept`]: random walk
//! - [`Metropolis`]: simulated annealing, temperature as per-round state
//! - [`Tabu`]: forbid recently visited candidates

mod acceptance;
mod config;
mod runner;
mod types;

pub use acceptance::{
    Acceptance, AlwaysAccept, Metropolis, NonWorsening, StrictImprovement, Tabu, TabuList,
};
pub use config::HcConfig;
pub use runner::{HcResult, HcRunner};
pub use types::HillClimbingPopulator;
