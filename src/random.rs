//! Seeded random number generation.
//!
//! Every probabilistic decision in this crate draws from a generator built
//! here. Engines own one master generator per run; work that fans out
//! across slots never shares it. Instead the master draws one seed per slot,
//! in slot order, and each slot builds its own generator from that seed.
//! A run is therefore reproducible for a fixed seed regardless of whether
//! the fan-out executes on one thread or many.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates the master generator for a run.
///
/// `None` draws a fresh seed from the thread-local generator.
pub fn master_rng(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Draws `n` independent slot seeds from `rng`, in slot order.
pub fn slot_seeds<R: Rng>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.random()).collect()
}
