//! Deterministic simulation-level RNG wrapper.
//!
//! All randomness in a run flows from `SimConfig::seed`.  Consumers that need
//! an independent stream (e.g. a destination cycler per scenario) derive one
//! with [`SimRng::child`] so adding a consumer never perturbs the draws of
//! the others.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used in single-threaded contexts (the sequential apply phase).
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` keyed by `offset` without advancing `self`.
    ///
    /// Children of the same parent seed and offset are identical.
    pub fn child(seed: u64, offset: u64) -> SimRng {
        SimRng(SmallRng::seed_from_u64(seed ^ offset.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
