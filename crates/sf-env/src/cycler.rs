//! Destination cycling policies.

use sf_core::{DestinationId, SimRng};

/// Picks the next destination for an agent that has reached its current one.
///
/// Both policies are deterministic: `UniformRandom` given its seed,
/// `RoundRobin` given its cursor.  A single cycler is shared by every agent,
/// so the round-robin cursor advances across agents in the order they ask.
#[derive(Clone, Debug)]
pub enum DestinationCycler {
    /// Uniform choice over `[0, count)`.
    UniformRandom(SimRng),
    /// Fixed order, wrapping modulo `count`.
    RoundRobin { next: usize },
}

impl DestinationCycler {
    pub fn uniform_random(seed: u64) -> Self {
        DestinationCycler::UniformRandom(SimRng::new(seed))
    }

    pub fn round_robin() -> Self {
        DestinationCycler::RoundRobin { next: 0 }
    }

    /// Next destination out of `count`.
    ///
    /// # Panics
    ///
    /// If `count` is 0.
    pub fn next(&mut self, count: usize) -> DestinationId {
        assert!(count > 0, "destination cycler needs at least one destination");
        let index = match self {
            DestinationCycler::UniformRandom(rng) => rng.gen_range(0..count),
            DestinationCycler::RoundRobin { next } => {
                let index = *next % count;
                *next = (index + 1) % count;
                index
            }
        };
        DestinationId(index as u32)
    }

    /// Rewind the round-robin cursor to the first destination.  No effect on
    /// the random policy.
    pub fn reset(&mut self) {
        if let DestinationCycler::RoundRobin { next } = self {
            *next = 0;
        }
    }
}

impl Default for DestinationCycler {
    fn default() -> Self {
        Self::round_robin()
    }
}
