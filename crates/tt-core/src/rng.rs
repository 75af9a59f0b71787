//! Deterministic RNG wrapper for candidate sampling.
//!
//! Each planner request owns its own `SampleRng`; nothing is seeded from a
//! process-wide generator, so concurrent requests never share RNG state and a
//! fixed seed reproduces the same selection.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct SampleRng(SmallRng);

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for one request, keyed by `offset`.
    pub fn child(&mut self, offset: u64) -> SampleRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SampleRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
