//! Deterministic RNG wrapper for reproducible planning sessions.
//!
//! The only stochastic feature in the toolkit is the traffic simulation in
//! `evr-plan`.  Routing itself is fully deterministic; wrapping the RNG here
//! keeps the `rand` dependency in one place and makes every session
//! replayable from a single `u64` seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one planning session.
///
/// Create one per session; two sessions with the same seed and the same
/// call sequence observe identical values.
pub struct PlanRng(SmallRng);

impl PlanRng {
    pub fn new(seed: u64) -> Self {
        PlanRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
