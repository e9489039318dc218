//! ETA jitter sources.
//!
//! Real ETAs are noisy; each quote gets an independent draw in
//! `[0, MAX_ETA_JITTER_MINS)`. The source is injected so tests and
//! reproducible demos can pin it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Upper bound (exclusive) of the jitter added to every ETA, in minutes.
pub const MAX_ETA_JITTER_MINS: f64 = 5.0;

/// Something that yields ETA jitter in minutes.
pub trait JitterSource {
    /// Next jitter value in `[0, MAX_ETA_JITTER_MINS)`.
    fn next_jitter(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_jitter(&mut self) -> f64 {
        (**self).next_jitter()
    }
}

/// Jitter drawn uniformly from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<ChaCha8Rng> {
    /// Deterministic jitter: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Jitter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_ETA_JITTER_MINS)
    }
}

/// Constant jitter, for tests.
///
/// Values outside `[0, MAX_ETA_JITTER_MINS)` are clamped into range;
/// NaN is treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, MAX_ETA_JITTER_MINS - f64::EPSILON * MAX_ETA_JITTER_MINS)
    }
}
