//! Randomness for the simulation
//!
//! The runner draws every random value through `RandomSource`, so a caller
//! can substitute a scripted source. `SeededRandom` is the default and wraps
//! `StdRng`; the same seed yields the same sequence of draws.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random choices
pub trait RandomSource {
    /// Pick an index into `weights` with probability proportional to its
    /// weight. Returns None if no index can be chosen (empty table, zero
    /// total, or invalid weights).
    fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize>;

    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. Requires `len > 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// `StdRng`-backed random source
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Reproducible source
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::<f64>::new(weights).ok()?;
        Some(dist.sample(&mut self.rng))
    }

    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
