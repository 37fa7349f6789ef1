//! Injectable random source
//!
//! The dress-vs-separates decision is the only stochastic step in outfit
//! generation. It draws from a `RandomSource` so callers can seed it for
//! reproducible batches or pin it to force one branch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in [0, 1)
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Thread-local RNG for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        rand::thread_rng().gen()
    }
}

/// Reproducible RNG seeded from a u64
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen()
    }
}

/// Always returns the same value
///
/// `FixedRandom(0.0)` always prefers an available dress, `FixedRandom(0.99)`
/// never does.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}
