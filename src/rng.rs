//! Seedable random engine.
//!
//! Every stochastic choice in sampling goes through [`RandomEngine`]; with a
//! fixed seed the engine produces the same stream on every platform, which
//! makes rendered output byte-for-byte reproducible.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

/// A seed value for the random engine.
///
/// Text and byte seeds are hashed into the 64-bit seed state; float seeds
/// use their bit pattern, so `1.0` and `1` are distinct seeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    Int(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Seed {
    /// Collapses the seed into the 64-bit engine state.
    fn state(&self) -> u64 {
        match self {
            Seed::Int(n) => *n,
            Seed::Float(f) => f.to_bits(),
            Seed::Text(s) => hash_bytes(s.as_bytes()),
            Seed::Bytes(b) => hash_bytes(b),
        }
    }
}

fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Int(value)
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Int(value as u64)
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Int(u64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Int(value as i64 as u64)
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Seed::Float(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl From<&[u8]> for Seed {
    fn from(value: &[u8]) -> Self {
        Seed::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Seed {
    fn from(value: Vec<u8>) -> Self {
        Seed::Bytes(value)
    }
}

/// Deterministic pseudo-random source. The sole source of non-determinism
/// in the crate.
pub(crate) struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Creates an engine from an optional seed; unseeded engines draw their
    /// state from OS entropy.
    pub fn new(seed: Option<&Seed>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.state()),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Replaces the engine state; subsequent draws replay from `seed`.
    pub fn reseed(&mut self, seed: &Seed) {
        self.rng = StdRng::seed_from_u64(seed.state());
    }

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "empty choice range");
        self.rng.random_range(0..n)
    }

    /// Uniform integer in `[lo, hi]`.
    pub fn between(&mut self, lo: u32, hi: u32) -> u32 {
        self.rng.random_range(lo..=hi)
    }

    /// Uniform element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}
