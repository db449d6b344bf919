//! Injectable random source for damage, food-search and timing rolls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Every random decision the engine makes goes through this trait, so tests
/// can script exact outcomes.
pub trait Roller: Send {
    /// Uniform integer in `range` (half-open).
    fn roll(&mut self, range: Range<u32>) -> u32;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

/// Seedable ChaCha8 roller. Same seed, same game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG; the seed is kept so a run can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Roller for GameRng {
    fn roll(&mut self, range: Range<u32>) -> u32 {
        self.inner.random_range(range)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.inner.random_bool(p)
    }
}
