use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single source of uniform randoms for the whole simulation.
///
/// Every stochastic branch in the session draws from one instance of this
/// trait, so a scripted implementation makes entire runs reproducible.
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Rolls one value against probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Picks an index in `0..len` from one uniform draw.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let scaled = self.next_unit() * len as f64;
        (scaled as usize).min(len - 1)
    }
}

/// Production source backed by a seeded [`StdRng`].
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source with a fixed seed for reproducible sessions.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        // Half-open range, so `chance(p)` can never fire for p == 0.
        self.rng.gen_range(0.0..1.0)
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeededRandom")
    }
}

/// Replays a fixed sequence of values, then a constant fallback.
///
/// Used by tests to force or suppress specific probabilistic branches.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    /// Creates a source that replays `script` and then returns `fallback`.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Creates a source that always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new([], value)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
