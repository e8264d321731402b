//! Injectable random sources.
//!
//! The engine never touches a global RNG. It draws from a `RandomSource`:
//!
//! - `GameRng`: seeded ChaCha8, same seed gives the same game
//! - `ScriptedSource`: replays a fixed list of draws, for tests and demos
//!
//! ```
//! use rps_rounds::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index(3), b.gen_index(3));
//! ```
//!
//! `GameRng` can be checkpointed with `state()` and restored with
//! `from_state()` in O(1), regardless of how many draws were made.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the engine's randomness.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Fair coin.
    fn gen_flag(&mut self) -> bool {
        self.gen_index(2) == 1
    }
}

/// Deterministic seeded RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }

    fn gen_flag(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound, so `vec![0, 1, 2]`
/// fed to a three-way pick yields Rock, Paper, Scissors.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `draws`.
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws_made(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn gen_index(&mut self, upper: usize) -> usize {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value % upper
    }
}
