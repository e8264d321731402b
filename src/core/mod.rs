//! Core types: moves, round state, randomness, configuration, errors.
//!
//! Everything here is independent of how a game is driven. The engine in
//! `rules` and the state machine in `session` build on these.

pub mod moves;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use moves::Move;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use config::{RoundConfig, DEFAULT_ROUNDS};
pub use error::GameError;
pub use state::{Phase, RoundState};
