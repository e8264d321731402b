//! # rps-rounds
//!
//! Round engine for a Rock/Paper/Scissors variant: each round the app picks
//! a move and tells the player to either **win** or **lose** against it.
//! Picking the move that does what was asked scores a point.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: `RoundState` is a plain value passed to the engine.
//!    Whoever drives the game owns the only mutable reference.
//!
//! 2. **Injected randomness**: the engine draws from a `RandomSource`.
//!    Seeded `GameRng` for play, `ScriptedSource` for fixed scenarios.
//!
//! 3. **No presentation**: rendering, layout and alerts belong to the caller.
//!    The `Session` state machine tells it what can happen next.
//!
//! ## Modules
//!
//! - `core`: moves, round state, RNG, configuration, errors
//! - `rules`: the win/lose table and `RoundEngine`
//! - `session`: phase-checked state machine and checkpoints
//! - `players`: scripted move policies
//! - `selfplay`: whole-game driver and statistics

pub mod core;
pub mod rules;
pub mod session;
pub mod players;
pub mod selfplay;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, Move, Phase, RandomSource, RoundConfig, RoundState,
    ScriptedSource, DEFAULT_ROUNDS,
};

pub use crate::rules::{correct_move, judge, GameSummary, Outcome, RoundEngine, Verdict};

pub use crate::session::{tutorial, Advance, RoundReport, Session, SessionSnapshot};

pub use crate::players::{FixedPolicy, MovePolicy, PerfectPolicy, RandomPolicy};

pub use crate::selfplay::{play_game, GameRecord, MatchStats, SelfPlay, SelfPlayConfig};
