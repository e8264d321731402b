//! Round rules.
//!
//! - `outcome`: the win/lose table, round outcomes, game verdicts
//! - `engine`: `RoundEngine`, which applies the table to a `RoundState`

pub mod engine;
pub mod outcome;

pub use engine::RoundEngine;
pub use outcome::{correct_move, judge, GameSummary, Outcome, Verdict};
