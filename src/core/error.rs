//! Error types for the round engine and session.
//!
//! The rules themselves cannot fail. Errors only arise at the boundary:
//! - `InvalidMoveIndex` / `UnknownMove`: input that is not one of the three moves
//! - `GameOver`: resolving a round after the last one
//! - `WrongPhase`: session calls made out of order
//! - `InvalidConfig`: rejected `RoundConfig`
//! - `Snapshot`: failed to encode/decode a session snapshot

use thiserror::Error;

use super::state::Phase;

/// Errors surfaced by the engine and session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move index outside 0..3
    #[error("invalid move index: {0}")]
    InvalidMoveIndex(usize),

    /// Move name that does not parse
    #[error("unknown move: {0:?}")]
    UnknownMove(String),

    /// All rounds of the game have been played
    #[error("game is over after {rounds_played} rounds")]
    GameOver {
        /// Rounds played when the call was made
        rounds_played: u32,
    },

    /// Session operation called in the wrong phase
    #[error("expected phase {expected}, session is in {actual}")]
    WrongPhase {
        /// Phase the operation requires
        expected: Phase,
        /// Phase the session was in
        actual: Phase,
    },

    /// Configuration rejected by `RoundConfig::validate`
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Snapshot encoding or decoding failed
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<Box<bincode::ErrorKind>> for GameError {
    fn from(err: Box<bincode::ErrorKind>) -> Self {
        GameError::Snapshot(err.to_string())
    }
}
