//! Session checkpoints.
//!
//! A `SessionSnapshot` captures everything needed to continue a seeded
//! session exactly where it left off, including the RNG position, so a
//! restored session draws the same future rounds as the original.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng, GameRngState, Phase, RoundConfig, RoundState};
use crate::rules::RoundEngine;

use super::machine::{RoundReport, Session};

/// Serializable copy of a `GameRng`-backed session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: RoundConfig,
    pub state: RoundState,
    pub phase: Phase,
    pub history: Vec<RoundReport>,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Session<GameRng> {
    /// Capture the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.engine().config().clone(),
            state: *self.state(),
            phase: self.phase(),
            history: self.history().to_vec(),
            rng: self.engine().rng().state(),
        }
    }

    /// Rebuild a session from a snapshot.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, GameError> {
        let engine = RoundEngine::new(snapshot.config, GameRng::from_state(&snapshot.rng))?;

        let rounds_played = snapshot.state.rounds_played();
        if rounds_played > engine.config().rounds_per_game {
            return Err(GameError::Snapshot(format!(
                "{} rounds played exceeds game length {}",
                rounds_played,
                engine.config().rounds_per_game
            )));
        }

        let game_over = engine.is_game_over(&snapshot.state);
        let phase_fits = match snapshot.phase {
            Phase::InRound => !game_over,
            Phase::RoundResolved => rounds_played > 0,
            Phase::GameOver => game_over,
        };
        if !phase_fits {
            return Err(GameError::Snapshot(format!(
                "phase {} does not fit {} of {} rounds played",
                snapshot.phase,
                rounds_played,
                engine.config().rounds_per_game
            )));
        }

        if snapshot.history.len() != rounds_played as usize {
            return Err(GameError::Snapshot(format!(
                "history has {} rounds, state has {}",
                snapshot.history.len(),
                rounds_played
            )));
        }

        Ok(Session::from_parts(
            engine,
            snapshot.state,
            snapshot.phase,
            snapshot.history,
        ))
    }
}
