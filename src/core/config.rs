//! Game configuration.
//!
//! `RoundConfig` fixes the game length and the reset behavior. The defaults
//! are 8 rounds per game, and the app's score survives a reset.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Rounds in a standard game.
pub const DEFAULT_ROUNDS: u32 = 8;

/// Complete round engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Rounds per game. The game is over once this many have been resolved.
    pub rounds_per_game: u32,

    /// Also clear the app's score on reset.
    ///
    /// Off by default: a reset only clears the player's score
    /// and the round counter.
    pub reset_app_score: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rounds_per_game: DEFAULT_ROUNDS,
            reset_app_score: false,
        }
    }
}

impl RoundConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds per game.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds_per_game = rounds;
        self
    }

    /// Choose whether reset clears the app's score too.
    #[must_use]
    pub fn with_app_score_reset(mut self, reset: bool) -> Self {
        self.reset_app_score = reset;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.rounds_per_game == 0 {
            return Err(GameError::InvalidConfig(
                "rounds_per_game must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.rounds_per_game, 8);
        assert!(!config.reset_app_score);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RoundConfig::new().with_rounds(3).with_app_score_reset(true);
        assert_eq!(config.rounds_per_game, 3);
        assert!(config.reset_app_score);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let err = RoundConfig::new().with_rounds(0).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_serde() {
        let config = RoundConfig::new().with_rounds(5);
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
