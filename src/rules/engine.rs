//! The round engine.
//!
//! `RoundEngine` owns the configuration and the random source. Game state
//! lives in a separate `RoundState` that callers pass in, so whoever drives
//! the game holds the only mutable reference to it.
//!
//! ## Round lifecycle
//!
//! - `initial_state`: first round of a session
//! - `resolve`: judge the player's move, update scores, count the round
//! - `new_round`: next app move, instruction flips
//! - `reset`: back to round zero once the game is over

use tracing::{debug, info};

use crate::core::{GameError, GameRng, Move, RandomSource, RoundConfig, RoundState};

use super::outcome::{self, GameSummary, Outcome};

/// Round engine over an injected random source.
#[derive(Clone, Debug)]
pub struct RoundEngine<R: RandomSource = GameRng> {
    config: RoundConfig,
    rng: R,
}

impl RoundEngine<GameRng> {
    /// Engine backed by a seeded `GameRng`.
    pub fn with_seed(config: RoundConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an engine. Fails if the config is not playable.
    pub fn new(config: RoundConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Get the random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn sample_move(&mut self) -> Move {
        Move::from_draw(self.rng.gen_index(Move::ALL.len()))
    }

    /// State for the first round: random app move, random instruction.
    pub fn initial_state(&mut self) -> RoundState {
        let app_move = self.sample_move();
        let should_win = self.rng.gen_flag();
        debug!(%app_move, should_win, "initial round");
        RoundState::new(app_move, should_win)
    }

    /// Start the next round: new app move, instruction flips.
    pub fn new_round(&mut self, state: &mut RoundState) {
        let app_move = self.sample_move();
        state.begin_round(app_move);
        debug!(
            %app_move,
            should_win = state.player_should_win(),
            round = state.rounds_played() + 1,
            "new round"
        );
    }

    /// Judge the player's move and apply it to the state.
    ///
    /// Returns `GameError::GameOver` without touching the state once every
    /// round of the game has been resolved.
    pub fn resolve(&self, state: &mut RoundState, chosen: Move) -> Result<Outcome, GameError> {
        if self.is_game_over(state) {
            return Err(GameError::GameOver {
                rounds_played: state.rounds_played(),
            });
        }

        let result = outcome::judge(state.app_move(), state.player_should_win(), chosen);
        state.record(result);

        debug!(
            app_move = %state.app_move(),
            %chosen,
            outcome = %result,
            player_score = state.player_score(),
            app_score = state.app_score(),
            rounds_played = state.rounds_played(),
            "round resolved"
        );

        if self.is_game_over(state) {
            info!(
                player_score = state.player_score(),
                app_score = state.app_score(),
                "game over"
            );
        }

        Ok(result)
    }

    /// Check if all rounds have been played.
    #[must_use]
    pub fn is_game_over(&self, state: &RoundState) -> bool {
        state.rounds_played() >= self.config.rounds_per_game
    }

    /// Reset counters and start a new round.
    ///
    /// Clears the round count and the player's score. The app's score is
    /// kept unless `reset_app_score` is set.
    pub fn reset(&mut self, state: &mut RoundState) {
        state.clear(self.config.reset_app_score);
        info!(app_score = state.app_score(), "game reset");
        self.new_round(state);
    }

    /// The move that would win the current round.
    #[must_use]
    pub fn correct_move(&self, state: &RoundState) -> Move {
        outcome::correct_move(state.app_move(), state.player_should_win())
    }

    /// Final summary, once the game is over.
    #[must_use]
    pub fn summary(&self, state: &RoundState) -> Option<GameSummary> {
        self.is_game_over(state).then(|| {
            GameSummary::new(state.player_score(), state.app_score(), state.rounds_played())
        })
    }

    /// "Progress: n of 8 Rounds"
    #[must_use]
    pub fn progress(&self, state: &RoundState) -> String {
        format!(
            "Progress: {} of {} Rounds",
            state.rounds_played(),
            self.config.rounds_per_game
        )
    }
}
