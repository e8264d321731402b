//! Round state and session phases.
//!
//! ## RoundState
//!
//! Everything the presentation layer renders:
//! - The app's move and whether the player should win or lose against it
//! - Rounds played so far
//! - Both scores
//!
//! Fields are read through accessors. Only the engine mutates them.
//!
//! ## Phase
//!
//! Where a session is in the round cycle:
//! `InRound` -> `RoundResolved` -> `InRound` | `GameOver` -> `InRound`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moves::Move;
use crate::rules::Outcome;

/// State of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    app_move: Move,
    player_should_win: bool,
    rounds_played: u32,
    player_score: i32,
    app_score: i32,
}

impl RoundState {
    /// Fresh game state for the given first round.
    #[must_use]
    pub fn new(app_move: Move, player_should_win: bool) -> Self {
        Self {
            app_move,
            player_should_win,
            rounds_played: 0,
            player_score: 0,
            app_score: 0,
        }
    }

    /// The app's move this round.
    #[must_use]
    pub fn app_move(&self) -> Move {
        self.app_move
    }

    /// Whether the player must beat the app's move (true) or lose to it (false).
    #[must_use]
    pub fn player_should_win(&self) -> bool {
        self.player_should_win
    }

    /// Rounds resolved in this game.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Player score. Goes negative after more losses than wins.
    #[must_use]
    pub fn player_score(&self) -> i32 {
        self.player_score
    }

    /// App score. Increases only when the player loses a round.
    #[must_use]
    pub fn app_score(&self) -> i32 {
        self.app_score
    }

    /// The instruction shown to the player.
    #[must_use]
    pub fn instruction(&self) -> &'static str {
        if self.player_should_win {
            "Win"
        } else {
            "Lose"
        }
    }

    pub(crate) fn begin_round(&mut self, app_move: Move) {
        self.app_move = app_move;
        self.player_should_win = !self.player_should_win;
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.player_score = self.player_score.saturating_add(outcome.player_delta());
        self.app_score = self.app_score.saturating_add(outcome.app_delta());
        self.rounds_played += 1;
    }

    pub(crate) fn clear(&mut self, clear_app_score: bool) {
        self.rounds_played = 0;
        self.player_score = 0;
        if clear_app_score {
            self.app_score = 0;
        }
    }
}

/// Session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player's move.
    InRound,
    /// Outcome shown, waiting for the player to continue.
    RoundResolved,
    /// Final verdict shown, waiting for reset.
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::InRound => "InRound",
            Phase::RoundResolved => "RoundResolved",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = RoundState::new(Move::Paper, true);
        assert_eq!(state.app_move(), Move::Paper);
        assert!(state.player_should_win());
        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.app_score(), 0);
        assert_eq!(state.instruction(), "Win");
    }

    #[test]
    fn test_begin_round_flips_instruction() {
        let mut state = RoundState::new(Move::Rock, true);
        state.begin_round(Move::Scissors);
        assert_eq!(state.app_move(), Move::Scissors);
        assert!(!state.player_should_win());
        assert_eq!(state.instruction(), "Lose");

        state.begin_round(Move::Scissors);
        assert!(state.player_should_win());
    }

    #[test]
    fn test_record_scores() {
        let mut state = RoundState::new(Move::Rock, true);

        state.record(Outcome::Win);
        assert_eq!((state.player_score(), state.app_score()), (1, 0));

        state.record(Outcome::Lose);
        state.record(Outcome::Lose);
        assert_eq!((state.player_score(), state.app_score()), (-1, 2));

        state.record(Outcome::Draw);
        assert_eq!((state.player_score(), state.app_score()), (-1, 2));
        assert_eq!(state.rounds_played(), 4);
    }

    #[test]
    fn test_record_saturates_scores() {
        let mut state = RoundState::new(Move::Rock, true);
        state.app_score = i32::MAX;
        state.player_score = i32::MIN;

        state.record(Outcome::Lose);
        assert_eq!(state.app_score(), i32::MAX);
        assert_eq!(state.player_score(), i32::MIN);
        assert_eq!(state.rounds_played(), 1);
    }

    #[test]
    fn test_clear_keeps_app_score_unless_asked() {
        let mut state = RoundState::new(Move::Rock, true);
        state.record(Outcome::Lose);

        state.clear(false);
        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.app_score(), 1);

        state.clear(true);
        assert_eq!(state.app_score(), 0);
    }

    #[test]
    fn test_state_serde() {
        let mut state = RoundState::new(Move::Scissors, false);
        state.record(Outcome::Win);

        let json = serde_json::to_string(&state).unwrap();
        let back: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::RoundResolved.to_string(), "RoundResolved");
    }
}
