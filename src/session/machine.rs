//! Presentation-facing state machine.
//!
//! A `Session` owns one engine and one `RoundState` and only accepts calls
//! that match its phase:
//!
//! ```text
//! InRound --choose--> RoundResolved --advance--> InRound
//!                                   \--advance--> GameOver --reset--> InRound
//! ```
//!
//! Out-of-order calls return `GameError::WrongPhase` and change nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, GameRng, Move, Phase, RandomSource, RoundConfig, RoundState};
use crate::rules::{GameSummary, Outcome, RoundEngine};

/// Record of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number in the game (1-indexed).
    pub round: u32,
    pub app_move: Move,
    pub player_should_win: bool,
    pub chosen: Move,
    pub outcome: Outcome,
    /// Player score after this round.
    pub player_score: i32,
    /// App score after this round.
    pub app_score: i32,
}

const TUTORIAL: &str = "\
The objective of the game is to select the correct answer.

The App will select either Rock, Paper, or Scissors and ask you to either Win or Lose against its selection.
Select the correct answer to score a point.
Selecting the same item as the app will result in a draw and no points will be awarded to either side.
Selecting the incorrect answer will give a point to the app.

Example:
App Chose: 🪨 Rock
You Should: Lose
Correct Answer to choose: ✂️ Scissors

See how high you can score before completing all rounds.";

/// How-to-play text shown from the help button.
#[must_use]
pub fn tutorial() -> &'static str {
    TUTORIAL
}

/// What `advance` led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A new round is ready.
    NextRound,
    /// The last round was played.
    GameOver(GameSummary),
}

/// A play session: engine, state, phase and this game's round history.
#[derive(Clone, Debug)]
pub struct Session<R: RandomSource = GameRng> {
    engine: RoundEngine<R>,
    state: RoundState,
    phase: Phase,
    history: Vec<RoundReport>,
}

impl Session<GameRng> {
    /// Session with a seeded `GameRng`.
    pub fn with_seed(config: RoundConfig, seed: u64) -> Result<Self, GameError> {
        Ok(Self::new(RoundEngine::with_seed(config, seed)?))
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a session. The first round is drawn immediately.
    pub fn new(mut engine: RoundEngine<R>) -> Self {
        let state = engine.initial_state();
        Self {
            engine,
            state,
            phase: Phase::InRound,
            history: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        engine: RoundEngine<R>,
        state: RoundState,
        phase: Phase,
        history: Vec<RoundReport>,
    ) -> Self {
        Self {
            engine,
            state,
            phase,
            history,
        }
    }

    /// Get the engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine<R> {
        &self.engine
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Get the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rounds resolved in the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Play a move for the current round.
    pub fn choose(&mut self, chosen: Move) -> Result<RoundReport, GameError> {
        self.expect_phase(Phase::InRound)?;

        let app_move = self.state.app_move();
        let player_should_win = self.state.player_should_win();
        let outcome = self.engine.resolve(&mut self.state, chosen)?;

        let report = RoundReport {
            round: self.state.rounds_played(),
            app_move,
            player_should_win,
            chosen,
            outcome,
            player_score: self.state.player_score(),
            app_score: self.state.app_score(),
        };
        self.history.push(report);
        self.phase = Phase::RoundResolved;

        Ok(report)
    }

    /// Play a move by button index.
    pub fn choose_index(&mut self, index: usize) -> Result<RoundReport, GameError> {
        self.choose(Move::from_index(index)?)
    }

    /// Dismiss the round outcome: next round, or game over.
    pub fn advance(&mut self) -> Result<Advance, GameError> {
        self.expect_phase(Phase::RoundResolved)?;

        if let Some(summary) = self.engine.summary(&self.state) {
            self.phase = Phase::GameOver;
            debug!(verdict = %summary.verdict, "session finished game");
            return Ok(Advance::GameOver(summary));
        }

        self.engine.new_round(&mut self.state);
        self.phase = Phase::InRound;
        Ok(Advance::NextRound)
    }

    /// Dismiss the final verdict and start a new game.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::GameOver)?;

        self.engine.reset(&mut self.state);
        self.history.clear();
        self.phase = Phase::InRound;
        Ok(())
    }

    /// The winning move for the current round.
    #[must_use]
    pub fn hint(&self) -> Move {
        self.engine.correct_move(&self.state)
    }

    /// "You Should: Win" / "You Should: Lose"
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("You Should: {}", self.state.instruction())
    }

    /// "App Chose: 🪨 Rock"
    #[must_use]
    pub fn app_line(&self) -> String {
        format!("App Chose: {}", self.state.app_move().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn session(rounds: u32, draws: Vec<usize>) -> Session<ScriptedSource> {
        let config = RoundConfig::new().with_rounds(rounds);
        Session::new(RoundEngine::new(config, ScriptedSource::new(draws)).unwrap())
    }

    #[test]
    fn test_starts_in_round() {
        let s = session(8, vec![0, 1]);
        assert_eq!(s.phase(), Phase::InRound);
        assert_eq!(s.state().app_move(), Move::Rock);
        assert!(s.state().player_should_win());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_choose_then_advance() {
        let mut s = session(8, vec![0, 1]);

        let report = s.choose(Move::Paper).unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(report.outcome, Outcome::Win);
        assert_eq!(report.player_score, 1);
        assert_eq!(s.phase(), Phase::RoundResolved);

        assert_eq!(s.advance().unwrap(), Advance::NextRound);
        assert_eq!(s.phase(), Phase::InRound);
        assert!(!s.state().player_should_win());
    }

    #[test]
    fn test_wrong_phase_rejected() {
        let mut s = session(8, vec![0, 1]);

        assert_eq!(
            s.advance(),
            Err(GameError::WrongPhase {
                expected: Phase::RoundResolved,
                actual: Phase::InRound
            })
        );
        assert!(s.reset().is_err());

        s.choose(Move::Rock).unwrap();
        let before = *s.state();
        assert!(matches!(s.choose(Move::Rock), Err(GameError::WrongPhase { .. })));
        assert_eq!(*s.state(), before);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_game_over_and_reset() {
        let mut s = session(2, vec![0, 1]);

        s.choose(Move::Paper).unwrap();
        assert_eq!(s.advance().unwrap(), Advance::NextRound);
        s.choose(Move::Paper).unwrap();

        match s.advance().unwrap() {
            Advance::GameOver(summary) => assert_eq!(summary.rounds_played, 2),
            Advance::NextRound => panic!("expected game over"),
        }
        assert_eq!(s.phase(), Phase::GameOver);

        s.reset().unwrap();
        assert_eq!(s.phase(), Phase::InRound);
        assert_eq!(s.state().rounds_played(), 0);
        assert_eq!(s.state().player_score(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_choose_index() {
        let mut s = session(8, vec![0, 1]);
        assert_eq!(s.choose_index(7), Err(GameError::InvalidMoveIndex(7)));
        assert_eq!(s.phase(), Phase::InRound);

        let report = s.choose_index(1).unwrap();
        assert_eq!(report.chosen, Move::Paper);
    }

    #[test]
    fn test_tutorial_example_is_correct() {
        let text = tutorial();
        assert!(text.starts_with("The objective of the game is to select the correct answer."));

        // The worked example agrees with the rules
        assert!(text.contains("App Chose: 🪨 Rock\nYou Should: Lose"));
        let answer = crate::rules::correct_move(Move::Rock, false);
        assert!(text.contains(&format!("Correct Answer to choose: {}", answer.label())));
    }

    #[test]
    fn test_prompts() {
        let s = session(8, vec![0, 1]);
        assert_eq!(s.prompt(), "You Should: Win");
        assert_eq!(s.app_line(), "App Chose: 🪨 Rock");
        assert_eq!(s.hint(), Move::Paper);
    }
}
