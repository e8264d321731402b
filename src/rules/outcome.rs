//! Round outcomes and end-of-game verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Result of one resolved round, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Same move as the app. No points.
    Draw,
    /// Correct move. Player scores.
    Win,
    /// Wrong move. Player loses a point, app scores.
    Lose,
}

impl Outcome {
    /// Change to the player's score.
    #[must_use]
    pub const fn player_delta(self) -> i32 {
        match self {
            Outcome::Draw => 0,
            Outcome::Win => 1,
            Outcome::Lose => -1,
        }
    }

    /// Change to the app's score.
    #[must_use]
    pub const fn app_delta(self) -> i32 {
        match self {
            Outcome::Lose => 1,
            Outcome::Draw | Outcome::Win => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Outcome::Draw => "Draw",
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
        };
        f.write_str(title)
    }
}

/// The move that wins the round for the given instruction.
///
/// Told to win, the player must play what beats the app's move.
/// Told to lose, they must play what the app's move beats.
#[must_use]
pub fn correct_move(app_move: Move, player_should_win: bool) -> Move {
    if player_should_win {
        app_move.beaten_by()
    } else {
        app_move.victim()
    }
}

/// Judge a chosen move against the app's move and the instruction.
#[must_use]
pub fn judge(app_move: Move, player_should_win: bool, chosen: Move) -> Outcome {
    if chosen == app_move {
        Outcome::Draw
    } else if chosen == correct_move(app_move, player_should_win) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Final verdict of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Player score at least the app's.
    Victory,
    /// App finished strictly ahead.
    Defeat,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Victory => f.write_str("Victory"),
            Verdict::Defeat => f.write_str("Defeat"),
        }
    }
}

/// Scores and verdict at game over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub verdict: Verdict,
    pub player_score: i32,
    pub app_score: i32,
    pub rounds_played: u32,
}

impl GameSummary {
    /// Build a summary from final scores. Ties go to the player.
    #[must_use]
    pub fn new(player_score: i32, app_score: i32, rounds_played: u32) -> Self {
        let verdict = if app_score > player_score {
            Verdict::Defeat
        } else {
            Verdict::Victory
        };
        Self {
            verdict,
            player_score,
            app_score,
            rounds_played,
        }
    }

    /// "Your Score: N vs. App Score: M"
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "Your Score: {} vs. App Score: {}",
            self.player_score, self.app_score
        )
    }

    /// "Your final score is N correct answers"
    #[must_use]
    pub fn final_score_message(&self) -> String {
        format!("Your final score is {} correct answers", self.player_score)
    }
}
