//! The three moves and the rules between them.
//!
//! Each move maps to a stable index (Rock = 0, Paper = 1, Scissors = 2).
//! The presentation layer lays its buttons out in this order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A Rock/Paper/Scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in index order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Look up a move by its index.
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GameError::InvalidMoveIndex(index))
    }

    /// Map a random draw onto a move, reducing out-of-range draws.
    #[must_use]
    pub const fn from_draw(draw: usize) -> Self {
        Self::ALL[draw % Self::ALL.len()]
    }

    /// Index of this move (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// Check if this move beats the other under standard rules.
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Paper, Move::Rock) | (Move::Scissors, Move::Paper)
        )
    }

    /// The move that beats this one.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The move this one beats.
    #[must_use]
    pub const fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Button label with its emoji.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Move::Rock => "🪨 Rock",
            Move::Paper => "🧻 Paper",
            Move::Scissors => "✂️ Scissors",
        }
    }

    /// Bare name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<usize> for Move {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Move::from_index(index)
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(GameError::UnknownMove(s.to_string())),
        }
    }
}
