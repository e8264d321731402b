//! Scripted players.
//!
//! A `MovePolicy` stands in for the human at the presentation layer:
//! - `PerfectPolicy`: always plays the correct move
//! - `RandomPolicy`: uniform random move from its own seeded RNG
//! - `FixedPolicy`: always the same move

use crate::core::{GameRng, Move, RandomSource, RoundState};
use crate::rules::correct_move;

/// Chooses a move for the current round.
pub trait MovePolicy {
    /// Pick a move given what the player can see.
    fn choose(&mut self, state: &RoundState) -> Move;
}

/// Always picks the winning move.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfectPolicy;

impl MovePolicy for PerfectPolicy {
    fn choose(&mut self, state: &RoundState) -> Move {
        correct_move(state.app_move(), state.player_should_win())
    }
}

/// Picks uniformly at random, ignoring the round.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a policy with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _state: &RoundState) -> Move {
        Move::from_draw(self.rng.gen_index(Move::ALL.len()))
    }
}

/// Always plays the same move.
#[derive(Clone, Copy, Debug)]
pub struct FixedPolicy(pub Move);

impl MovePolicy for FixedPolicy {
    fn choose(&mut self, _state: &RoundState) -> Move {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{judge, Outcome};

    #[test]
    fn test_perfect_always_wins() {
        let mut policy = PerfectPolicy;
        for app in Move::ALL {
            for should_win in [true, false] {
                let state = RoundState::new(app, should_win);
                let mv = policy.choose(&state);
                assert_eq!(judge(app, should_win, mv), Outcome::Win);
            }
        }
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let state = RoundState::new(Move::Rock, true);
        let mut a = RandomPolicy::new(5);
        let mut b = RandomPolicy::new(5);

        let seq_a: Vec<_> = (0..20).map(|_| a.choose(&state)).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.choose(&state)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_fixed() {
        let mut policy = FixedPolicy(Move::Scissors);
        assert_eq!(policy.choose(&RoundState::new(Move::Paper, false)), Move::Scissors);
    }
}
