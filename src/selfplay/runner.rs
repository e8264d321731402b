//! Self-play runner.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameError, RandomSource, RoundConfig};
use crate::players::MovePolicy;
use crate::rules::{GameSummary, Outcome, Verdict};
use crate::session::{Advance, RoundReport, Session};

/// Configuration for a self-play run.
#[derive(Clone, Debug)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub games: usize,

    /// Seed for game 0. Game `i` uses `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// One complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every round, in order.
    pub rounds: Vec<RoundReport>,
    /// Final scores and verdict.
    pub summary: GameSummary,
}

impl GameRecord {
    fn count(&self, outcome: Outcome) -> usize {
        self.rounds.iter().filter(|r| r.outcome == outcome).count()
    }

    /// Rounds the player won.
    #[must_use]
    pub fn wins(&self) -> usize {
        self.count(Outcome::Win)
    }

    /// Rounds the player lost.
    #[must_use]
    pub fn losses(&self) -> usize {
        self.count(Outcome::Lose)
    }

    /// Drawn rounds.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.count(Outcome::Draw)
    }
}

/// Play the session's current game to the end.
///
/// The session must be waiting for a move. It is left in `GameOver`; call
/// `reset` on it to play again.
pub fn play_game<R, P>(session: &mut Session<R>, policy: &mut P) -> Result<GameRecord, GameError>
where
    R: RandomSource,
    P: MovePolicy + ?Sized,
{
    loop {
        let chosen = policy.choose(session.state());
        session.choose(chosen)?;

        if let Advance::GameOver(summary) = session.advance()? {
            return Ok(GameRecord {
                rounds: session.history().to_vec(),
                summary,
            });
        }
    }
}

/// Aggregate results over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub games: usize,
    pub victories: usize,
    pub defeats: usize,
    pub rounds_won: usize,
    pub rounds_lost: usize,
    pub rounds_drawn: usize,
    pub total_player_score: i64,
    pub total_app_score: i64,
}

impl MatchStats {
    /// Fold one game into the totals.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.summary.verdict {
            Verdict::Victory => self.victories += 1,
            Verdict::Defeat => self.defeats += 1,
        }
        self.rounds_won += game.wins();
        self.rounds_lost += game.losses();
        self.rounds_drawn += game.draws();
        self.total_player_score += i64::from(game.summary.player_score);
        self.total_app_score += i64::from(game.summary.app_score);
    }

    /// Mean final player score, 0.0 with no games.
    #[must_use]
    pub fn mean_player_score(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_player_score as f64 / self.games as f64
    }

    /// Fraction of games ending in victory, 0.0 with no games.
    #[must_use]
    pub fn victory_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.victories as f64 / self.games as f64
    }
}

/// Runs many seeded games with fresh sessions.
#[derive(Clone, Debug)]
pub struct SelfPlay {
    round_config: RoundConfig,
    config: SelfPlayConfig,
}

impl SelfPlay {
    /// Create a runner.
    pub fn new(round_config: RoundConfig, config: SelfPlayConfig) -> Self {
        Self {
            round_config,
            config,
        }
    }

    /// Play every game and keep the records.
    ///
    /// `make_policy` receives each game's seed.
    pub fn play_records<P, F>(&self, mut make_policy: F) -> Result<Vec<GameRecord>, GameError>
    where
        P: MovePolicy,
        F: FnMut(u64) -> P,
    {
        let mut records = Vec::with_capacity(self.config.games);

        for i in 0..self.config.games {
            let seed = self.config.seed_offset.wrapping_add(i as u64);
            let mut session = Session::with_seed(self.round_config.clone(), seed)?;
            let mut policy = make_policy(seed);
            records.push(play_game(&mut session, &mut policy)?);
        }

        Ok(records)
    }

    /// Play every game and return aggregate stats.
    pub fn run<P, F>(&self, make_policy: F) -> Result<MatchStats, GameError>
    where
        P: MovePolicy,
        F: FnMut(u64) -> P,
    {
        let mut stats = MatchStats::default();
        for record in self.play_records(make_policy)? {
            stats.record(&record);
        }

        info!(
            games = stats.games,
            victories = stats.victories,
            mean_score = stats.mean_player_score(),
            "self-play finished"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Phase};
    use crate::players::{FixedPolicy, PerfectPolicy};

    #[test]
    fn test_play_game_perfect() {
        let mut session = Session::with_seed(RoundConfig::default(), 3).unwrap();
        let record = play_game(&mut session, &mut PerfectPolicy).unwrap();

        assert_eq!(record.rounds.len(), 8);
        assert_eq!(record.wins(), 8);
        assert_eq!(record.summary.player_score, 8);
        assert_eq!(record.summary.app_score, 0);
        assert_eq!(record.summary.verdict, Verdict::Victory);
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn test_play_game_rejects_finished_session() {
        let mut session = Session::with_seed(RoundConfig::new().with_rounds(1), 3).unwrap();
        play_game(&mut session, &mut PerfectPolicy).unwrap();

        let err = play_game(&mut session, &mut PerfectPolicy).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase { .. }));
    }

    #[test]
    fn test_record_counts_add_up() {
        let mut session = Session::with_seed(RoundConfig::default(), 11).unwrap();
        let record = play_game(&mut session, &mut FixedPolicy(Move::Rock)).unwrap();

        assert_eq!(record.wins() + record.losses() + record.draws(), 8);
        assert_eq!(
            record.summary.player_score,
            record.wins() as i32 - record.losses() as i32
        );
        assert_eq!(record.summary.app_score, record.losses() as i32);
    }

    #[test]
    fn test_empty_stats() {
        let stats = MatchStats::default();
        assert_eq!(stats.mean_player_score(), 0.0);
        assert_eq!(stats.victory_rate(), 0.0);
    }

    #[test]
    fn test_self_play_config_builder() {
        let config = SelfPlayConfig::new().with_games(7).with_seed_offset(100);
        assert_eq!(config.games, 7);
        assert_eq!(config.seed_offset, 100);
    }
}
