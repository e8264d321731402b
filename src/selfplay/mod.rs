//! Self-play: whole games driven by a `MovePolicy`.
//!
//! Used to exercise the session end to end and to measure how a policy
//! fares over many seeded games.
//!
//! ```
//! use rps_rounds::core::RoundConfig;
//! use rps_rounds::players::PerfectPolicy;
//! use rps_rounds::selfplay::{SelfPlay, SelfPlayConfig};
//!
//! let runner = SelfPlay::new(RoundConfig::default(), SelfPlayConfig::new().with_games(4));
//! let stats = runner.run(|_| PerfectPolicy).unwrap();
//! assert_eq!(stats.victories, 4);
//! ```

pub mod runner;

pub use runner::{play_game, GameRecord, MatchStats, SelfPlay, SelfPlayConfig};
