//! Scoring engine: decks against live player statistics.
//!
//! ## Key Types
//!
//! - `PlayerRecord`: per-player match stats supplied by the host
//! - `ScoringEngine`: resolves cards to players and applies multipliers
//! - `DeckScoreResult`: per-role entries, missing roles, total, scored deck copy
//! - `Leaderboard`: competitive ranking over several results

pub mod player;
pub mod engine;
pub mod leaderboard;

pub use player::{calculate_player_score, PlayerRecord};
pub use engine::{score, DeckScoreResult, PlayerIndex, ScoreEntry, ScoringEngine};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
