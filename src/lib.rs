//! # fantasy-deck
//!
//! Deck assembly and scoring engine for five-role fantasy esports rosters.
//!
//! Users draft one player card per role (Top, Jungle, Mid, Adc, Support)
//! into a deck. The deck is validated against structural rules, then scored
//! against live match statistics to produce a competitive ranking.
//!
//! ## Design Principles
//!
//! 1. **Values, not mutation**: every rule-engine operation reads a deck and
//!    returns a new one. Scoring returns a scored copy.
//!
//! 2. **Closed roles**: `Role` is a five-variant enum and `RoleMap<T>` a
//!    five-field record, so every deck has exactly one slot per role.
//!
//! 3. **Untrusted input stops at the boundary**: the payload parser
//!    shape-checks raw JSON before any typed `Card` or `Deck` exists.
//!
//! 4. **Typed errors**: `DeckError` and `ParseError` carry stable codes and
//!    metadata for the transport layer.
//!
//! ## Pipeline
//!
//! payload parser -> deck rule engine -> (host persistence) -> scoring engine
//!
//! ## Modules
//!
//! - `core`: roles, role maps, cards, errors, configuration
//! - `deck`: deck store, rule engine, summaries
//! - `payload`: JSON payload parser
//! - `scoring`: player records, scoring engine, leaderboard
//!
//! Logging goes through `tracing`; the host installs a subscriber.

pub mod core;
pub mod deck;
pub mod payload;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Card, Multiplier, PlayerId, UserId,
    Role, RoleList, RoleMap,
    DeckError, ParseError, ConfigError, ErrorCode, ErrorMetadata,
    ScoringConfig, ParserConfig,
};

pub use crate::deck::{CompleteDeck, Deck, DeckSummary};

pub use crate::payload::{parse_card, parse_deck, parse_user_id, PayloadParser};

pub use crate::scoring::{
    calculate_player_score, score,
    PlayerRecord, ScoringEngine, DeckScoreResult, ScoreEntry,
    Leaderboard, LeaderboardEntry,
};
