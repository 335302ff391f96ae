//! Core types: roles, per-role storage, cards, errors, configuration.
//!
//! Everything else in the crate is built from these value types.

pub mod role;
pub mod role_map;
pub mod card;
pub mod error;
pub mod config;

pub use role::{Role, RoleList};
pub use role_map::RoleMap;
pub use card::{Card, Multiplier, PlayerId, UserId};
pub use error::{ConfigError, DeckError, ErrorCode, ErrorMetadata, ParseError};
pub use config::{ParserConfig, ScoringConfig};
