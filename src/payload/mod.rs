//! Payload parser: untyped JSON in, validated cards and decks out.
//!
//! The API layer hands already-deserialized request bodies
//! (`serde_json::Value`) to this module. Nothing here trusts the payload's
//! structure.

pub mod coerce;
pub mod parser;

pub use parser::{parse_card, parse_deck, parse_user_id, PayloadParser};
