//! Deck store and rule engine.
//!
//! ## Key Types
//!
//! - `Deck`: one optional card per role, plus an optional owner
//! - `CompleteDeck`: a deck with every role filled
//! - `DeckSummary`: completeness, missing roles, total value
//!
//! Rule-engine operations (`add_card`, `remove_card`, `replace_card`,
//! `upsert_card`, `ensure_complete`) are methods on `Deck` that return new
//! values.

pub mod store;
pub mod rules;
pub mod summary;

pub use store::{CompleteDeck, Deck};
pub use summary::DeckSummary;
