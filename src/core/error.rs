//! Error taxonomy for the deck engine and the payload parser.
//!
//! Two disjoint error enums, each exhaustively matchable:
//!
//! - `DeckError`: rule violations from the deck rule engine and role lookup
//! - `ParseError`: malformed external payloads
//!
//! Every error exposes a stable `ErrorCode` and a metadata map built from its
//! fields, so a transport layer can relay both without matching on variants.

use serde_json::{Map, Value};
use thiserror::Error;

use super::card::Multiplier;
use super::role::{Role, RoleList};

/// Free-form diagnostic metadata attached to an error.
pub type ErrorMetadata = Map<String, Value>;

/// Stable machine-readable error codes.
///
/// `as_str` yields the SCREAMING_SNAKE_CASE string relayed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Deck rules
    RoleNotFound,
    RoleAlreadyOccupied,
    RoleEmpty,
    RoleMismatch,
    /// Reserved for budget checks performed above this crate.
    CurrencyLimitExceeded,
    MultiplierConflict,

    // Payload parsing
    InvalidCard,
    InvalidDeck,
    InvalidUserId,
}

impl ErrorCode {
    /// Every code, deck rules first.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::RoleNotFound,
        ErrorCode::RoleAlreadyOccupied,
        ErrorCode::RoleEmpty,
        ErrorCode::RoleMismatch,
        ErrorCode::CurrencyLimitExceeded,
        ErrorCode::MultiplierConflict,
        ErrorCode::InvalidCard,
        ErrorCode::InvalidDeck,
        ErrorCode::InvalidUserId,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::RoleNotFound => "ROLE_NOT_FOUND",
            ErrorCode::RoleAlreadyOccupied => "ROLE_ALREADY_OCCUPIED",
            ErrorCode::RoleEmpty => "ROLE_EMPTY",
            ErrorCode::RoleMismatch => "ROLE_MISMATCH",
            ErrorCode::CurrencyLimitExceeded => "CURRENCY_LIMIT_EXCEEDED",
            ErrorCode::MultiplierConflict => "MULTIPLIER_CONFLICT",
            ErrorCode::InvalidCard => "INVALID_CARD",
            ErrorCode::InvalidDeck => "INVALID_DECK",
            ErrorCode::InvalidUserId => "INVALID_USER_ID",
        }
    }

    /// Suggested HTTP status class for an API layer relaying this code.
    ///
    /// Several kinds share a status (400 covers every malformed-request
    /// code), so the status alone does not identify the error. The response
    /// body must carry `as_str()`, which is distinct per kind.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            ErrorCode::RoleNotFound => 404,
            ErrorCode::RoleAlreadyOccupied | ErrorCode::MultiplierConflict => 409,
            ErrorCode::CurrencyLimitExceeded => 402,
            ErrorCode::RoleEmpty
            | ErrorCode::RoleMismatch
            | ErrorCode::InvalidCard
            | ErrorCode::InvalidDeck
            | ErrorCode::InvalidUserId => 400,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn role_array(roles: &[Role]) -> Value {
    Value::Array(roles.iter().map(|r| Value::from(r.as_str())).collect())
}

/// Deck rule violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    #[error("unknown role: {input:?}")]
    RoleNotFound { input: String },

    #[error("role {role} is already occupied by {occupant}")]
    RoleAlreadyOccupied { role: Role, occupant: String },

    /// One or more slots are empty. `ensure_complete` lists every missing role.
    #[error("role slot empty: {}", .roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", "))]
    RoleEmpty { roles: RoleList },

    #[error("card role {actual} does not match target slot {expected}")]
    RoleMismatch { expected: Role, actual: Role },

    #[error("deck value {total} exceeds limit {limit}")]
    CurrencyLimitExceeded { limit: f64, total: f64 },

    #[error("multiplier {multiplier} already used by {conflicting_role}")]
    MultiplierConflict {
        multiplier: Multiplier,
        conflicting_role: Role,
    },
}

impl DeckError {
    /// Shorthand for a single empty role.
    #[must_use]
    pub fn role_empty(role: Role) -> Self {
        let mut roles = RoleList::new();
        roles.push(role);
        DeckError::RoleEmpty { roles }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            DeckError::RoleNotFound { .. } => ErrorCode::RoleNotFound,
            DeckError::RoleAlreadyOccupied { .. } => ErrorCode::RoleAlreadyOccupied,
            DeckError::RoleEmpty { .. } => ErrorCode::RoleEmpty,
            DeckError::RoleMismatch { .. } => ErrorCode::RoleMismatch,
            DeckError::CurrencyLimitExceeded { .. } => ErrorCode::CurrencyLimitExceeded,
            DeckError::MultiplierConflict { .. } => ErrorCode::MultiplierConflict,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> ErrorMetadata {
        let mut meta = ErrorMetadata::new();
        match self {
            DeckError::RoleNotFound { input } => {
                meta.insert("input".into(), Value::from(input.as_str()));
            }
            DeckError::RoleAlreadyOccupied { role, occupant } => {
                meta.insert("role".into(), Value::from(role.as_str()));
                meta.insert("occupant".into(), Value::from(occupant.as_str()));
            }
            DeckError::RoleEmpty { roles } => {
                meta.insert("roles".into(), role_array(roles));
            }
            DeckError::RoleMismatch { expected, actual } => {
                meta.insert("expected".into(), Value::from(expected.as_str()));
                meta.insert("actual".into(), Value::from(actual.as_str()));
            }
            DeckError::CurrencyLimitExceeded { limit, total } => {
                meta.insert("limit".into(), Value::from(*limit));
                meta.insert("total".into(), Value::from(*total));
            }
            DeckError::MultiplierConflict {
                multiplier,
                conflicting_role,
            } => {
                meta.insert("multiplier".into(), Value::from(multiplier.label()));
                meta.insert("conflictingRole".into(), Value::from(conflicting_role.as_str()));
            }
        }
        meta
    }
}

/// Malformed external payloads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid card: {reason}")]
    InvalidCard {
        reason: String,
        /// Offending field, when one can be named.
        field: Option<&'static str>,
    },

    /// A deck payload whose cards are individually valid but break a deck
    /// invariant. `roles` lists the slots involved.
    #[error("invalid deck: {reason}")]
    InvalidDeck { reason: String, roles: RoleList },

    #[error("invalid user id: {value}")]
    InvalidUserId { value: Value },
}

impl ParseError {
    pub(crate) fn invalid_card(reason: impl Into<String>, field: &'static str) -> Self {
        ParseError::InvalidCard {
            reason: reason.into(),
            field: Some(field),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::InvalidCard { .. } => ErrorCode::InvalidCard,
            ParseError::InvalidDeck { .. } => ErrorCode::InvalidDeck,
            ParseError::InvalidUserId { .. } => ErrorCode::InvalidUserId,
        }
    }

    #[must_use]
    pub fn metadata(&self) -> ErrorMetadata {
        let mut meta = ErrorMetadata::new();
        match self {
            ParseError::InvalidCard { reason, field } => {
                meta.insert("reason".into(), Value::from(reason.as_str()));
                if let Some(field) = field {
                    meta.insert("field".into(), Value::from(*field));
                }
            }
            ParseError::InvalidDeck { reason, roles } => {
                meta.insert("reason".into(), Value::from(reason.as_str()));
                meta.insert("roles".into(), role_array(roles));
            }
            ParseError::InvalidUserId { value } => {
                meta.insert("value".into(), value.clone());
            }
        }
        meta
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive divisor, got {value}")]
    InvalidDivisor { field: &'static str, value: i64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidFactor { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_codes_are_distinct() {
        let mut strings: Vec<_> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
        strings.sort();
        strings.dedup();
        assert_eq!(strings.len(), ErrorCode::ALL.len());
    }

    #[test]
    fn test_shared_status_distinct_codes() {
        let bad_request: Vec<_> = ErrorCode::ALL
            .iter()
            .filter(|c| c.http_status() == 400)
            .map(|c| c.as_str())
            .collect();
        assert_eq!(
            bad_request,
            ["ROLE_EMPTY", "ROLE_MISMATCH", "INVALID_CARD", "INVALID_DECK", "INVALID_USER_ID"]
        );
        assert!(ErrorCode::ALL.iter().all(|c| (400..500).contains(&c.http_status())));
    }

    #[test]
    fn test_deck_error_codes() {
        let err = DeckError::role_empty(Role::Mid);
        assert_eq!(err.code(), ErrorCode::RoleEmpty);
        assert_eq!(err.code().as_str(), "ROLE_EMPTY");
        assert_eq!(err.metadata()["roles"], serde_json::json!(["Mid"]));
    }

    #[test]
    fn test_role_empty_message_lists_roles() {
        let err = DeckError::RoleEmpty {
            roles: smallvec![Role::Jungle, Role::Support],
        };
        assert_eq!(err.to_string(), "role slot empty: Jgl, Supp");
    }

    #[test]
    fn test_multiplier_conflict_metadata() {
        let err = DeckError::MultiplierConflict {
            multiplier: Multiplier::Captain,
            conflicting_role: Role::Adc,
        };
        let meta = err.metadata();
        assert_eq!(meta["multiplier"], "Captain");
        assert_eq!(meta["conflictingRole"], "Adc");
        assert_eq!(err.code().http_status(), 409);
    }

    #[test]
    fn test_currency_limit_is_reserved_code() {
        let err = DeckError::CurrencyLimitExceeded {
            limit: 100.0,
            total: 120.0,
        };
        assert_eq!(err.code().as_str(), "CURRENCY_LIMIT_EXCEEDED");
        assert_eq!(err.metadata()["total"], 120.0);
    }

    #[test]
    fn test_parse_error_metadata() {
        let err = ParseError::invalid_card("name must be a non-empty string", "name");
        assert_eq!(err.code(), ErrorCode::InvalidCard);
        assert_eq!(err.metadata()["field"], "name");

        let err = ParseError::InvalidUserId {
            value: serde_json::json!(-3),
        };
        assert_eq!(err.code().as_str(), "INVALID_USER_ID");
        assert_eq!(err.metadata()["value"], -3);
    }
}
