//! Shape-checking boundary from untyped payloads to cards and decks.
//!
//! Every field is treated as untrusted. Required fields fail with a typed
//! `ParseError`; optional fields that do not validate are dropped and logged
//! at debug level.
//!
//! ## Soft-degrade paths
//!
//! - A deck payload that is not an object yields an empty deck
//! - A slot key that does not name a role is skipped
//!
//! A deck whose slots carry the same multiplier label twice is rejected with
//! `INVALID_DECK`.

use serde_json::{Map, Value};
use tracing::debug;

use super::coerce::{positive_integer, to_number, type_name};
use crate::core::{Card, DeckError, Multiplier, ParseError, ParserConfig, PlayerId, Role, RoleList, RoleMap, UserId};
use crate::deck::Deck;

/// Payload parser with a configurable acceptance policy.
///
/// ## Example
///
/// ```
/// use fantasy_deck::core::Role;
/// use fantasy_deck::payload::PayloadParser;
/// use serde_json::json;
///
/// let parser = PayloadParser::new();
/// let card = parser.parse_card(&json!({ "name": " Faker ", "role": "mid" }), None).unwrap();
///
/// assert_eq!(card.name, "Faker");
/// assert_eq!(card.role, Role::Mid);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PayloadParser {
    config: ParserConfig,
}

impl PayloadParser {
    /// Parser with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a card. `role_hint` takes precedence over the payload's `role`.
    pub fn parse_card(&self, payload: &Value, role_hint: Option<Role>) -> Result<Card, ParseError> {
        let Value::Object(fields) = payload else {
            return Err(ParseError::InvalidCard {
                reason: format!("expected an object, got {}", type_name(payload)),
                field: None,
            });
        };

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ParseError::invalid_card("name must be a non-empty string", "name"))?;

        let role = match role_hint {
            Some(role) => role,
            None => Self::card_role(fields)?,
        };

        let mut card = Card::new(name, role)
            .with_points(Self::number_field(fields, "points"))
            .with_value(Self::number_field(fields, "value"));

        card.multiplier = Self::multiplier_field(fields);
        card.player_id = Self::player_id_field(fields);

        if let Some(raw) = fields.get("tournamentPoints").filter(|v| !v.is_null()) {
            if self.config.accept_tournament_points {
                card.tournament_points = Some(to_number(raw));
            } else {
                debug!(card = %card.name, "client tournamentPoints stripped");
            }
        }

        Ok(card)
    }

    /// Parse a deck payload of shape `{ userId?, slots: { <role>: <card> } }`.
    ///
    /// Non-object payloads give an empty deck. Slot keys are role-normalized;
    /// unknown keys are skipped. A slot value that is an object must parse
    /// as a card pinned to that role, otherwise the whole parse fails. When
    /// two keys normalize to the same role, the later key in map order wins.
    pub fn parse_deck(&self, payload: &Value) -> Result<Deck, ParseError> {
        let Value::Object(fields) = payload else {
            debug!(found = type_name(payload), "deck payload is not an object, using empty deck");
            return Ok(Deck::empty());
        };

        let user_id = fields.get("userId").and_then(|raw| {
            let id = positive_integer(raw).map(UserId::new);
            if id.is_none() {
                debug!(value = %raw, "deck userId dropped");
            }
            id
        });

        let mut slots: RoleMap<Option<Card>> = RoleMap::default();
        match fields.get("slots") {
            Some(Value::Object(entries)) => {
                for (key, value) in entries {
                    let Ok(role) = Role::normalize(key) else {
                        debug!(key = %key, "unknown slot key skipped");
                        continue;
                    };
                    if value.is_object() {
                        slots[role] = Some(self.parse_card(value, Some(role))?);
                    }
                }
            }
            Some(other) => debug!(found = type_name(other), "deck slots is not an object"),
            None => {}
        }

        Deck::from_slots(user_id, slots.clone()).map_err(|err| {
            let roles: RoleList = match &err {
                DeckError::MultiplierConflict { multiplier, .. } => Role::ALL
                    .into_iter()
                    .filter(|&role| slots[role].as_ref().and_then(|card| card.multiplier) == Some(*multiplier))
                    .collect(),
                _ => RoleList::new(),
            };
            debug!(roles = ?roles, "deck payload rejected: {err}");
            ParseError::InvalidDeck {
                reason: err.to_string(),
                roles,
            }
        })
    }

    /// Accept only a positive integer.
    pub fn parse_user_id(&self, value: &Value) -> Result<UserId, ParseError> {
        positive_integer(value)
            .map(UserId::new)
            .ok_or_else(|| ParseError::InvalidUserId {
                value: value.clone(),
            })
    }

    fn card_role(fields: &Map<String, Value>) -> Result<Role, ParseError> {
        let raw = fields
            .get("role")
            .and_then(Value::as_str)
            .ok_or_else(|| ParseError::invalid_card("role must be a string", "role"))?;

        Role::normalize(raw)
            .map_err(|_| ParseError::invalid_card(format!("unknown role {raw:?}"), "role"))
    }

    fn number_field(fields: &Map<String, Value>, key: &str) -> f64 {
        fields.get(key).map_or(0.0, to_number)
    }

    fn multiplier_field(fields: &Map<String, Value>) -> Option<Multiplier> {
        let raw = fields.get("multiplier").filter(|v| !v.is_null())?;
        let multiplier = raw.as_str().and_then(Multiplier::from_label);
        if multiplier.is_none() {
            debug!(value = %raw, "unrecognized multiplier dropped");
        }
        multiplier
    }

    fn player_id_field(fields: &Map<String, Value>) -> Option<PlayerId> {
        let raw = fields.get("playerId").filter(|v| !v.is_null())?;
        let id = positive_integer(raw).map(PlayerId::new);
        if id.is_none() {
            debug!(value = %raw, "invalid playerId dropped");
        }
        id
    }
}

/// Parse a card with the default policy.
pub fn parse_card(payload: &Value, role_hint: Option<Role>) -> Result<Card, ParseError> {
    PayloadParser::new().parse_card(payload, role_hint)
}

/// Parse a deck with the default policy.
pub fn parse_deck(payload: &Value) -> Result<Deck, ParseError> {
    PayloadParser::new().parse_deck(payload)
}

/// Parse an owner id.
pub fn parse_user_id(value: &Value) -> Result<UserId, ParseError> {
    PayloadParser::new().parse_user_id(value)
}
