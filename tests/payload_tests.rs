//! Payload parser tests against request-shaped JSON bodies.

mod common;

use fantasy_deck::{
    parse_card, parse_deck, parse_user_id, Card, Deck, ErrorCode, Multiplier, ParserConfig,
    PayloadParser, PlayerId, Role, UserId,
};
use serde_json::json;

use common::init_logging;

/// Lowercase alias and padded name.
#[test]
fn test_parse_card_normalizes() {
    init_logging();
    let card = parse_card(&json!({ "name": "  Faker  ", "role": "mid" }), None).unwrap();

    assert_eq!(card, Card::new("Faker", Role::Mid));

    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json, json!({ "name": "Faker", "role": "Mid", "points": 0.0, "value": 0.0 }));
}

/// `parse_deck(null)` yields an empty deck and never fails.
#[test]
fn test_parse_deck_null() {
    init_logging();
    let deck = parse_deck(&json!(null)).unwrap();

    assert_eq!(deck, Deck::empty());
    assert_eq!(deck.user_id(), None);
    for role in Role::ALL {
        assert!(deck.card(role).is_none());
    }
}

/// A full request body through the parser and into the rule engine.
#[test]
fn test_parsed_deck_feeds_rule_engine() {
    init_logging();
    let body = json!({
        "userId": 7,
        "slots": {
            "top": { "name": "Zeus", "value": "12" },
            "jungle": { "name": "Oner", "value": 10, "playerId": 2 },
            "middle": { "name": "Faker", "value": 15, "multiplier": "Captain" },
            "bot": { "name": "Gumayusi", "value": 11 },
            "support": { "name": "Keria", "value": 9, "multiplier": "Vice-captain" }
        }
    });

    let deck = parse_deck(&body).unwrap();
    assert!(deck.is_complete());
    assert_eq!(deck.user_id(), Some(UserId::new(7)));
    assert_eq!(deck.calculate_value(), 57.0);
    assert_eq!(deck.captain().unwrap().name, "Faker");
    assert_eq!(deck.card(Role::Jungle).unwrap().player_id, Some(PlayerId::new(2)));

    let incoming = parse_card(&json!({ "name": "Ruler", "role": "adc", "multiplier": "Captain" }), None).unwrap();
    let err = deck.replace_card(Role::Adc, incoming).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MultiplierConflict);
}

/// Serialized decks parse back to the same value.
#[test]
fn test_serialized_deck_reparses() {
    init_logging();
    let deck = common::full_deck().with_user_id(Some(UserId::new(3)));
    let body = serde_json::to_value(&deck).unwrap();

    assert_eq!(parse_deck(&body).unwrap(), deck);
}

/// Malformed optional fields are dropped, required ones fail.
#[test]
fn test_untrusted_fields() {
    init_logging();
    let card = parse_card(
        &json!({
            "name": "Chovy",
            "role": "Mid",
            "points": [1, 2],
            "value": { "amount": 5 },
            "multiplier": "CAPTAIN",
            "playerId": 3.5
        }),
        None,
    )
    .unwrap();
    assert_eq!(card, Card::new("Chovy", Role::Mid));

    let err = parse_card(&json!({ "name": ["Chovy"], "role": "Mid" }), None).unwrap_err();
    assert_eq!(err.code().as_str(), "INVALID_CARD");

    let card = parse_card(&json!({ "name": "Chovy", "role": "Mid", "multiplier": "Captain" }), None).unwrap();
    assert_eq!(card.multiplier, Some(Multiplier::Captain));
}

/// Slots that are not objects or name no role are skipped.
#[test]
fn test_deck_soft_degrade() {
    init_logging();
    let deck = parse_deck(&json!({
        "userId": 0,
        "slots": {
            "Top": "Zeus",
            "coach": { "name": "kkOma" },
            "Adc": { "name": "Ruler" }
        }
    }))
    .unwrap();

    assert_eq!(deck.user_id(), None);
    assert!(deck.card(Role::Top).is_none());
    assert_eq!(deck.card(Role::Adc).unwrap().name, "Ruler");

    let deck = parse_deck(&json!({ "slots": ["Zeus"] })).unwrap();
    assert_eq!(deck, Deck::empty());
}

/// Two Captains in one payload never reach scoring.
#[test]
fn test_parse_deck_duplicate_captain() {
    init_logging();
    let err = parse_deck(&json!({
        "userId": 3,
        "slots": {
            "Top": { "name": "Zeus", "multiplier": "Captain" },
            "Mid": { "name": "Faker", "multiplier": "Captain" },
            "Supp": { "name": "Keria", "multiplier": "Vice-captain" }
        }
    }))
    .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidDeck);
    assert_eq!(err.code().as_str(), "INVALID_DECK");
    assert_eq!(err.metadata()["roles"], json!(["Top", "Mid"]));

    let err = serde_json::from_value::<Deck>(json!({
        "slots": {
            "Adc": { "name": "Ruler", "role": "Adc", "multiplier": "Vice-captain" },
            "Supp": { "name": "Keria", "role": "Supp", "multiplier": "Vice-captain" }
        }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("Vice-captain"));
}

#[test]
fn test_parse_user_id() {
    init_logging();
    assert_eq!(parse_user_id(&json!(19)).unwrap(), UserId::new(19));

    let err = parse_user_id(&json!("19")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidUserId);
    assert_eq!(err.metadata()["value"], "19");
}

/// Client-submitted scores can be stripped by policy.
#[test]
fn test_strict_parser_strips_scores() {
    init_logging();
    let parser = PayloadParser::with_config(ParserConfig::default().with_accept_tournament_points(false));
    let deck = parser
        .parse_deck(&json!({ "slots": { "Mid": { "name": "Faker", "tournamentPoints": 999 } } }))
        .unwrap();

    assert_eq!(deck.card(Role::Mid).unwrap().tournament_points, None);
    assert!(!parser.config().accept_tournament_points);
}
