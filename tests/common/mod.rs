//! Shared helpers for integration tests.

#![allow(dead_code)]

use fantasy_deck::{Card, Deck, Multiplier, PlayerId, PlayerRecord, Role};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// The five starters used across tests, ids 1..=5 in canonical role order.
pub const ROSTER: [(&str, Role); 5] = [
    ("Zeus", Role::Top),
    ("Oner", Role::Jungle),
    ("Faker", Role::Mid),
    ("Gumayusi", Role::Adc),
    ("Keria", Role::Support),
];

pub fn roster_card(role: Role) -> Card {
    let (name, _) = ROSTER[role.index()];
    Card::new(name, role)
        .with_value(10.0 + role.index() as f64)
        .with_player_id(PlayerId::new(role.index() as u64 + 1))
}

/// A full deck with Faker as Captain and Keria as Vice-captain.
pub fn full_deck() -> Deck {
    Deck::new(
        None,
        Role::ALL.into_iter().map(|role| {
            let card = roster_card(role);
            let card = match role {
                Role::Mid => card.with_multiplier(Multiplier::Captain),
                Role::Support => card.with_multiplier(Multiplier::ViceCaptain),
                _ => card,
            };
            (role, card)
        }),
    )
    .unwrap()
}

/// Live records matching `ROSTER`.
pub fn live_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::new(PlayerId::new(1), "Zeus").with_kda(3, 1, 4).with_farm(250, 12000),
        PlayerRecord::new(PlayerId::new(2), "Oner").with_kda(2, 3, 9).with_farm(160, 9000),
        PlayerRecord::new(PlayerId::new(3), "Faker")
            .with_nickname("Unkillable Demon King")
            .with_kda(5, 2, 10)
            .with_farm(134, 9800),
        PlayerRecord::new(PlayerId::new(4), "Gumayusi").with_kda(7, 0, 5).with_farm(310, 14500),
        PlayerRecord::new(PlayerId::new(5), "Keria").with_kda(0, 2, 14).with_farm(30, 6000),
    ]
}
