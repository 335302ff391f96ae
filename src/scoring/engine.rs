//! Scores a deck against live player statistics.
//!
//! For each role in canonical order:
//!
//! 1. Empty slot: role is missing
//! 2. Resolve the card to a player, by `player_id` first, then by
//!    lowercased name or nickname
//! 3. Unresolved: card's `tournament_points` set to 0, role is missing
//! 4. Resolved: `total = round(base * factor)` is written back onto the card
//!
//! The caller's deck is never modified; the result carries a scored copy.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::player::{calculate_player_score_with, PlayerRecord};
use crate::core::{Card, ConfigError, Multiplier, PlayerId, Role, RoleList, ScoringConfig};
use crate::deck::Deck;

/// Score for one filled, resolved role.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub role: Role,
    pub player_id: PlayerId,
    pub player_name: String,
    pub base_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<Multiplier>,
    pub multiplier_factor: f64,
    pub total_score: i64,
}

/// Outcome of scoring one deck.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckScoreResult {
    /// Copy of the input deck with `tournament_points` written back.
    pub deck: Deck,
    /// Resolved roles in canonical order.
    pub entries: Vec<ScoreEntry>,
    /// Empty or unresolved roles in canonical order.
    pub missing_roles: RoleList,
    pub total_score: i64,
}

impl DeckScoreResult {
    /// Entry for a role, if it was scored.
    #[must_use]
    pub fn entry(&self, role: Role) -> Option<&ScoreEntry> {
        self.entries.iter().find(|e| e.role == role)
    }
}

/// Lookup indexes over a player collection.
///
/// Later records win when two share an id or a lowercased name.
pub struct PlayerIndex<'a> {
    by_id: FxHashMap<PlayerId, &'a PlayerRecord>,
    by_name: FxHashMap<String, &'a PlayerRecord>,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(players: &'a [PlayerRecord]) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for player in players {
            by_id.insert(player.id, player);
            by_name.insert(player.name.to_lowercase(), player);
            if let Some(nickname) = &player.nickname {
                by_name.insert(nickname.to_lowercase(), player);
            }
        }

        Self { by_id, by_name }
    }

    /// Match by id, falling back to name.
    #[must_use]
    pub fn resolve(&self, card: &Card) -> Option<&'a PlayerRecord> {
        card.player_id
            .and_then(|id| self.by_id.get(&id).copied())
            .or_else(|| self.by_name.get(&card.name.to_lowercase()).copied())
    }
}

/// Round to nearest, halves toward positive infinity.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Deck scorer.
///
/// ## Example
///
/// ```
/// use fantasy_deck::core::{Card, Multiplier, PlayerId, Role};
/// use fantasy_deck::deck::Deck;
/// use fantasy_deck::scoring::{PlayerRecord, ScoringEngine};
///
/// let deck = Deck::empty()
///     .add_card(Card::new("Faker", Role::Mid).with_multiplier(Multiplier::Captain))
///     .unwrap();
/// let players = vec![
///     PlayerRecord::new(PlayerId::new(1), "Faker").with_kda(5, 2, 10).with_farm(134, 9800),
/// ];
///
/// let result = ScoringEngine::new().score(&deck, &players);
/// assert_eq!(result.total_score, 130);
/// assert_eq!(result.missing_roles.len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Engine with the standard weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom weights, validated up front.
    pub fn with_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Unmultiplied score for a player.
    #[must_use]
    pub fn base_score(&self, player: &PlayerRecord) -> i64 {
        calculate_player_score_with(player, &self.config)
    }

    /// Score a deck. Missing or unresolved roles contribute nothing.
    pub fn score(&self, deck: &Deck, players: &[PlayerRecord]) -> DeckScoreResult {
        let index = PlayerIndex::new(players);
        let mut scored = deck.clone();
        let mut entries = Vec::new();
        let mut missing_roles = RoleList::new();

        for role in Role::ALL {
            let Some(card) = scored.slot_mut(role) else {
                missing_roles.push(role);
                continue;
            };

            let Some(player) = index.resolve(card) else {
                warn!(role = %role, card = %card.name, player_id = ?card.player_id, "no live player for card");
                card.tournament_points = Some(0.0);
                missing_roles.push(role);
                continue;
            };

            let base_score = self.base_score(player);
            let multiplier_factor = self.config.factor(card.multiplier);
            let total_score = round_half_up(base_score as f64 * multiplier_factor);
            card.tournament_points = Some(total_score as f64);

            entries.push(ScoreEntry {
                role,
                player_id: player.id,
                player_name: player.name.clone(),
                base_score,
                multiplier: card.multiplier,
                multiplier_factor,
                total_score,
            });
        }

        let total_score = entries.iter().map(|e| e.total_score).sum();
        debug!(
            user_id = ?deck.user_id(),
            total_score,
            scored = entries.len(),
            missing = missing_roles.len(),
            "deck scored"
        );

        DeckScoreResult {
            deck: scored,
            entries,
            missing_roles,
            total_score,
        }
    }

    /// Score several decks against the same players, one result per deck.
    pub fn score_many<'d>(
        &self,
        decks: impl IntoIterator<Item = &'d Deck>,
        players: &[PlayerRecord],
    ) -> Vec<DeckScoreResult> {
        decks.into_iter().map(|deck| self.score(deck, players)).collect()
    }
}

/// Score a deck with the standard weights.
pub fn score(deck: &Deck, players: &[PlayerRecord]) -> DeckScoreResult {
    ScoringEngine::new().score(deck, players)
}
