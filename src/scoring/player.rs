//! Live player records and the base-score formula.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, ScoringConfig};

/// Match statistics for one live player, as supplied by the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Alternate name, indexed alongside `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,

    /// Creep score.
    #[serde(default)]
    pub cs: u32,
    #[serde(default)]
    pub gold: u32,
}

impl PlayerRecord {
    /// Player with all stats at zero.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nickname: None,
            kills: 0,
            deaths: 0,
            assists: 0,
            cs: 0,
            gold: 0,
        }
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set kills, deaths and assists.
    #[must_use]
    pub fn with_kda(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self
    }

    /// Set creep score and gold.
    #[must_use]
    pub fn with_farm(mut self, cs: u32, gold: u32) -> Self {
        self.cs = cs;
        self.gold = gold;
        self
    }
}

/// Base score under the standard weights:
/// `kills*3 + assists*2 - deaths + floor(cs/10) + floor(gold/500)`.
///
/// ```
/// use fantasy_deck::core::PlayerId;
/// use fantasy_deck::scoring::{calculate_player_score, PlayerRecord};
///
/// let player = PlayerRecord::new(PlayerId::new(1), "Faker")
///     .with_kda(5, 2, 10)
///     .with_farm(134, 9800);
///
/// assert_eq!(calculate_player_score(&player), 65);
/// ```
#[must_use]
pub fn calculate_player_score(player: &PlayerRecord) -> i64 {
    calculate_player_score_with(player, &ScoringConfig::default())
}

/// Base score under custom weights. Saturates instead of overflowing.
///
/// Only reachable with a validated config (`ScoringEngine::with_config`), so
/// both divisors are positive. Custom weights go through
/// `ScoringEngine::base_score`.
pub(crate) fn calculate_player_score_with(player: &PlayerRecord, config: &ScoringConfig) -> i64 {
    let per_point = |stat: u32, divisor: i64| i64::from(stat).checked_div_euclid(divisor).unwrap_or(0);

    i64::from(player.kills)
        .saturating_mul(config.kill_weight)
        .saturating_add(i64::from(player.assists).saturating_mul(config.assist_weight))
        .saturating_sub(i64::from(player.deaths).saturating_mul(config.death_penalty))
        .saturating_add(per_point(player.cs, config.cs_divisor))
        .saturating_add(per_point(player.gold, config.gold_divisor))
}
