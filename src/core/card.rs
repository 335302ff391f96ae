//! Drafted player cards.
//!
//! A `Card` occupies one role slot of a deck. It links to a live player
//! through an optional `PlayerId` and may carry one of two scoring
//! multiplier labels. `tournament_points` is written by the scoring engine.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Identifier of a live player record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Identifier of the user owning a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Create a new user ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User({})", self.0)
    }
}

/// Scoring boost label. At most one card per label in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    #[serde(rename = "Captain")]
    Captain,
    #[serde(rename = "Vice-captain")]
    ViceCaptain,
}

impl Multiplier {
    pub const ALL: [Multiplier; 2] = [Multiplier::Captain, Multiplier::ViceCaptain];

    /// Wire label, exactly as accepted by the payload parser.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Multiplier::Captain => "Captain",
            Multiplier::ViceCaptain => "Vice-captain",
        }
    }

    /// Exact-match lookup. No trimming or case folding.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Multiplier> {
        match label {
            "Captain" => Some(Multiplier::Captain),
            "Vice-captain" => Some(Multiplier::ViceCaptain),
            _ => None,
        }
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A drafted player slot.
///
/// ## Example
///
/// ```
/// use fantasy_deck::core::{Card, Multiplier, PlayerId, Role};
///
/// let card = Card::new("Faker", Role::Mid)
///     .with_value(12.5)
///     .with_multiplier(Multiplier::Captain)
///     .with_player_id(PlayerId::new(7));
///
/// assert_eq!(card.role, Role::Mid);
/// assert_eq!(card.multiplier, Some(Multiplier::Captain));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Display name (non-empty).
    pub name: String,

    /// Role slot this card belongs to.
    pub role: Role,

    /// Base valuation.
    #[serde(default)]
    pub points: f64,

    /// Acquisition cost.
    #[serde(default)]
    pub value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<Multiplier>,

    /// Link to a live player record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,

    /// Score written by the scoring engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_points: Option<f64>,
}

impl Card {
    /// Create a card with zero points and value.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            points: 0.0,
            value: 0.0,
            multiplier: None,
            player_id: None,
            tournament_points: None,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    #[must_use]
    pub fn with_player_id(mut self, id: PlayerId) -> Self {
        self.player_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_tournament_points(mut self, points: f64) -> Self {
        self.tournament_points = Some(points);
        self
    }

    /// Copy of this card tagged with a different role.
    #[must_use]
    pub fn retagged(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        assert_eq!(PlayerId::new(42).raw(), 42);
        assert_eq!(format!("{}", PlayerId::new(42)), "Player(42)");
        assert_eq!(format!("{}", UserId::new(3)), "User(3)");
    }

    #[test]
    fn test_multiplier_labels() {
        assert_eq!(Multiplier::from_label("Captain"), Some(Multiplier::Captain));
        assert_eq!(Multiplier::from_label("Vice-captain"), Some(Multiplier::ViceCaptain));
        assert_eq!(Multiplier::from_label("captain"), None);
        assert_eq!(Multiplier::from_label("Vice-Captain"), None);
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new("Zeus", Role::Top)
            .with_points(10.0)
            .with_value(8.0)
            .with_player_id(PlayerId::new(1));

        assert_eq!(card.name, "Zeus");
        assert_eq!(card.points, 10.0);
        assert_eq!(card.value, 8.0);
        assert_eq!(card.multiplier, None);
        assert_eq!(card.tournament_points, None);
    }

    #[test]
    fn test_retagged() {
        let card = Card::new("Oner", Role::Top).retagged(Role::Jungle);
        assert_eq!(card.role, Role::Jungle);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new("Keria", Role::Support)
            .with_multiplier(Multiplier::ViceCaptain)
            .with_player_id(PlayerId::new(5));

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["role"], "Supp");
        assert_eq!(json["multiplier"], "Vice-captain");
        assert_eq!(json["playerId"], 5);
        assert!(json.get("tournamentPoints").is_none());

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(card, back);
    }
}
