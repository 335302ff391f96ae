//! Deck value types.
//!
//! A `Deck` maps every canonical role to an optional card, plus an optional
//! owner. Decks are values: rule-engine operations take `&Deck` and return a
//! new `Deck`, so a caller's copy never changes underneath it.
//!
//! `CompleteDeck` is the total view produced by `Deck::ensure_complete`,
//! where every role is guaranteed to hold a card.

use serde::{Deserialize, Serialize};

use crate::core::{Card, DeckError, Multiplier, Role, RoleList, RoleMap, UserId};

/// Wire shape of a deck. Deserialized decks are rebuilt through
/// `Deck::from_slots`, so each card is tagged with its slot's role and a
/// payload holding two cards with the same multiplier is rejected.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeckRecord {
    #[serde(default)]
    user_id: Option<UserId>,
    #[serde(default)]
    slots: RoleMap<Option<Card>>,
}

impl TryFrom<DeckRecord> for Deck {
    type Error = DeckError;

    fn try_from(record: DeckRecord) -> Result<Self, Self::Error> {
        Deck::from_slots(record.user_id, record.slots)
    }
}

/// One optional card per role plus an optional owner.
///
/// ## Example
///
/// ```
/// use fantasy_deck::core::{Card, Role, UserId};
/// use fantasy_deck::deck::Deck;
///
/// let deck = Deck::new(Some(UserId::new(1)), [(Role::Mid, Card::new("Faker", Role::Mid))]).unwrap();
///
/// assert!(deck.card(Role::Mid).is_some());
/// assert!(deck.card(Role::Top).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "DeckRecord")]
pub struct Deck {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    slots: RoleMap<Option<Card>>,
}

impl Deck {
    /// An empty, unowned deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a deck from a partial set of slots.
    ///
    /// Roles not mentioned stay empty. Each card is re-tagged with the role
    /// of the slot it is placed in. A later entry for the same role replaces
    /// an earlier one. Fails with `MultiplierConflict` when two of the
    /// resulting cards carry the same multiplier label.
    pub fn new(
        user_id: Option<UserId>,
        slots: impl IntoIterator<Item = (Role, Card)>,
    ) -> Result<Self, DeckError> {
        let mut map: RoleMap<Option<Card>> = RoleMap::default();
        for (role, card) in slots {
            map[role] = Some(card);
        }
        Self::from_slots(user_id, map)
    }

    /// Build a deck from a full role map, re-tagging every card.
    pub fn from_slots(user_id: Option<UserId>, slots: RoleMap<Option<Card>>) -> Result<Self, DeckError> {
        let slots = slots.map(|role, card| card.map(|c| c.retagged(role)));
        let deck = Self { user_id, slots };
        deck.check_unique_multipliers()?;
        Ok(deck)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Copy of this deck with a different owner.
    #[must_use]
    pub fn with_user_id(&self, user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            slots: self.slots.clone(),
        }
    }

    /// Card in a role slot, if any.
    #[must_use]
    pub fn card(&self, role: Role) -> Option<&Card> {
        self.slots[role].as_ref()
    }

    /// All slots, keyed by role.
    #[must_use]
    pub fn slots(&self) -> &RoleMap<Option<Card>> {
        &self.slots
    }

    /// Filled slots in canonical order.
    pub fn cards(&self) -> impl Iterator<Item = (Role, &Card)> {
        self.slots
            .iter()
            .filter_map(|(role, card)| card.as_ref().map(|c| (role, c)))
    }

    /// Role holding a given multiplier label.
    #[must_use]
    pub fn holder_of(&self, multiplier: Multiplier) -> Option<Role> {
        self.cards()
            .find(|(_, card)| card.multiplier == Some(multiplier))
            .map(|(role, _)| role)
    }

    /// Every role holding a multiplier label, in canonical order. More than
    /// one entry only for decks that were never validated.
    #[must_use]
    pub fn holders_of(&self, multiplier: Multiplier) -> RoleList {
        self.cards()
            .filter(|(_, card)| card.multiplier == Some(multiplier))
            .map(|(role, _)| role)
            .collect()
    }

    #[must_use]
    pub fn captain(&self) -> Option<&Card> {
        self.holder_of(Multiplier::Captain).and_then(|r| self.card(r))
    }

    #[must_use]
    pub fn vice_captain(&self) -> Option<&Card> {
        self.holder_of(Multiplier::ViceCaptain).and_then(|r| self.card(r))
    }

    /// Each multiplier label on at most one card. The error names the first
    /// holder in canonical order.
    fn check_unique_multipliers(&self) -> Result<(), DeckError> {
        for multiplier in Multiplier::ALL {
            let holders = self.holders_of(multiplier);
            if let [first, _, ..] = holders.as_slice() {
                return Err(DeckError::MultiplierConflict {
                    multiplier,
                    conflicting_role: *first,
                });
            }
        }
        Ok(())
    }

    /// Copy of this deck with one slot overwritten. No validation.
    pub(crate) fn with_slot(&self, role: Role, card: Option<Card>) -> Self {
        let mut next = self.clone();
        next.slots[role] = card;
        next
    }

    /// Mutable slot access for engines that produce scored copies.
    pub(crate) fn slot_mut(&mut self, role: Role) -> Option<&mut Card> {
        self.slots[role].as_mut()
    }
}

/// A deck with a card in every role.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteDeck {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    slots: RoleMap<Card>,
}

impl CompleteDeck {
    pub(crate) fn new(user_id: Option<UserId>, slots: RoleMap<Card>) -> Self {
        Self { user_id, slots }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Card in a role slot. Always present.
    #[must_use]
    pub fn card(&self, role: Role) -> &Card {
        &self.slots[role]
    }

    /// Cards in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Card)> {
        self.slots.iter()
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.slots.iter().map(|(_, card)| card.value).sum()
    }

    /// Back to a plain deck.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        Deck {
            user_id: self.user_id,
            slots: self.slots.map(|_, card| Some(card)),
        }
    }
}
