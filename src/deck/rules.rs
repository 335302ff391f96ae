//! Deck rule engine.
//!
//! Every mutation reads `&self` and returns a fresh `Deck` or a `DeckError`;
//! the receiver is never altered, so one deck can be handed to several
//! operations at once.
//!
//! ## Rules
//!
//! - A card sits in the slot matching its own role (`ROLE_MISMATCH`)
//! - `add_card` targets an empty slot (`ROLE_ALREADY_OCCUPIED`)
//! - `remove_card` and `replace_card` target a filled slot (`ROLE_EMPTY`)
//! - Each multiplier label appears on at most one card (`MULTIPLIER_CONFLICT`)
//!
//! Roles are typed, so free-form spellings are normalized before reaching
//! this module (see `Role::normalize` and the payload parser).

use tracing::debug;

use super::store::{CompleteDeck, Deck};
use crate::core::{Card, DeckError, Role, RoleList};

impl Deck {
    /// Place a card into the empty slot for its role.
    ///
    /// ```
    /// use fantasy_deck::core::{Card, Role};
    /// use fantasy_deck::deck::Deck;
    ///
    /// let deck = Deck::empty();
    /// let next = deck.add_card(Card::new("Gumayusi", Role::Adc)).unwrap();
    ///
    /// assert!(deck.card(Role::Adc).is_none());
    /// assert_eq!(next.card(Role::Adc).unwrap().name, "Gumayusi");
    /// ```
    pub fn add_card(&self, card: Card) -> Result<Deck, DeckError> {
        let role = card.role;
        if let Some(occupant) = self.card(role) {
            return Err(DeckError::RoleAlreadyOccupied {
                role,
                occupant: occupant.name.clone(),
            });
        }
        self.check_multiplier(role, &card)?;

        debug!(role = %role, card = %card.name, "card added");
        Ok(self.with_slot(role, Some(card)))
    }

    /// Empty a filled slot.
    pub fn remove_card(&self, role: Role) -> Result<Deck, DeckError> {
        if self.card(role).is_none() {
            return Err(DeckError::role_empty(role));
        }

        debug!(role = %role, "card removed");
        Ok(self.with_slot(role, None))
    }

    /// Swap the card in a filled slot.
    ///
    /// The outgoing card's multiplier does not count against the incoming
    /// card, so a card can be replaced by one carrying the same label.
    pub fn replace_card(&self, role: Role, card: Card) -> Result<Deck, DeckError> {
        if self.card(role).is_none() {
            return Err(DeckError::role_empty(role));
        }
        Self::check_role(role, &card)?;
        self.check_multiplier(role, &card)?;

        debug!(role = %role, card = %card.name, "card replaced");
        Ok(self.with_slot(role, Some(card)))
    }

    /// Add or replace, regardless of slot occupancy.
    pub fn upsert_card(&self, role: Role, card: Card) -> Result<Deck, DeckError> {
        Self::check_role(role, &card)?;
        self.check_multiplier(role, &card)?;

        debug!(role = %role, card = %card.name, replaced = self.card(role).is_some(), "card upserted");
        Ok(self.with_slot(role, Some(card)))
    }

    /// True iff every role slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Role::ALL.iter().all(|&role| self.card(role).is_some())
    }

    /// Unfilled roles in canonical order.
    #[must_use]
    pub fn missing_roles(&self) -> RoleList {
        Role::ALL
            .into_iter()
            .filter(|&role| self.card(role).is_none())
            .collect()
    }

    /// Sum of `value` over filled slots.
    #[must_use]
    pub fn calculate_value(&self) -> f64 {
        self.cards().map(|(_, card)| card.value).sum()
    }

    /// Total view of the deck, failing with every missing role listed.
    pub fn ensure_complete(&self) -> Result<CompleteDeck, DeckError> {
        self.slots()
            .clone()
            .transpose()
            .map(|slots| CompleteDeck::new(self.user_id(), slots))
            .map_err(|missing| DeckError::RoleEmpty {
                roles: missing.into_iter().collect(),
            })
    }

    fn check_role(target: Role, card: &Card) -> Result<(), DeckError> {
        if card.role != target {
            return Err(DeckError::RoleMismatch {
                expected: target,
                actual: card.role,
            });
        }
        Ok(())
    }

    /// Scan every slot except `target` for the card's multiplier label.
    fn check_multiplier(&self, target: Role, card: &Card) -> Result<(), DeckError> {
        let Some(multiplier) = card.multiplier else {
            return Ok(());
        };

        match self
            .cards()
            .find(|(role, other)| *role != target && other.multiplier == Some(multiplier))
        {
            Some((conflicting_role, _)) => Err(DeckError::MultiplierConflict {
                multiplier,
                conflicting_role,
            }),
            None => Ok(()),
        }
    }
}
