//! Read-only deck summaries for presentation.

use serde::{Deserialize, Serialize};

use super::store::Deck;
use crate::core::RoleList;

/// Completeness, missing roles and total value of a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub complete: bool,
    /// Canonical order.
    pub missing_roles: RoleList,
    pub total_value: f64,
}

impl Deck {
    /// Combine `is_complete`, `missing_roles` and `calculate_value`.
    #[must_use]
    pub fn summarize(&self) -> DeckSummary {
        DeckSummary {
            complete: self.is_complete(),
            missing_roles: self.missing_roles(),
            total_value: self.calculate_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Role};

    #[test]
    fn test_empty_summary() {
        let summary = Deck::empty().summarize();

        assert!(!summary.complete);
        assert_eq!(summary.missing_roles.as_slice(), &Role::ALL);
        assert_eq!(summary.total_value, 0.0);
    }

    #[test]
    fn test_partial_summary() {
        let deck = Deck::new(
            None,
            [
                (Role::Top, Card::new("Zeus", Role::Top).with_value(12.0)),
                (Role::Adc, Card::new("Ruler", Role::Adc).with_value(9.5)),
            ],
        )
        .unwrap();
        let summary = deck.summarize();

        assert_eq!(summary.missing_roles.as_slice(), &[Role::Jungle, Role::Mid, Role::Support]);
        assert_eq!(summary.total_value, 21.5);
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(Deck::empty().summarize()).unwrap();
        assert_eq!(json["complete"], false);
        assert_eq!(json["missingRoles"], serde_json::json!(["Top", "Jgl", "Mid", "Adc", "Supp"]));
        assert_eq!(json["totalValue"], 0.0);
    }
}
