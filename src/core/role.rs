//! Canonical roles and the alias normalizer.
//!
//! A deck has exactly five role slots. Inputs arriving from users or
//! external payloads may use lowercase spellings or common aliases
//! ("jg", "bot", "supp"); `Role::normalize` maps them onto the closed
//! enumeration.
//!
//! ## Canonical Tokens
//!
//! | Role | Token |
//! |------|-------|
//! | Top | `Top` |
//! | Jungle | `Jgl` |
//! | Mid | `Mid` |
//! | Adc | `Adc` |
//! | Support | `Supp` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::DeckError;

/// Ordered list of roles. Never holds more than five.
pub type RoleList = SmallVec<[Role; Role::COUNT]>;

/// One of the five fixed positions in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Top")]
    Top,
    #[serde(rename = "Jgl")]
    Jungle,
    #[serde(rename = "Mid")]
    Mid,
    #[serde(rename = "Adc")]
    Adc,
    #[serde(rename = "Supp")]
    Support,
}

/// Lowercase alias table. Many-to-one.
const ALIASES: &[(&str, Role)] = &[
    ("top", Role::Top),
    ("toplane", Role::Top),
    ("jgl", Role::Jungle),
    ("jg", Role::Jungle),
    ("jungle", Role::Jungle),
    ("jungler", Role::Jungle),
    ("mid", Role::Mid),
    ("middle", Role::Mid),
    ("midlane", Role::Mid),
    ("adc", Role::Adc),
    ("bot", Role::Adc),
    ("bottom", Role::Adc),
    ("carry", Role::Adc),
    ("supp", Role::Support),
    ("support", Role::Support),
    ("sup", Role::Support),
];

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Number of role slots in a deck.
    pub const COUNT: usize = 5;

    /// Canonical, case-sensitive token used at serialization boundaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Top => "Top",
            Role::Jungle => "Jgl",
            Role::Mid => "Mid",
            Role::Adc => "Adc",
            Role::Support => "Supp",
        }
    }

    /// Position of this role in canonical order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Adc => 3,
            Role::Support => 4,
        }
    }

    /// Match an exact canonical token without alias lookup.
    #[must_use]
    pub fn from_canonical(token: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == token)
    }

    /// Map a free-form spelling onto a canonical role.
    ///
    /// Canonical tokens pass through unchanged. Anything else is trimmed,
    /// lowercased and looked up in the alias table.
    ///
    /// ```
    /// use fantasy_deck::core::Role;
    ///
    /// assert_eq!(Role::normalize("Jgl").unwrap(), Role::Jungle);
    /// assert_eq!(Role::normalize("  BOT ").unwrap(), Role::Adc);
    /// assert!(Role::normalize("coach").is_err());
    /// ```
    pub fn normalize(input: &str) -> Result<Role, DeckError> {
        if let Some(role) = Role::from_canonical(input) {
            return Ok(role);
        }

        let key = input.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, role)| *role)
            .ok_or_else(|| DeckError::RoleNotFound {
                input: input.to_string(),
            })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::normalize(s)
    }
}
