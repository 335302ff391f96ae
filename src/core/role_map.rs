//! Per-role data storage.
//!
//! `RoleMap<T>` holds exactly one value per canonical role. It is a plain
//! record with five fields, so every role is always present and cloning a
//! map clones five values, nothing more. Serialized form is an object keyed
//! by the canonical role tokens.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::role::Role;

/// One value per role, with O(1) access by `Role`.
///
/// ## Example
///
/// ```
/// use fantasy_deck::core::{Role, RoleMap};
///
/// let mut picks: RoleMap<u32> = RoleMap::from_fn(|_| 0);
/// picks[Role::Mid] = 3;
///
/// assert_eq!(picks[Role::Mid], 3);
/// assert_eq!(picks.iter().map(|(_, n)| *n).sum::<u32>(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleMap<T> {
    #[serde(rename = "Top")]
    top: T,
    #[serde(rename = "Jgl")]
    jungle: T,
    #[serde(rename = "Mid")]
    mid: T,
    #[serde(rename = "Adc")]
    adc: T,
    #[serde(rename = "Supp")]
    support: T,
}

impl<T> RoleMap<T> {
    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Role) -> T) -> Self {
        Self {
            top: factory(Role::Top),
            jungle: factory(Role::Jungle),
            mid: factory(Role::Mid),
            adc: factory(Role::Adc),
            support: factory(Role::Support),
        }
    }

    /// Get a reference to a role's value.
    #[must_use]
    pub fn get(&self, role: Role) -> &T {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jungle,
            Role::Mid => &self.mid,
            Role::Adc => &self.adc,
            Role::Support => &self.support,
        }
    }

    /// Get a mutable reference to a role's value.
    pub fn get_mut(&mut self, role: Role) -> &mut T {
        match role {
            Role::Top => &mut self.top,
            Role::Jungle => &mut self.jungle,
            Role::Mid => &mut self.mid,
            Role::Adc => &mut self.adc,
            Role::Support => &mut self.support,
        }
    }

    /// Replace a role's value, returning the previous one.
    pub fn set(&mut self, role: Role, value: T) -> T {
        std::mem::replace(self.get_mut(role), value)
    }

    /// Iterate over (Role, &T) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Transform every value, keeping the role keys.
    pub fn map<U>(self, mut f: impl FnMut(Role, T) -> U) -> RoleMap<U> {
        RoleMap {
            top: f(Role::Top, self.top),
            jungle: f(Role::Jungle, self.jungle),
            mid: f(Role::Mid, self.mid),
            adc: f(Role::Adc, self.adc),
            support: f(Role::Support, self.support),
        }
    }
}

impl<T> RoleMap<Option<T>> {
    /// Convert a map of options into a map of values if every role is filled.
    ///
    /// Returns the roles that are `None` on failure, in canonical order.
    pub fn transpose(self) -> Result<RoleMap<T>, Vec<Role>> {
        let missing: Vec<Role> = self
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(role, _)| role)
            .collect();

        match (self.top, self.jungle, self.mid, self.adc, self.support) {
            (Some(top), Some(jungle), Some(mid), Some(adc), Some(support)) => Ok(RoleMap {
                top,
                jungle,
                mid,
                adc,
                support,
            }),
            _ => Err(missing),
        }
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        self.get(role)
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        self.get_mut(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn() {
        let map: RoleMap<usize> = RoleMap::from_fn(|r| r.index() * 10);

        assert_eq!(map[Role::Top], 0);
        assert_eq!(map[Role::Jungle], 10);
        assert_eq!(map[Role::Support], 40);
    }

    #[test]
    fn test_mutation() {
        let mut map: RoleMap<i32> = RoleMap::default();

        map[Role::Adc] = 7;
        let previous = map.set(Role::Adc, 9);

        assert_eq!(previous, 7);
        assert_eq!(map[Role::Adc], 9);
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let map: RoleMap<usize> = RoleMap::from_fn(|r| r.index());
        let roles: Vec<_> = map.iter().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn test_transpose() {
        let full: RoleMap<Option<u8>> = RoleMap::from_fn(|_| Some(1));
        assert!(full.transpose().is_ok());

        let mut partial: RoleMap<Option<u8>> = RoleMap::from_fn(|_| Some(1));
        partial[Role::Jungle] = None;
        partial[Role::Support] = None;
        assert_eq!(partial.transpose().unwrap_err(), vec![Role::Jungle, Role::Support]);
    }

    #[test]
    fn test_serialization_uses_canonical_keys() {
        let map: RoleMap<Option<u8>> = RoleMap::default();
        let json = serde_json::to_value(&map).unwrap();

        for role in Role::ALL {
            assert!(json.get(role.as_str()).unwrap().is_null());
        }

        let back: RoleMap<Option<u8>> = serde_json::from_value(json).unwrap();
        assert_eq!(map, back);
    }
}
