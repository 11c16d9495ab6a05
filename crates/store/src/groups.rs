//! Group registry operations.
//!
//! The registry is an explicit list of group names persisted under its own
//! document key, independent of the entity snapshot. It is not a foreign
//! key: users reference groups by free-text name, so removing a registry
//! entry may leave users whose group no longer appears - tolerated, never
//! an error.

use std::collections::BTreeSet;

use crate::persist::KEY_AVAILABLE_GROUPS;
use crate::store::Store;

/// Built-in fallback shown when neither an explicit registry nor any user
/// groups exist yet.
pub const DEFAULT_GROUPS: &[&str] = &[
    "Team A",
    "Team B",
    "Team C",
    "Team D",
    "Team E",
    "Office 1",
    "Office 2",
    "Office 3",
    "Department 1",
    "Department 2",
    "Department 3",
];

impl Store {
    /// The groups available for registration.
    ///
    /// Resolution order: the explicit registry if non-empty, else the
    /// distinct sorted group names of existing users (excluding the
    /// administrator group), else [`DEFAULT_GROUPS`]. Never fails and is
    /// deterministic for a given store state.
    #[must_use]
    pub fn available_groups(&self) -> Vec<String> {
        if !self.available_groups.is_empty() {
            return self.available_groups.clone();
        }

        let derived: BTreeSet<String> = self
            .users()
            .into_iter()
            .filter(|user| !user.group_name.is_admin())
            .map(|user| user.group_name.into_inner())
            .filter(|name| !name.is_empty())
            .collect();

        if derived.is_empty() {
            return DEFAULT_GROUPS.iter().map(ToString::to_string).collect();
        }

        derived.into_iter().collect()
    }

    /// Replace the registry wholesale with `groups`, sorted.
    ///
    /// No check is made that removed names are unused - callers are
    /// expected to pre-check via [`Store::users`] and block removal while
    /// members still reference a group.
    pub fn update_available_groups(&mut self, mut groups: Vec<String>) -> Vec<String> {
        groups.sort();
        self.available_groups = groups;

        if let Err(error) = self.data().save(KEY_AVAILABLE_GROUPS, &self.available_groups) {
            tracing::error!("failed to persist group registry: {error}");
        }

        self.available_groups.clone()
    }
}
