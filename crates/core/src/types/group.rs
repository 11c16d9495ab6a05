//! Group name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Level at or above which a member graduates out instead of advancing.
pub const MAX_GROUP_LEVEL: u32 = 5;

/// The reserved group for administrator accounts, exempt from promotion.
pub const ADMIN_GROUP: &str = "Admin";

/// An organizational group name.
///
/// Group names are free text, but names of the form `<text> <integer>`
/// (e.g. "Team 3") are *leveled*: the trailing integer is the member's level
/// and drives the promotion batch. Names without a trailing integer are
/// valid group names that are simply exempt from promotion.
///
/// No validation happens on construction - any string is a group name.
///
/// ## Examples
///
/// ```
/// use canteen_core::GroupName;
///
/// let leveled = GroupName::new("Team 3");
/// assert_eq!(leveled.level(), Some(3));
/// assert_eq!(leveled.promoted().unwrap().as_str(), "Team 4");
///
/// let free_form = GroupName::new("General");
/// assert_eq!(free_form.level(), None);
/// assert!(free_form.promoted().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Create a group name from any string.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the group name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `GroupName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this is the reserved administrator group (exact match).
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_GROUP
    }

    /// Case-insensitive comparison against a query string.
    ///
    /// Group-scoped order queries tolerate casing differences between what
    /// the user typed and what is stored ("team A" matches "TEAM A").
    #[must_use]
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }

    /// Split a leveled group name into its base text and level.
    ///
    /// A name is leveled when it ends in whitespace followed by a run of
    /// ASCII digits, with non-empty text before the whitespace. The base
    /// keeps any whitespace beyond the single separator ("Team  3" splits
    /// into "Team " and 3). Returns `None` for free-form names.
    #[must_use]
    pub fn split_leveled(&self) -> Option<(&str, u32)> {
        let head = self.0.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = self.0.get(head.len()..)?;
        if digits.is_empty() {
            return None;
        }

        let base = head.strip_suffix(|c: char| c.is_whitespace())?;
        if base.is_empty() {
            return None;
        }

        // Saturate rather than reject absurdly large levels; they still
        // count as leveled and sit far above the graduation ceiling.
        let level = digits
            .bytes()
            .fold(0_u32, |acc, b| {
                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
            });

        Some((base, level))
    }

    /// The level of a leveled group name, or `None` for free-form names.
    #[must_use]
    pub fn level(&self) -> Option<u32> {
        self.split_leveled().map(|(_, level)| level)
    }

    /// The group name one level up, or `None` for free-form names.
    #[must_use]
    pub fn promoted(&self) -> Option<Self> {
        let (base, level) = self.split_leveled()?;
        Some(Self(format!("{base} {}", level.saturating_add(1))))
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GroupName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for GroupName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_split_leveled() {
        let group = GroupName::new("Team 3");
        assert_eq!(group.split_leveled(), Some(("Team", 3)));
    }

    #[test]
    fn test_split_leveled_multi_word_base() {
        let group = GroupName::new("Department 2");
        assert_eq!(group.split_leveled(), Some(("Department", 2)));

        let group = GroupName::new("Second Floor Office 4");
        assert_eq!(group.split_leveled(), Some(("Second Floor Office", 4)));
    }

    #[test]
    fn test_split_leveled_extra_whitespace_kept_in_base() {
        let group = GroupName::new("Team  3");
        assert_eq!(group.split_leveled(), Some(("Team ", 3)));
    }

    #[test]
    fn test_free_form_names_are_not_leveled() {
        assert_eq!(GroupName::new("General").level(), None);
        assert_eq!(GroupName::new("Team3").level(), None);
        assert_eq!(GroupName::new("3").level(), None);
        assert_eq!(GroupName::new(" 3").level(), None);
        assert_eq!(GroupName::new("Team 3a").level(), None);
        assert_eq!(GroupName::new("").level(), None);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(GroupName::new("Team 03").level(), Some(3));
    }

    #[test]
    fn test_promoted() {
        let group = GroupName::new("Team 3");
        assert_eq!(group.promoted().unwrap().as_str(), "Team 4");
    }

    #[test]
    fn test_promoted_free_form() {
        assert!(GroupName::new("General").promoted().is_none());
    }

    #[test]
    fn test_is_admin_exact_match() {
        assert!(GroupName::new("Admin").is_admin());
        assert!(!GroupName::new("admin").is_admin());
        assert!(!GroupName::new("Admins").is_admin());
    }

    #[test]
    fn test_matches_ignore_case() {
        let group = GroupName::new("team A");
        assert!(group.matches_ignore_case("TEAM A"));
        assert!(group.matches_ignore_case("team a"));
        assert!(!group.matches_ignore_case("team B"));
    }

    #[test]
    fn test_serde_transparent() {
        let group = GroupName::new("Team 1");
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, "\"Team 1\"");

        let parsed: GroupName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }
}
