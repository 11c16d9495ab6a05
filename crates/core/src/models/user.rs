//! User entity and its insert/patch companions.

use serde::{Deserialize, Serialize};

use crate::types::{GroupName, UserId};

/// A registered user.
///
/// The `password` field is an opaque credential blob produced by the
/// authentication layer; the store never inspects or derives it. Callers
/// must strip it before exposing a user record externally.
///
/// `Debug` is implemented manually to redact the credential blob.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID. Freed by deletion and eligible for reuse.
    pub id: UserId,
    /// Login name, unique across users (enforced by callers at create time).
    pub username: String,
    /// Opaque credential blob.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Organizational group. Free text; leveled names drive promotion.
    pub group_name: GroupName,
    /// Contact email address.
    pub email: String,
    /// Whether the user coordinates their group's orders.
    #[serde(default)]
    pub is_coordinator: bool,
    /// Whether the user has full administrative access.
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the user may manage other user accounts.
    #[serde(default)]
    pub is_user_admin: bool,
}

impl User {
    /// Apply a partial update, overwriting only the fields the patch carries.
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch {
            username,
            password,
            first_name,
            last_name,
            group_name,
            email,
            is_coordinator,
            is_admin,
            is_user_admin,
        } = patch;

        if let Some(username) = username {
            self.username = username;
        }
        if let Some(password) = password {
            self.password = password;
        }
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(group_name) = group_name {
            self.group_name = group_name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(is_coordinator) = is_coordinator {
            self.is_coordinator = is_coordinator;
        }
        if let Some(is_admin) = is_admin {
            self.is_admin = is_admin;
        }
        if let Some(is_user_admin) = is_user_admin {
            self.is_user_admin = is_user_admin;
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("group_name", &self.group_name)
            .field("email", &self.email)
            .field("is_coordinator", &self.is_coordinator)
            .field("is_admin", &self.is_admin)
            .field("is_user_admin", &self.is_user_admin)
            .finish()
    }
}

/// Data for creating a user. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub group_name: GroupName,
    pub email: String,
    #[serde(default)]
    pub is_coordinator: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_user_admin: bool,
}

/// Partial user update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group_name: Option<GroupName>,
    pub email: Option<String>,
    pub is_coordinator: Option<bool>,
    pub is_admin: Option<bool>,
    pub is_user_admin: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new(1),
            username: "mrossi".to_owned(),
            password: "blob".to_owned(),
            first_name: "Maria".to_owned(),
            last_name: "Rossi".to_owned(),
            group_name: GroupName::new("Team 2"),
            email: "maria@example.com".to_owned(),
            is_coordinator: false,
            is_admin: false,
            is_user_admin: false,
        }
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut user = sample_user();
        user.apply(UserPatch {
            email: Some("new@example.com".to_owned()),
            is_coordinator: Some(true),
            ..UserPatch::default()
        });

        assert_eq!(user.email, "new@example.com");
        assert!(user.is_coordinator);
        // Untouched fields survive
        assert_eq!(user.username, "mrossi");
        assert_eq!(user.group_name.as_str(), "Team 2");
    }

    #[test]
    fn test_apply_overwrites_with_empty_string() {
        let mut user = sample_user();
        user.apply(UserPatch {
            last_name: Some(String::new()),
            ..UserPatch::default()
        });

        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = sample_user();
        let debug_output = format!("{user:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("blob"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("isUserAdmin").is_some());
        assert!(json.get("first_name").is_none());
    }
}
