//! Test data: typed user records, loose fixture records, and the file-backed
//! provider that loads them.

mod generate;
mod provider;

pub use generate::{random_value, RandomKind};
pub use provider::{filter_records, validate_structure, DataProvider};

use std::fmt;

use serde::{Deserialize, Serialize};

/// One loosely-typed fixture record: string keys, JSON values.
///
/// Module test data has no fixed shape, so records are validated explicitly
/// (see [`validate_structure`]) rather than deserialized into structs.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Role a user record can carry in the ERP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    User,
    Viewer,
    Manager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Administrator => write!(f, "administrator"),
            Role::User => write!(f, "user"),
            Role::Viewer => write!(f, "viewer"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// Optional profile block on a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Identity and credential record loaded from `users-<environment>.json`.
///
/// Read-only once loaded; the on-disk file is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: u32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
    pub company: String,
    pub active: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_lowercase() {
        let json = serde_json::to_string(&Role::Administrator).expect("serialize");
        assert_eq!(json, r#""administrator""#);
        let role: Role = serde_json::from_str(r#""manager""#).expect("deserialize");
        assert_eq!(role, Role::Manager);
    }

    #[test]
    fn user_data_tolerates_missing_optional_fields() {
        let user: UserData = serde_json::from_str(
            r#"{
                "id": 7,
                "username": "jdoe",
                "password": "secret",
                "email": "jdoe@example.com",
                "role": "viewer",
                "company": "Acme",
                "active": false
            }"#,
        )
        .expect("minimal user record");
        assert!(user.permissions.is_empty());
        assert!(user.profile.is_none());
    }
}
