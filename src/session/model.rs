use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ADMIN_ROLE: &str = "Admin";

/// What survives between runs: the bearer token and the signed-in user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserData {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Whatever else the login response carried.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Roles arrive either as bare names or as `{"role_name": ...}` objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Role {
    Named { role_name: String },
    Plain(String),
}

impl Role {
    pub fn name(&self) -> &str {
        match self {
            Role::Named { role_name } => role_name,
            Role::Plain(name) => name,
        }
    }
}

impl UserData {
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r.name() == ADMIN_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_role_shapes_are_understood() {
        let user: UserData = serde_json::from_value(json!({
            "name": "Ada",
            "roles": ["Landlord", {"role_name": "Admin", "role_id": 1}],
            "user_id": 9
        }))
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(user.roles[0].name(), "Landlord");
        assert_eq!(user.extra["user_id"], 9);
    }

    #[test]
    fn no_roles_is_not_admin() {
        let user: UserData = serde_json::from_value(json!({"name": "Bob"})).unwrap();
        assert!(!user.is_admin());
    }
}
