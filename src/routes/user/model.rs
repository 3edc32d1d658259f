use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Pagination, Record, id_string, opt_id_string};
use crate::session::Role;
use crate::utils::QueryString;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    #[serde(default, deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default, deserialize_with = "opt_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Active flag; some deployments send a bool, others a label.
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

impl AdminUser {
    pub fn row_id(&self) -> &str {
        match &self.id {
            Some(id) if self.user_id.is_empty() => id,
            _ => &self.user_id,
        }
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(Role::name).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
pub struct UserListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}

impl UserListParams {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .opt("page", self.page)
            .opt("limit", self.limit)
            .opt("search", self.search.as_deref())
            .opt("role", self.role.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub(super) struct UpdateRolesRequest<'a> {
    pub user_id: &'a str,
    pub roles: &'a [String],
}

#[derive(Debug, Serialize)]
pub(super) struct ToggleStatusRequest<'a> {
    pub user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}
