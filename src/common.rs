use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::QueryString;

// Shared list/pagination shapes

/// Loosely-shaped payload (detail views, stats counters).
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

/// Filters accepted by the paginated admin lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .opt("page", self.page)
            .opt("limit", self.limit)
            .opt("status", self.status.as_deref())
            .opt("search", self.search.as_deref())
    }
}

fn scalar_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Ids arrive as strings from some routes and as numbers from others.
pub fn id_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_string(value.clone()).ok_or_else(|| {
        serde::de::Error::custom(format!("expected string or number, got {}", value))
    })
}

/// Optional variant of [`id_string`]; `null` reads as absent.
pub fn opt_id_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_string(value.clone()).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("expected string or number, got {}", value))
        }),
    }
}

/// Flags come back as `true`, `1` or `"1"` depending on the route.
pub fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|v| v != 0.0)),
        Value::String(s) => match s.trim() {
            "" | "0" | "false" => Ok(false),
            "1" | "true" => Ok(true),
            other => Err(serde::de::Error::custom(format!("expected flag, got {:?}", other))),
        },
        other => Err(serde::de::Error::custom(format!("expected flag, got {}", other))),
    }
}
