use serde::{Deserialize, Serialize};

use crate::common::id_string;
use crate::utils::QueryString;

/// A seeker's "looking for" post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyRequest {
    #[serde(deserialize_with = "id_string")]
    pub request_id: String,
    #[serde(default, deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub specific_area: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub budget_min: f64,
    #[serde(default)]
    pub budget_max: f64,
    #[serde(default)]
    pub seeker_name: String,
    #[serde(default)]
    pub seeker_phone: String,
    #[serde(default)]
    pub seeker_email: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyRequestFilter {
    pub status: Option<String>,
    pub state: Option<String>,
}

impl PropertyRequestFilter {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .opt("status", self.status.as_deref().filter(|s| !s.is_empty()))
            .opt("state", self.state.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Counters shown above the property-request table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PropertyRequestStats {
    pub total: usize,
    pub active: usize,
    pub fulfilled: usize,
    pub closed: usize,
}

impl PropertyRequestStats {
    pub fn from_requests(requests: &[PropertyRequest]) -> Self {
        requests.iter().fold(
            Self {
                total: requests.len(),
                ..Self::default()
            },
            |mut stats, r| {
                match r.status.as_str() {
                    "active" => stats.active += 1,
                    "fulfilled" => stats.fulfilled += 1,
                    "closed" => stats.closed += 1,
                    _ => {}
                }
                stats
            },
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PropertyRequestList {
    #[serde(default)]
    pub requests: Vec<PropertyRequest>,
}
