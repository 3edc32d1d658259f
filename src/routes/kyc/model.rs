use serde::{Deserialize, Serialize};

use crate::common::{Pagination, Record, id_string, opt_id_string};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KycRequest {
    #[serde(default, deserialize_with = "id_string")]
    pub kyc_id: String,
    /// Older rows carry a bare `id` instead of `kyc_id`.
    #[serde(default, deserialize_with = "opt_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

impl KycRequest {
    /// The id to pass to approve/reject/delete.
    pub fn row_id(&self) -> &str {
        match &self.id {
            Some(id) if self.kyc_id.is_empty() => id,
            _ => &self.kyc_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KycPage {
    #[serde(default, alias = "requests")]
    pub kyc_requests: Vec<KycRequest>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Serialize)]
pub(super) struct KycAction<'a> {
    pub kyc_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<&'a str>,
}

/// Body shape of the older `/kyc/admin/*` routes.
#[derive(Debug, Serialize)]
pub(super) struct LegacyKycAction<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}
