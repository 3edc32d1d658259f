use serde::{Deserialize, Serialize};

use crate::common::id_string;

/// A company's application to list as a verified agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyAgentRequest {
    pub id: i64,
    #[serde(default, deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub cac_number: String,
    #[serde(default)]
    pub office_address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cac_certificate_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl CompanyAgentRequest {
    /// Absolute link to the uploaded CAC certificate.
    pub fn certificate_url(&self, api_base_url: &str) -> Option<String> {
        self.cac_certificate_url
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", api_base_url, p))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl AgentRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRequestStatus::Pending => "pending",
            AgentRequestStatus::Approved => "approved",
            AgentRequestStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AgentRequestList {
    #[serde(default)]
    pub requests: Vec<CompanyAgentRequest>,
}

#[derive(Debug, Serialize)]
pub(super) struct UpdateStatusRequest<'a> {
    pub request_id: i64,
    pub status: AgentRequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<&'a str>,
}
