use crate::{
    ApiClient, client::require_reason, error::Result, result::Ack, utils::QueryString,
};

use super::model::{AgentRequestList, AgentRequestStatus, CompanyAgentRequest, UpdateStatusRequest};

impl ApiClient {
    /// Agent applications, optionally narrowed to one status. Never cached.
    pub async fn get_company_agent_requests(
        &self,
        status: Option<AgentRequestStatus>,
    ) -> Result<Vec<CompanyAgentRequest>> {
        let suffix = QueryString::new()
            .opt("status", status.map(|s| s.as_str()))
            .suffix();
        let list: AgentRequestList = self
            .get(&format!("/companyagents/getAllRequests{}", suffix))
            .await?;
        Ok(list.requests)
    }

    pub async fn approve_company_agent(&self, request_id: i64) -> Result<Ack> {
        let body = UpdateStatusRequest {
            request_id,
            status: AgentRequestStatus::Approved,
            rejection_reason: None,
        };
        self.post_json("/companyagents/updateStatus", body).await
    }

    pub async fn reject_company_agent(&self, request_id: i64, reason: &str) -> Result<Ack> {
        let body = UpdateStatusRequest {
            request_id,
            status: AgentRequestStatus::Rejected,
            rejection_reason: Some(require_reason(reason)?),
        };
        self.post_json("/companyagents/updateStatus", body).await
    }
}
