use serde_json::Value;

use crate::{
    ApiClient,
    cache::keys::{DETAIL_TTL, KYC_PREFIX, LIST_TTL, kyc_details_key, kyc_list_key, kyc_stats_key},
    client::require_reason,
    common::{ListParams, Record},
    error::Result,
    result::Ack,
    utils::QueryString,
};

use super::model::{KycAction, KycPage, LegacyKycAction};

impl ApiClient {
    pub async fn get_kyc_requests(&self, params: &ListParams, skip_cache: bool) -> Result<KycPage> {
        let suffix = params.to_query().suffix();
        self.cached_get(
            &kyc_list_key(&suffix),
            &format!("/kycmanagement/list{}", suffix),
            LIST_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_kyc_details(&self, kyc_id: &str, skip_cache: bool) -> Result<Record> {
        self.cached_get(
            &kyc_details_key(kyc_id),
            &format!("/kycmanagement/details/{}", kyc_id),
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_kyc_stats(&self, skip_cache: bool) -> Result<Record> {
        self.cached_get(&kyc_stats_key(), "/kycmanagement/stats", DETAIL_TTL, skip_cache)
            .await
    }

    pub async fn approve_kyc(&self, kyc_id: &str) -> Result<Ack> {
        let body = KycAction {
            kyc_id,
            rejection_reason: None,
        };
        self.mutate(&[KYC_PREFIX], self.post_json("/kycmanagement/approve", body))
            .await
    }

    pub async fn reject_kyc(&self, kyc_id: &str, rejection_reason: &str) -> Result<Ack> {
        let body = KycAction {
            kyc_id,
            rejection_reason: Some(require_reason(rejection_reason)?),
        };
        self.mutate(&[KYC_PREFIX], self.post_json("/kycmanagement/reject", body))
            .await
    }

    pub async fn delete_kyc(&self, kyc_id: &str) -> Result<Ack> {
        self.mutate(
            &[KYC_PREFIX],
            self.delete(&format!("/kycmanagement/delete/{}", kyc_id)),
        )
        .await
    }

    /// Uncached list from the older `/kyc/admin` routes.
    pub async fn legacy_kyc_list(&self, query: &QueryString) -> Result<Value> {
        self.get(&format!("/kyc/admin/list{}", query.suffix())).await
    }

    pub async fn legacy_kyc_approve(&self, id: &str) -> Result<Ack> {
        let body = LegacyKycAction { id, reason: None };
        self.mutate(&[KYC_PREFIX], self.post_json("/kyc/admin/approve", body))
            .await
    }

    pub async fn legacy_kyc_reject(&self, id: &str, reason: &str) -> Result<Ack> {
        let body = LegacyKycAction {
            id,
            reason: Some(require_reason(reason)?),
        };
        self.mutate(&[KYC_PREFIX], self.post_json("/kyc/admin/reject", body))
            .await
    }
}
