use serde_json::Value;

use crate::{
    ApiClient,
    cache::keys::{ACTIVITY_TTL, DETAIL_TTL, dashboard_stats_key, recent_activity_key},
    common::Record,
    error::Result,
};

use super::model::ActivityParams;

impl ApiClient {
    pub async fn get_dashboard_stats(&self, skip_cache: bool) -> Result<Record> {
        self.cached_get(&dashboard_stats_key(), "/dashboard/stats", DETAIL_TTL, skip_cache)
            .await
    }

    pub async fn get_recent_activities(
        &self,
        params: &ActivityParams,
        skip_cache: bool,
    ) -> Result<Value> {
        let suffix = params.to_query().suffix();
        self.cached_get(
            &recent_activity_key(&suffix),
            &format!("/dashboard/recentActivity{}", suffix),
            ACTIVITY_TTL,
            skip_cache,
        )
        .await
    }
}
