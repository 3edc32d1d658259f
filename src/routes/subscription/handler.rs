use crate::{
    ApiClient,
    cache::keys::{
        DETAIL_TTL, SUBSCRIPTIONS_PREFIX, subscription_details_key, subscription_list_key,
    },
    common::Record,
    error::Result,
    result::Ack,
};

use super::model::{PlanList, SubscriptionPlan};

impl ApiClient {
    pub async fn get_subscription_plans(&self, skip_cache: bool) -> Result<Vec<SubscriptionPlan>> {
        let list: PlanList = self
            .cached_get(
                &subscription_list_key(),
                "/subscriptionmanagement/list",
                DETAIL_TTL,
                skip_cache,
            )
            .await?;
        Ok(list.plans)
    }

    pub async fn get_subscription_details(&self, plan_id: &str, skip_cache: bool) -> Result<Record> {
        self.cached_get(
            &subscription_details_key(plan_id),
            &format!("/subscriptionmanagement/details/{}", plan_id),
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn create_subscription_plan(&self, plan: &SubscriptionPlan) -> Result<Ack> {
        self.mutate(
            &[SUBSCRIPTIONS_PREFIX],
            self.post_json("/subscriptionmanagement/create", plan),
        )
        .await
    }

    pub async fn update_subscription_plan(&self, plan: &SubscriptionPlan) -> Result<Ack> {
        self.mutate(
            &[SUBSCRIPTIONS_PREFIX],
            self.post_json("/subscriptionmanagement/update", plan),
        )
        .await
    }

    pub async fn delete_subscription_plan(&self, plan_id: &str) -> Result<Ack> {
        self.mutate(
            &[SUBSCRIPTIONS_PREFIX],
            self.delete(&format!("/subscriptionmanagement/delete/{}", plan_id)),
        )
        .await
    }
}
