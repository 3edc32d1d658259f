use crate::{
    ApiClient,
    cache::keys::{LIST_TTL, USER_SUBSCRIPTIONS_PREFIX, user_subscription_list_key},
    error::Result,
    result::Ack,
};

use super::model::{UserSubscriptionPage, UserSubscriptionParams};

impl ApiClient {
    pub async fn get_user_subscriptions(
        &self,
        params: &UserSubscriptionParams,
        skip_cache: bool,
    ) -> Result<UserSubscriptionPage> {
        let suffix = params.to_query().suffix();
        self.cached_get(
            &user_subscription_list_key(&suffix),
            &format!("/subscriptionmanagement/user_subscriptions{}", suffix),
            LIST_TTL,
            skip_cache,
        )
        .await
    }

    /// Emails the subscriber a renewal reminder. Sent as a multipart form.
    pub async fn send_subscription_reminder(&self, subscription_id: &str) -> Result<Ack> {
        self.post_multipart(
            &format!("/subscriptionmanagement/send_reminder/{}", subscription_id),
            Vec::new(),
        )
        .await
    }

    pub async fn delete_user_subscription(&self, subscription_id: &str) -> Result<Ack> {
        self.mutate(
            &[USER_SUBSCRIPTIONS_PREFIX],
            self.post_multipart(
                &format!(
                    "/subscriptionmanagement/delete_user_subscription/{}",
                    subscription_id
                ),
                Vec::new(),
            ),
        )
        .await
    }
}
