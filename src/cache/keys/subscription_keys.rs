/// Subscription plans. User subscriptions live under their own prefix in
/// `user_keys` so plan edits do not drop them.
pub const SUBSCRIPTIONS_PREFIX: &str = "subscriptions:";

pub fn subscription_list_key() -> String {
    format!("{}list", SUBSCRIPTIONS_PREFIX)
}

pub fn subscription_details_key(plan_id: &str) -> String {
    format!("{}details:{}", SUBSCRIPTIONS_PREFIX, plan_id)
}
