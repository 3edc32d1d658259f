pub const USERS_PREFIX: &str = "users:";

pub const USER_SUBSCRIPTIONS_PREFIX: &str = "user_subscriptions:";

pub fn user_list_key(query: &str) -> String {
    format!("{}list:{}", USERS_PREFIX, query)
}

pub fn user_details_key(user_id: &str) -> String {
    format!("{}details:{}", USERS_PREFIX, user_id)
}

pub fn user_subscription_list_key(query: &str) -> String {
    format!("{}list:{}", USER_SUBSCRIPTIONS_PREFIX, query)
}
