/// Cache key builders, one file per endpoint family.
///
/// Every family shares a prefix so a mutation can drop the whole family with
/// a single `clear_by_prefix`.
use std::time::Duration;

pub mod dashboard_keys;
pub mod kyc_keys;
pub mod listing_keys;
pub mod setting_keys;
pub mod subscription_keys;
pub mod user_keys;

pub use dashboard_keys::{DASHBOARD_PREFIX, dashboard_stats_key, recent_activity_key};
pub use kyc_keys::{KYC_PREFIX, kyc_details_key, kyc_list_key, kyc_stats_key};
pub use listing_keys::{LISTINGS_PREFIX, listing_details_key, listing_list_key, listing_stats_key};
pub use setting_keys::{
    EQUIPMENT_PREFIX, SETTINGS_PREFIX, equipment_categories_key, settings_all_key,
    settings_grouped_key,
};
pub use subscription_keys::{SUBSCRIPTIONS_PREFIX, subscription_details_key, subscription_list_key};
pub use user_keys::{
    USER_SUBSCRIPTIONS_PREFIX, USERS_PREFIX, user_details_key, user_list_key,
    user_subscription_list_key,
};

/// Paginated lists go stale fastest.
pub const LIST_TTL: Duration = Duration::from_secs(2 * 60);

pub const ACTIVITY_TTL: Duration = Duration::from_secs(60);

/// Details, stats and settings.
pub const DETAIL_TTL: Duration = Duration::from_secs(5 * 60);
