pub const DASHBOARD_PREFIX: &str = "dashboard:";

pub fn dashboard_stats_key() -> String {
    format!("{}stats", DASHBOARD_PREFIX)
}

/// `query` is the encoded query suffix, possibly empty.
pub fn recent_activity_key(query: &str) -> String {
    format!("{}recent_activity:{}", DASHBOARD_PREFIX, query)
}
