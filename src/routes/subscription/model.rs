use serde::{Deserialize, Serialize};

use crate::common::{Record, id_string};

/// A subscription plan as edited in the plans screen. `limits` holds the
/// numeric quotas (`max_listings`, `boosts_per_month`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionPlan {
    #[serde(deserialize_with = "id_string")]
    pub plan_id: String,
    pub plan_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price_monthly: f64,
    #[serde(default)]
    pub price_yearly: f64,
    #[serde(default)]
    pub limits: Record,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanList {
    #[serde(default)]
    pub plans: Vec<SubscriptionPlan>,
}
