use serde::{Deserialize, Serialize};

use crate::common::{Pagination, flag, id_string, opt_id_string};
use crate::utils::QueryString;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSubscription {
    #[serde(deserialize_with = "id_string")]
    pub subscription_id: String,
    #[serde(deserialize_with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default, deserialize_with = "opt_id_string")]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub plan_name: String,
    /// `active`, `pending`, `expired` or `cancelled`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub billing_cycle: String,
    /// Decimal amounts come back as strings or numbers; kept as text.
    #[serde(default, deserialize_with = "id_string")]
    pub amount: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub auto_renew: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserSubscriptionPage {
    #[serde(default)]
    pub subscriptions: Vec<UserSubscription>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default)]
pub struct UserSubscriptionParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub expiring_within_days: Option<u32>,
}

impl UserSubscriptionParams {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .opt("page", self.page)
            .opt("limit", self.limit)
            .opt("status", self.status.as_deref())
            .opt("search", self.search.as_deref())
            .opt("expiring_within_days", self.expiring_within_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loosely_typed_rows_load() {
        let page: UserSubscriptionPage = serde_json::from_value(json!({
            "subscriptions": [
                {"subscription_id": 1, "user_id": 2, "plan_id": 3, "amount": 5000, "auto_renew": "1"},
                {"subscription_id": "s2", "user_id": "u2", "plan_id": null, "amount": "7500.00", "auto_renew": 0}
            ]
        }))
        .unwrap();
        let [first, second] = &page.subscriptions[..] else {
            panic!("expected two rows");
        };
        assert_eq!(first.plan_id.as_deref(), Some("3"));
        assert_eq!(first.amount, "5000");
        assert!(first.auto_renew);
        assert_eq!(second.plan_id, None);
        assert_eq!(second.amount, "7500.00");
        assert!(!second.auto_renew);
    }

    #[test]
    fn cached_copy_reads_back() {
        let row: UserSubscription = serde_json::from_value(json!({
            "subscription_id": 1, "user_id": 2, "amount": 12.5, "auto_renew": true
        }))
        .unwrap();
        let again: UserSubscription =
            serde_json::from_value(serde_json::to_value(&row).unwrap()).unwrap();
        assert_eq!(again, row);
    }
}
