use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const BOOST_TIERS_KEY: &str = "boost_tiers";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Setting {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingList {
    #[serde(default)]
    pub settings: Vec<Setting>,
}

impl SettingList {
    pub fn find(&self, key: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.key == key)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSetting {
    pub key: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the `boost_tiers` setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoostTier {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub duration: u32,
    pub price: f64,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentCategory {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EquipmentCategoryList {
    #[serde(default)]
    pub categories: Vec<EquipmentCategory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEquipmentCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct UpdateSettingRequest<'a> {
    pub key: &'a str,
    pub value: &'a Value,
}

#[derive(Debug, Serialize)]
pub(super) struct UpdateSettingsRequest<'a> {
    pub settings: &'a serde_json::Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoryIdRequest {
    pub id: i64,
}
