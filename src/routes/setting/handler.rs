use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    ApiClient,
    cache::keys::{
        DETAIL_TTL, EQUIPMENT_PREFIX, SETTINGS_PREFIX, equipment_categories_key,
        settings_all_key, settings_grouped_key,
    },
    common::Record,
    error::Result,
    result::Ack,
    utils::QueryString,
};

use super::model::{
    BOOST_TIERS_KEY, BoostTier, CategoryIdRequest, EquipmentCategory, EquipmentCategoryList,
    NewEquipmentCategory, NewSetting, SettingList, UpdateSettingRequest, UpdateSettingsRequest,
};

impl ApiClient {
    pub async fn get_settings(&self, group: Option<&str>, skip_cache: bool) -> Result<SettingList> {
        let suffix = QueryString::new().opt("group", group).suffix();
        self.cached_get(
            &settings_all_key(group),
            &format!("/settings/all{}", suffix),
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_settings_grouped(&self, skip_cache: bool) -> Result<Record> {
        self.cached_get(&settings_grouped_key(), "/settings/grouped", DETAIL_TTL, skip_cache)
            .await
    }

    pub async fn update_setting(&self, key: &str, value: &Value) -> Result<Ack> {
        let body = UpdateSettingRequest { key, value };
        self.mutate(&[SETTINGS_PREFIX], self.post_json("/settings/update", body))
            .await
    }

    pub async fn update_multiple_settings(&self, settings: &Map<String, Value>) -> Result<Ack> {
        let body = UpdateSettingsRequest { settings };
        self.mutate(
            &[SETTINGS_PREFIX],
            self.post_json("/settings/updateMultiple", body),
        )
        .await
    }

    pub async fn create_setting(&self, setting: &NewSetting) -> Result<Ack> {
        self.mutate(&[SETTINGS_PREFIX], self.post_json("/settings/create", setting))
            .await
    }

    pub async fn delete_setting(&self, key: &str) -> Result<Ack> {
        self.mutate(&[SETTINGS_PREFIX], self.delete(&format!("/settings/{}", key)))
            .await
    }

    /// Boost tiers stored in the `boosts` settings group, keyed by tier id.
    pub async fn get_boost_tiers(&self, skip_cache: bool) -> Result<BTreeMap<String, BoostTier>> {
        let settings = self.get_settings(Some("boosts"), skip_cache).await?;
        let tiers = match settings.find(BOOST_TIERS_KEY) {
            Some(setting) if !setting.value.is_null() => {
                serde_json::from_value(setting.value.clone())?
            }
            _ => BTreeMap::new(),
        };
        Ok(tiers)
    }

    pub async fn save_boost_tiers(&self, tiers: &BTreeMap<String, BoostTier>) -> Result<Ack> {
        let value = serde_json::to_value(tiers)?;
        self.update_setting(BOOST_TIERS_KEY, &value).await
    }

    pub async fn get_equipment_categories(
        &self,
        skip_cache: bool,
    ) -> Result<Vec<EquipmentCategory>> {
        let list: EquipmentCategoryList = self
            .cached_get(
                &equipment_categories_key(),
                "/settings/equipmentCategories",
                DETAIL_TTL,
                skip_cache,
            )
            .await?;
        Ok(list.categories)
    }

    pub async fn create_equipment_category(&self, category: &NewEquipmentCategory) -> Result<Ack> {
        self.mutate(
            &[EQUIPMENT_PREFIX],
            self.post_json("/settings/createEquipmentCategory", category),
        )
        .await
    }

    pub async fn update_equipment_category(&self, category: &EquipmentCategory) -> Result<Ack> {
        self.mutate(
            &[EQUIPMENT_PREFIX],
            self.post_json("/settings/updateEquipmentCategory", category),
        )
        .await
    }

    pub async fn toggle_equipment_category(&self, id: i64) -> Result<Ack> {
        self.mutate(
            &[EQUIPMENT_PREFIX],
            self.post_json("/settings/toggleEquipmentCategory", CategoryIdRequest { id }),
        )
        .await
    }

    pub async fn delete_equipment_category(&self, id: i64) -> Result<Ack> {
        self.mutate(
            &[EQUIPMENT_PREFIX],
            self.delete(&format!("/settings/deleteEquipmentCategory/{}", id)),
        )
        .await
    }
}
