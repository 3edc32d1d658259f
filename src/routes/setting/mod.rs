mod handler;
mod model;

pub use model::{
    BOOST_TIERS_KEY, BoostTier, EquipmentCategory, EquipmentCategoryList, NewEquipmentCategory,
    NewSetting, Setting, SettingList,
};
