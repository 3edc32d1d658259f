pub const SETTINGS_PREFIX: &str = "setting:";

pub const EQUIPMENT_PREFIX: &str = "equipment:";

/// `setting:all`, or `setting:all:<group>` when filtered by group.
pub fn settings_all_key(group: Option<&str>) -> String {
    match group {
        Some(group) => format!("{}all:{}", SETTINGS_PREFIX, group),
        None => format!("{}all", SETTINGS_PREFIX),
    }
}

pub fn settings_grouped_key() -> String {
    format!("{}grouped", SETTINGS_PREFIX)
}

pub fn equipment_categories_key() -> String {
    format!("{}categories", EQUIPMENT_PREFIX)
}
