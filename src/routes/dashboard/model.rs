use crate::utils::QueryString;

/// Filters for the recent-activity feed.
#[derive(Debug, Clone, Default)]
pub struct ActivityParams {
    pub filter: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ActivityParams {
    pub fn to_query(&self) -> QueryString {
        QueryString::new()
            .opt("filter", self.filter.as_deref())
            .opt("page", self.page)
            .opt("limit", self.limit)
    }
}
