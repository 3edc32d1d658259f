use crate::{ApiClient, error::Result};

use super::model::{PropertyRequest, PropertyRequestFilter, PropertyRequestList};

impl ApiClient {
    pub async fn browse_property_requests(
        &self,
        filter: &PropertyRequestFilter,
    ) -> Result<Vec<PropertyRequest>> {
        let list: PropertyRequestList = self
            .get(&format!("/propertyrequests/browse{}", filter.to_query().suffix()))
            .await?;
        Ok(list.requests)
    }
}
