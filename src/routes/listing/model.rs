use serde::{Deserialize, Serialize};

use crate::common::{Pagination, Record, id_string, opt_id_string};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    #[serde(default, deserialize_with = "id_string")]
    pub listing_id: String,
    #[serde(default, deserialize_with = "opt_id_string", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(flatten)]
    pub extra: Record,
}

impl Listing {
    pub fn row_id(&self) -> &str {
        match &self.id {
            Some(id) if self.listing_id.is_empty() => id,
            _ => &self.listing_id,
        }
    }

    /// Public URL of the cover image, or the placeholder.
    pub fn cover_image_url(&self, api_base_url: &str) -> String {
        crate::utils::image_url(api_base_url, self.images.first().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingPage {
    #[serde(default)]
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Serialize)]
pub(super) struct ListingAction<'a> {
    pub listing_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
}

impl<'a> ListingAction<'a> {
    pub fn new(listing_id: &'a str) -> Self {
        Self {
            listing_id,
            rejection_reason: None,
            status: None,
        }
    }
}
