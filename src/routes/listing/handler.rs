use crate::{
    ApiClient,
    cache::keys::{
        DETAIL_TTL, LIST_TTL, LISTINGS_PREFIX, listing_details_key, listing_list_key,
        listing_stats_key,
    },
    client::require_reason,
    common::{ListParams, Record},
    error::Result,
    result::Ack,
};

use super::model::{ListingAction, ListingPage};

impl ApiClient {
    pub async fn get_listings(&self, params: &ListParams, skip_cache: bool) -> Result<ListingPage> {
        let suffix = params.to_query().suffix();
        self.cached_get(
            &listing_list_key(&suffix),
            &format!("/listingmanagement/list{}", suffix),
            LIST_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_listing_details(&self, listing_id: &str, skip_cache: bool) -> Result<Record> {
        self.cached_get(
            &listing_details_key(listing_id),
            &format!("/listingmanagement/details/{}", listing_id),
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn get_listing_stats(&self, skip_cache: bool) -> Result<Record> {
        self.cached_get(
            &listing_stats_key(),
            "/listingmanagement/stats",
            DETAIL_TTL,
            skip_cache,
        )
        .await
    }

    pub async fn approve_listing(&self, listing_id: &str) -> Result<Ack> {
        self.mutate(
            &[LISTINGS_PREFIX],
            self.post_json("/listingmanagement/approve", ListingAction::new(listing_id)),
        )
        .await
    }

    pub async fn reject_listing(&self, listing_id: &str, rejection_reason: &str) -> Result<Ack> {
        let body = ListingAction {
            rejection_reason: Some(require_reason(rejection_reason)?),
            ..ListingAction::new(listing_id)
        };
        self.mutate(&[LISTINGS_PREFIX], self.post_json("/listingmanagement/reject", body))
            .await
    }

    pub async fn update_listing_status(&self, listing_id: &str, status: &str) -> Result<Ack> {
        let body = ListingAction {
            status: Some(status),
            ..ListingAction::new(listing_id)
        };
        self.mutate(
            &[LISTINGS_PREFIX],
            self.post_json("/listingmanagement/updateStatus", body),
        )
        .await
    }

    pub async fn delete_listing(&self, listing_id: &str) -> Result<Ack> {
        self.mutate(
            &[LISTINGS_PREFIX],
            self.delete(&format!("/listingmanagement/delete/{}", listing_id)),
        )
        .await
    }
}
