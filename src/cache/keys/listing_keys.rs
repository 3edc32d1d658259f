pub const LISTINGS_PREFIX: &str = "listings:";

pub fn listing_list_key(query: &str) -> String {
    format!("{}list:{}", LISTINGS_PREFIX, query)
}

pub fn listing_details_key(listing_id: &str) -> String {
    format!("{}details:{}", LISTINGS_PREFIX, listing_id)
}

pub fn listing_stats_key() -> String {
    format!("{}stats", LISTINGS_PREFIX)
}
