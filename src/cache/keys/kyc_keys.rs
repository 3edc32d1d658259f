pub const KYC_PREFIX: &str = "kyc:";

pub fn kyc_list_key(query: &str) -> String {
    format!("{}list:{}", KYC_PREFIX, query)
}

pub fn kyc_details_key(kyc_id: &str) -> String {
    format!("{}details:{}", KYC_PREFIX, kyc_id)
}

pub fn kyc_stats_key() -> String {
    format!("{}stats", KYC_PREFIX)
}
