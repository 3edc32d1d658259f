use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ClientError, Result};

const DEFAULT_REQUEST_ID: &str = "rid_2006";
const DEFAULT_SESSION_FILE: &str = ".rentals-admin/session.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_id: String,
    pub session_file: PathBuf,
    pub cache_ttl_secs: u64,
    pub rate_limit_window_secs: u64,
    pub rate_limit_requests: u32,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| ClientError::Config("API_BASE_URL is not set".into()))?;

        Ok(Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_id: env::var("REQUEST_ID").unwrap_or_else(|_| DEFAULT_REQUEST_ID.into()),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            cache_ttl_secs: parse_or("CACHE_TTL_SECS", 300),
            rate_limit_window_secs: parse_or("RATE_LIMIT_WINDOW", 60),
            rate_limit_requests: parse_or("RATE_LIMIT_REQUESTS", 10),
            http_timeout_secs: parse_or("HTTP_TIMEOUT_SECS", 30),
        })
    }

    /// Config pointing at `api_base_url` with every other field defaulted.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_id: DEFAULT_REQUEST_ID.into(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            cache_ttl_secs: 300,
            rate_limit_window_secs: 60,
            rate_limit_requests: 10,
            http_timeout_secs: 30,
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
