use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    cache::ApiCache,
    config::Config,
    error::{ClientError, Result},
    middleware::{attach_request_id, check_status, empty_body, parse_body, with_bearer},
    result::{Ack, ApiEnvelope},
    session::Session,
};

const LOAD_FAILED: &str = "Failed to load data";
const SAVE_FAILED: &str = "Failed to save changes";

/// Request payload before the correlation id is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Text fields sent as `multipart/form-data`.
    Multipart(Vec<(String, String)>),
}

/// Admin API client. Cheap to clone; clones share the session and cache.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<Config>,
    session: Arc<Session>,
    cache: Arc<ApiCache>,
}

impl ApiClient {
    pub fn new(config: Config, session: Arc<Session>, cache: Arc<ApiCache>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
            cache,
        })
    }

    /// Client with a fresh cache sized from `config`.
    pub fn with_session(config: Config, session: Arc<Session>) -> Result<Self> {
        let cache = Arc::new(ApiCache::from_config(&config));
        Self::new(config, session, cache)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cache(&self) -> &ApiCache {
        &self.cache
    }

    /// Sends one request and returns the decoded body.
    ///
    /// Non-2xx answers become [`ClientError::Backend`]; a 2xx body that is
    /// not JSON is a [`ClientError::Decode`].
    pub async fn request(&self, method: Method, path: &str, body: RequestBody) -> Result<Value> {
        let (path, body) = attach_request_id(&method, path, body, &self.config.request_id);
        let url = format!("{}{}", self.config.api_base_url, path);
        tracing::info!("[API] {} {}", method, url);

        let builder = with_bearer(self.http.request(method, &url), &self.session).await;
        let builder = match body {
            RequestBody::Empty => {
                builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            }
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value));
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        tracing::info!("[API] Response status: {}", status);

        let text = response.text().await?;
        tracing::debug!("[API] Raw response for {}: {}", path, text);
        let Some(data) = parse_body(&path, &text) else {
            check_status(&path, status, &empty_body())?;
            return Err(ClientError::Decode(format!("{} returned a non-JSON body", path)));
        };
        check_status(&path, status, &data)?;
        Ok(data)
    }

    pub async fn envelope(&self, method: Method, path: &str, body: RequestBody) -> Result<ApiEnvelope> {
        let data = self.request(method, path, body).await?;
        Ok(ApiEnvelope::from_value(data))
    }

    /// GET whose envelope `data` decodes into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.envelope(Method::GET, path, RequestBody::Empty)
            .await?
            .into_data(LOAD_FAILED)
    }

    /// GET served through the cache under `key`.
    pub async fn cached_get<T>(
        &self,
        key: &str,
        path: &str,
        ttl: Duration,
        skip_cache: bool,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.cache
            .cached_request(key, || self.get::<T>(path), Some(ttl), skip_cache)
            .await
    }

    pub async fn post_json(&self, path: &str, body: impl Serialize) -> Result<Ack> {
        let body = serde_json::to_value(body)?;
        self.envelope(Method::POST, path, RequestBody::Json(body))
            .await?
            .into_ack(SAVE_FAILED)
    }

    pub async fn post_multipart(&self, path: &str, fields: Vec<(String, String)>) -> Result<Ack> {
        self.envelope(Method::POST, path, RequestBody::Multipart(fields))
            .await?
            .into_ack(SAVE_FAILED)
    }

    pub async fn delete(&self, path: &str) -> Result<Ack> {
        self.envelope(Method::DELETE, path, RequestBody::Empty)
            .await?
            .into_ack(SAVE_FAILED)
    }

    /// Runs a mutation and, if it succeeded, drops the listed cache families.
    pub(crate) async fn mutate<F>(&self, families: &[&str], call: F) -> Result<Ack>
    where
        F: std::future::Future<Output = Result<Ack>>,
    {
        let ack = call.await?;
        self.cache.invalidate(families);
        Ok(ack)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.config.api_base_url)
            .field("cached_entries", &self.cache.len())
            .finish()
    }
}

/// Rejects empty or whitespace-only reasons before they reach the backend.
pub(crate) fn require_reason(reason: &str) -> Result<&str> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(ClientError::Validation(
            "Please provide a rejection reason".into(),
        ));
    }
    Ok(trimmed)
}
