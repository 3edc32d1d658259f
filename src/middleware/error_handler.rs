use reqwest::StatusCode;
use serde_json::{Map, Value};
use tracing::error;

use crate::error::ClientError;

const REQUEST_FAILED: &str = "Request failed";

/// Decodes a response body, `None` when it is not JSON.
pub fn parse_body(path: &str, text: &str) -> Option<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("[API] JSON parse error for {}: {}", path, e);
            None
        }
    }
}

/// Stand-in body for responses that were not JSON.
pub fn empty_body() -> Value {
    Value::Object(Map::new())
}

/// Maps a non-2xx response onto a backend error, preferring its `message`.
pub fn check_status(path: &str, status: StatusCode, body: &Value) -> Result<(), ClientError> {
    if status.is_success() {
        return Ok(());
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(REQUEST_FAILED)
        .to_string();

    if status.is_server_error() {
        error!("Server error occurred - Path: {}, Status: {}, Body: {}", path, status, body);
    } else {
        tracing::warn!("[API] {} answered {}: {}", path, status, message);
    }

    Err(ClientError::Backend {
        status: Some(status.as_u16()),
        message,
    })
}
