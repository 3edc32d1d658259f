use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Response envelope every backend route answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiEnvelope<Value> {
    /// Reads an envelope out of an already-decoded body. Bodies that are not
    /// envelopes at all read as `status: false` with no message.
    pub fn from_value(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or(ApiEnvelope {
            status: false,
            message: None,
            data: None,
        })
    }

    /// Converts the payload into `T`, failing on `status: false`.
    pub fn into_data<T: DeserializeOwned>(self, fallback: &str) -> Result<T> {
        if !self.status {
            return Err(ClientError::backend(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        let data = self.data.unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Like [`into_data`](Self::into_data) but keeps the message alongside.
    pub fn into_ack(self, fallback: &str) -> Result<Ack> {
        if !self.status {
            return Err(ClientError::backend(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        Ok(Ack {
            message: self.message,
            data: self.data,
        })
    }
}

/// Successful mutation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ack {
    pub message: Option<String>,
    pub data: Option<Value>,
}
