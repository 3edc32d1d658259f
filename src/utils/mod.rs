use std::fmt::Display;

use url::form_urlencoded;

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Ordered, form-urlencoded query parameters. Absent values are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `?a=1&b=2`, or an empty string when there are no parameters.
    pub fn suffix(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        format!("?{}", encoded)
    }
}

/// Appends `key=value` to a path that may already carry a query string.
pub fn append_query_param(path: &str, key: &str, value: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    format!("{}{}{}", path, separator, encoded)
}

/// Public URL for an uploaded image path.
pub fn image_url(api_base_url: &str, image_path: Option<&str>) -> String {
    let path = match image_path {
        Some(p) if !p.is_empty() => p,
        _ => return PLACEHOLDER_IMAGE.to_string(),
    };
    if path.starts_with("http") {
        return path.to_string();
    }

    let base = api_base_url.trim_end_matches('/');
    let base = base.strip_suffix("/public").unwrap_or(base);
    let clean = path.strip_prefix('/').unwrap_or(path);
    format!("{}/public/{}", base, clean)
}
