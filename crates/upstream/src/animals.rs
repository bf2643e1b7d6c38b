//! Abandoned-animal public registry client.
//!
//! The registry wraps its payload in a `{response:{body:{items:{item},
//! totalCount}}}` envelope where `item` may be an array, a single object, or
//! absent; [`normalize_envelope`] flattens all three into one shape.

use reqwest::Client;
use serde_json::Value;

use crate::error::UpstreamError;

pub const DEFAULT_BASE_URL: &str =
    "https://apis.data.go.kr/1543061/abandonmentPublicSrvc/abandonmentPublic";

/// One normalized page of registry records.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalPage {
    pub items: Vec<Value>,
    pub total_count: i64,
    pub page: i64,
    pub size: i64,
}

#[derive(Debug, Clone)]
pub struct AnimalRegistryClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl AnimalRegistryClient {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            service_key: service_key.into(),
        }
    }

    /// Fetch one page from the registry. One attempt, no retry.
    pub async fn fetch(&self, page: i64, size: i64) -> Result<AnimalPage, UpstreamError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("serviceKey", self.service_key.as_str()), ("_type", "json")])
            .query(&[("pageNo", page), ("numOfRows", size)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let payload: Value = resp.json().await?;
        let (items, total_count) = normalize_envelope(&payload);
        Ok(AnimalPage {
            items,
            total_count,
            page,
            size,
        })
    }
}

/// Flatten the registry envelope into `(records, totalCount)`.
///
/// A lone record arrives as a bare object rather than a one-element array;
/// `totalCount` is sometimes a numeric string.
pub fn normalize_envelope(payload: &Value) -> (Vec<Value>, i64) {
    let body = payload.pointer("/response/body");

    let total_count = body
        .and_then(|b| b.get("totalCount"))
        .and_then(|v| v.as_i64().or_else(|| v.as_str().and_then(|s| s.parse().ok())))
        .unwrap_or(0);

    let items = match body.and_then(|b| b.pointer("/items/item")) {
        Some(Value::Array(arr)) => arr.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![single.clone()],
    };

    (items, total_count)
}
