//! HTTP client for the NSPD geoportal search API.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Public geoportal host.
pub const DEFAULT_BASE_URL: &str = "https://nspd.gov.ru";

const SEARCH_PATH: &str = "/api/geoportal/v2/search/geoportal";

/// One bounded attempt per request; expiry is a transport failure and
/// is never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("geoportal returned status {status}")]
    Status { status: u16 },
    #[error("geoportal request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin search client. Stateless; every call is an independent
/// round-trip with no caching.
pub struct GeoportalClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoportalClient {
    /// Build a client for the given base URL (trailing slash is
    /// stripped).
    ///
    /// Certificate verification is disabled: nspd.gov.ru serves a
    /// chain that public trust stores reject. Known trade-off.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Mozilla/5.0")
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One thematic search round-trip; returns the raw `data` payload
    /// (or `Value::Null` when the body has none).
    pub async fn search(&self, query: &str) -> Result<Value, FetchError> {
        let url = format!("{}{SEARCH_PATH}", self.base_url);
        info!(url = %url, query = %query, "querying geoportal");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("thematicSearchId", "1")])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = GeoportalClient::new("https://nspd.gov.ru/").unwrap();
        assert_eq!(client.base_url, "https://nspd.gov.ru");
    }
}
