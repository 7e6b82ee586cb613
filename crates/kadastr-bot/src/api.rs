//! Client for the kadastr HTTP API, with the status classification
//! the chat layer needs to pick a reply.

use std::time::Duration;

use kadastr_core::CadastreRecord;
use serde::Deserialize;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400: the server's own detail message is shown to the user.
    #[error("{0}")]
    BadRequest(String),
    #[error("объект не найден")]
    NotFound,
    /// Any other non-success status.
    #[error("API вернул статус {0}")]
    Status(u16),
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One API round-trip for the given candidate number.
    pub async fn fetch(&self, number: &str) -> Result<CadastreRecord, ApiError> {
        let url = format!("{}/cadastre/{}", self.base_url, number);
        let response = self.client.get(&url).send().await?;

        match response.status().as_u16() {
            200 => Ok(response.json().await?),
            400 => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.detail)
                    .unwrap_or_else(|| "Неверный формат.".to_string());
                Err(ApiError::BadRequest(detail))
            }
            404 => Err(ApiError::NotFound),
            status => Err(ApiError::Status(status)),
        }
    }
}
