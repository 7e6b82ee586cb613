//! Lookup orchestration: validate, fetch, normalize.

use kadastr_core::{CadastreNumber, CadastreRecord, InvalidFormat, normalize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::geoportal::{FetchError, GeoportalClient};

/// Terminal failure modes of a single lookup. None is retried.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The candidate never left the process; no network call was made.
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormat),
    /// Upstream answered but had no matching feature.
    #[error("объект не найден")]
    NotFound,
    /// Upstream reachable but returned a failure status.
    #[error("upstream returned status {status}")]
    Upstream { status: u16 },
    /// Connection, timeout, or body-decode failure.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status { status } => LookupError::Upstream { status },
            FetchError::Http(e) => LookupError::Transport(e.to_string()),
        }
    }
}

/// Stateless lookup pipeline over a [`GeoportalClient`].
pub struct CadastreService {
    client: GeoportalClient,
}

impl CadastreService {
    pub fn new(client: GeoportalClient) -> Self {
        Self { client }
    }

    /// Validate the candidate, query the geoportal once, and normalize
    /// the first matching feature. When the upstream returns several
    /// features the first one wins; there is no ranking.
    pub async fn lookup(&self, candidate: &str) -> Result<CadastreRecord, LookupError> {
        let number = CadastreNumber::parse(candidate)?;
        let data = self.client.search(number.as_str()).await?;

        let feature = match data
            .get("features")
            .and_then(Value::as_array)
            .and_then(|features| features.first())
        {
            Some(feature) => feature,
            None => {
                info!(number = %number, "no matching feature");
                return Err(LookupError::NotFound);
            }
        };

        let props = feature.get("properties").unwrap_or(&Value::Null);
        let options = props.get("options").unwrap_or(&Value::Null);
        let geometry = feature.get("geometry").unwrap_or(&Value::Null);
        Ok(normalize(props, options, geometry))
    }
}
