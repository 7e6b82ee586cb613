//! Router and the lookup-error → HTTP-status mapping.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use kadastr_client::{CadastreService, LookupError};
use kadastr_core::CadastreRecord;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CadastreService>,
}

/// Error body shape shared by every non-200 response.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

struct ApiError(LookupError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            LookupError::InvalidFormat(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            LookupError::NotFound => {
                (StatusCode::NOT_FOUND, "Объект не найден.".to_string())
            }
            // The upstream status passes through so callers can tell a
            // geoportal outage from our own failure.
            LookupError::Upstream { status } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                "Ошибка при запросе к внешнему API.".to_string(),
            ),
            LookupError::Transport(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Внутренняя ошибка сервера.".to_string(),
            ),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/cadastre/:number", get(get_cadastre))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_cadastre(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<CadastreRecord>, ApiError> {
    match state.service.lookup(&number).await {
        Ok(record) => {
            info!(number = %number, "lookup succeeded");
            Ok(Json(record))
        }
        Err(err) => {
            match &err {
                LookupError::InvalidFormat(_) => warn!(number = %number, "invalid cadastre number"),
                LookupError::NotFound => info!(number = %number, "object not found"),
                other => error!(number = %number, error = %other, "lookup failed"),
            }
            Err(ApiError(err))
        }
    }
}
