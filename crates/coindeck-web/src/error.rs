use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coindeck_core::FetchError;
use coindeck_ledger::LedgerError;
use serde_json::json;
use thiserror::Error;

/// Request-scoped failures, each mapped to a JSON `{"error": <message>}`
/// body. No variant is ever fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Fetch(_) | Self::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
