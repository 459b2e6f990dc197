use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Unified request-level error type. Handlers return `ApiError` and the
/// HTTP surface performs the single translation to a status code here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input malformed or missing. Reported before any storage call.
    #[error("{0}")]
    Validation(String),

    /// Database unreachable or query failure.
    #[error("{0}")]
    Storage(#[from] sqlx::Error),

    /// Unmatched route.
    #[error("Endpoint not found")]
    NotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
