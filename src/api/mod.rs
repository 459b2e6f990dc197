pub mod fichajes;
pub mod health;

use actix_web::{HttpResponse, ResponseError};

use crate::error::ApiError;

/// Default handler for any unmatched route.
pub async fn not_found() -> HttpResponse {
    ApiError::NotFound.error_response()
}
