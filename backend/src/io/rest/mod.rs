//! # REST API Interface Layer
//!
//! JSON endpoints for the course catalog, mounted under `/api`.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: one `*_apis` module per resource, each exposing `router()`
//! - **Error Translation**: `ServiceError` becomes a status code and an
//!   `ErrorResponse` body
//! - **Mapping**: `mappers` convert between `shared` DTOs and domain types

pub mod asset_apis;
pub mod course_apis;
pub mod enrollment_apis;
pub mod mappers;
pub mod user_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use tracing::error;

use crate::domain::ServiceError;
use crate::AppState;
use shared::ErrorResponse;

/// All API routes, to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(course_apis::router())
        .merge(enrollment_apis::router())
        .merge(user_apis::router())
        .merge(asset_apis::router())
}

/// JSON error body with the given status
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
        code: code.to_string(),
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Validation(message) => error_response(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),
            ServiceError::Forbidden(message) => error_response(StatusCode::FORBIDDEN, "FORBIDDEN", message),
            ServiceError::NotFound(message) => error_response(StatusCode::NOT_FOUND, "NOT_FOUND", message),
            ServiceError::Conflict(message) => error_response(StatusCode::CONFLICT, "CONFLICT", message),
            ServiceError::Storage(e) => {
                error!("Storage failure: {}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred.",
                )
            }
        }
    }
}
