//! Consistent JSON error responses.
//!
//! Error bodies are `{"error": "<human readable>"}`; the HTTP status carries
//! the taxonomy (400 validation, 404 unknown order, 500 storage/unexpected).

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use despacho_core::DomainError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, msg)
        }
        ServiceError::Domain(DomainError::InvalidId(msg)) => {
            json_error(StatusCode::BAD_REQUEST, msg)
        }
        ServiceError::Domain(DomainError::NotFound) => {
            json_error(StatusCode::NOT_FOUND, "Order not found")
        }
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "order persistence failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
