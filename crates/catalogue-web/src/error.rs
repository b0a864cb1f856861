use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use catalogue_core::CatalogueError;

use crate::dto::ApiEnvelope;

pub fn failure_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiEnvelope::<()>::failure(message))).into_response()
}

/// Envelope for a request whose path or query string could not be extracted.
pub fn rejection_response(rejection: impl std::fmt::Display) -> Response {
    tracing::debug!(error = %rejection, "request rejected by extractor");
    failure_response(StatusCode::BAD_REQUEST, format!("Invalid request: {rejection}"))
}

/// Map a catalogue error to the envelope. Client errors carry their own
/// message; everything else is logged and answered with `failure_message`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn catalogue_error_response(err: CatalogueError, failure_message: &str) -> Response {
    match &err {
        CatalogueError::InvalidRequest(message) => {
            failure_response(StatusCode::BAD_REQUEST, message.clone())
        }
        CatalogueError::NotFound(message) => {
            failure_response(StatusCode::NOT_FOUND, message.clone())
        }
        _ => {
            tracing::error!(code = err.code(), error = %err, "{failure_message}");
            failure_response(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
        }
    }
}
