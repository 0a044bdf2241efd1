//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::config::{MessageKind, Messages};
use crate::errors::Error;

/// Builds a `{"error": code, "message": message}` response with `status`.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Maps a storage or internal failure to a 500. Details stay in the logs.
pub fn internal_error(messages: &Messages, err: &Error) -> axum::response::Response {
    tracing::error!("Request failed: {}", err);
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        messages.get(MessageKind::InternalError),
    )
}
