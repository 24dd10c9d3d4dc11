use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::modules::time_entries::core::validate::ValidationErrors;
use crate::shared::infrastructure::remote_api::GatewayError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("input data validation failed")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Submission(#[from] GatewayError),
}

// Caller-facing mapping: validation failures carry per-field detail with a
// client-error status; submission failures preserve what the remote said.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "message": "Input data validation failed",
                    "errors": errors.violations,
                })),
            )
                .into_response(),
            ApplicationError::Submission(GatewayError::Remote { status, body }) => (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "message": "Remote submission failed",
                    "remote_status": status,
                    "remote_body": body,
                })),
            )
                .into_response(),
            ApplicationError::Submission(GatewayError::Transport(reason)) => (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({
                    "message": "Remote submission failed",
                    "reason": reason,
                })),
            )
                .into_response(),
        }
    }
}
