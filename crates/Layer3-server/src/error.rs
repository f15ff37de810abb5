//! HTTP error mapping
//!
//! Wraps the foundation [`Error`] and renders every failure as the JSON
//! body `{"status":"error","message":...}` with the status code the
//! failure class calls for. Errors are terminal for the request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scriptforge_foundation::Error;
use serde_json::json;

/// Application-level error type for HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A gateway-domain error from the pipeline or the store
    #[error(transparent)]
    Gateway(#[from] Error),
}

/// Convenience type alias for handler return values
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Gateway(err) = self;

        let (status, message) = match &err {
            // Request validation: rejected before any side effect.
            Error::InvalidInput(_) | Error::InvalidDescriptor(_) | Error::Json(_) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }

            // Confinement violation on the read path.
            Error::AccessDenied(_) => {
                tracing::warn!(error = %err, "Confined path escape rejected");
                (StatusCode::FORBIDDEN, "Access denied".to_string())
            }

            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),

            // Upstream, execution, and everything else: hard failures. The
            // message is returned to the caller (it carries the provider
            // detail or the captured stderr).
            Error::Provider(_)
            | Error::Execution { .. }
            | Error::Config(_)
            | Error::Io(_) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = json!({
            "status": "error",
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
