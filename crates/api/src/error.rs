use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use birthday_core::error::CoreError;
use serde_json::json;

/// Error returned by every `/birthday` handler.
///
/// Rendered as `{"error": <message>, "code": <CODE>}` with the matching
/// status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation, absence or id collision detected by the handler.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The record store failed. Always a 500; the sqlx message is logged,
    /// never returned.
    #[error("Storage fault: {0}")]
    Storage(#[from] sqlx::Error),

    /// Body or path id that could not be extracted at all.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            AppError::Core(CoreError::InvalidDate(_)) => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            AppError::Core(CoreError::Conflict(_)) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            AppError::Core(CoreError::InvalidDate(msg)) => format!("Invalid date format: {msg}"),
            AppError::Core(CoreError::Validation(msg) | CoreError::Conflict(msg)) => msg.clone(),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Birthday store failure");
                "An internal error occurred".to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = json!({
            "error": self.client_message(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
