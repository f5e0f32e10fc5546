//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use blog_core::error::RepoError;
use blog_core::validation::ValidationError;
use blog_shared::{ErrorResponse, FieldError};
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    /// The body could not be read as a JSON object.
    BadRequest(String),
    Validation(ValidationError),
    Store(RepoError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Validation(err) => write!(f, "Validation errors: {}", err),
            AppError::Store(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Validation(err) => {
                tracing::debug!(fields = ?err.fields().collect::<Vec<_>>(), "Payload rejected");
                ErrorResponse::validation_failed(
                    err.violations
                        .iter()
                        .map(|v| FieldError::body(v.field, v.kind.code(), v.kind.to_string()))
                        .collect(),
                )
            }
            AppError::Store(err) => {
                // Driver text stays in the logs.
                tracing::error!(error = %err, "Store operation failed");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Store(err)
    }
}

/// Turns body extraction failures into problem documents instead of actix's plain text.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
