//! Error handling - maps store outcomes and extractor failures to `{ error }` responses.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
};
use quill_core::DomainError;
use quill_shared::ErrorResponse;
use std::fmt;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                ErrorResponse::new(detail.as_str())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Storage(err) => AppError::Internal(err.to_string()),
        }
    }
}

/// Malformed or non-JSON request bodies.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// A path segment that is not a post id names no post.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Unparseable path parameter: {}", err);
    AppError::NotFound("Post not found".to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::RepoError;

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        let cases = [
            (DomainError::post_not_found(3), StatusCode::NOT_FOUND),
            (
                DomainError::Validation("title is required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Storage(RepoError::Query("disk I/O error".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }
}
