//! Error handling - maps failures onto HTML error pages.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};

use blogly_core::error::{DomainError, RepoError};
use blogly_shared::FormError;

const NOT_FOUND_PAGE: &str = include_str!("../../templates/errors/404.html");
const BAD_REQUEST_PAGE: &str = include_str!("../../templates/errors/400.html");
const INTERNAL_ERROR_PAGE: &str = include_str!("../../templates/errors/500.html");

/// Application-level error type rendered as an HTML page.
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
        let page = match self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                NOT_FOUND_PAGE
            }
            AppError::BadRequest(detail) => {
                tracing::warn!("Rejected request: {}", detail);
                BAD_REQUEST_PAGE
            }
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                INTERNAL_ERROR_PAGE
            }
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(page)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Storage(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Internal(format!("Constraint violation: {}", msg)),
            RepoError::Connection(msg) => AppError::Internal(format!("Database connection error: {}", msg)),
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Internal(format!("Template error: {:#}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entity_maps_to_404() {
        let err: AppError = DomainError::not_found("User", 9).into();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: User with id 9 not found");
    }

    #[test]
    fn constraint_violation_maps_to_500() {
        let err: AppError = RepoError::Constraint("tags_name_key".to_string()).into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_errors_unwrap_through_domain_error() {
        let err: AppError = DomainError::from(RepoError::NotFound).into();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_form_maps_to_400() {
        let err: AppError = FormError::MissingField("title").into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.error_response().headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
