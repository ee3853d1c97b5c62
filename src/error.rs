//! Error handling for the application

use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::validation::ValidationError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(Arc<sqlx::Error>),

    /// Request body or query string that could not be decoded
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code plus the message that is safe to show a visitor.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::BadRequest { status, message } => (*status, message.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            AppError::NotFound => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::BadRequest { .. } => "invalid_request",
            AppError::Database(_) => "database_error",
            AppError::Template(_) => "template_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(Arc::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl AppError {
    /// Copy of an error shared between callers (e.g. by the cache loader).
    ///
    /// Database and validation errors keep their kind; anything else becomes
    /// `Internal` with the same message.
    pub fn from_shared(err: &AppError) -> AppError {
        match err {
            AppError::NotFound => AppError::NotFound,
            AppError::Validation(e) => AppError::Validation(e.clone()),
            AppError::Database(e) => AppError::Database(Arc::clone(e)),
            AppError::BadRequest { status, message } => AppError::BadRequest {
                status: *status,
                message: message.clone(),
            },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Return simple HTML error page
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head><title>{} - Book My Wallpaper</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{}</h1>
    <p>{}</p>
    <a href="/">Return to homepage</a>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16(),
            escape_html(&message)
        );

        (status, axum::response::Html(html)).into_response()
    }
}

/// JSON error body for `/api/*` endpoints
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error_type: String,
    pub message: String,
}

/// [`AppError`] rendered as JSON instead of an HTML page
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        let body = ApiErrorResponse {
            error_type: self.0.error_type().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub type Result<T> = std::result::Result<T, AppError>;
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::from(ValidationError::InvalidPhone).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError(AppError::Internal("boom".to_string())).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_visible() {
        let err = AppError::from(ValidationError::Required { field: "name" });
        let (_, message) = err.status_and_message();
        assert_eq!(message, "name is required");
        assert_eq!(err.error_type(), "validation_error");
    }

    #[test]
    fn test_shared_database_error_keeps_kind() {
        let shared = Arc::new(AppError::from(sqlx::Error::PoolTimedOut));
        let copy = AppError::from_shared(&shared);
        assert!(matches!(copy, AppError::Database(_)));
        assert_eq!(copy.error_type(), "database_error");

        let template = AppError::Internal("render".to_string());
        assert_eq!(AppError::from_shared(&template).error_type(), "internal_error");
    }

    #[test]
    fn test_bad_request_keeps_status() {
        let err = AppError::BadRequest {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };
        assert_eq!(err.error_type(), "invalid_request");
        assert_eq!(
            ApiError(err).into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
