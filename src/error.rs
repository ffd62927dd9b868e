//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// What went wrong in the store, as far as a caller needs to know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageErrorKind {
    /// A unique constraint rejected the row.
    Duplicate,
    /// A value did not fit its column (type, range, nullability, unknown column).
    BadField,
    Other,
}

impl StorageErrorKind {
    /// Classify a PostgreSQL SQLSTATE code.
    pub fn from_sqlstate(code: Option<&str>) -> Self {
        match code {
            Some("23505") => StorageErrorKind::Duplicate,
            Some("42703" | "22P02" | "22003" | "23502" | "23514" | "22001") => StorageErrorKind::BadField,
            _ => StorageErrorKind::Other,
        }
    }
}

#[derive(Error, Debug)]
#[error("storage ({kind:?}): {source}")]
pub struct StorageError {
    pub kind: StorageErrorKind,
    #[source]
    pub source: sqlx::Error,
}

impl From<sqlx::Error> for StorageError {
    fn from(source: sqlx::Error) -> Self {
        let kind = match &source {
            sqlx::Error::Database(db) => StorageErrorKind::from_sqlstate(db.code().as_deref()),
            _ => StorageErrorKind::Other,
        };
        StorageError { kind, source }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Not Found")]
    NotFound,
    /// The request body could not be read (too large, aborted stream).
    #[error("{1}")]
    Body(StatusCode, String),
    /// Carries the client-facing message; details are logged where the failure is caught.
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Body(status, _) => *status,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Validation(m) | AppError::Conflict(m) | AppError::Internal(m) => m.clone(),
            AppError::NotFound | AppError::Body(..) => self.to_string(),
            AppError::Storage(e) => {
                tracing::error!(error = %e, "unhandled storage error");
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };
        error_response(status, message)
    }
}

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn sqlstate_classification() {
        assert_eq!(StorageErrorKind::from_sqlstate(Some("23505")), StorageErrorKind::Duplicate);
        assert_eq!(StorageErrorKind::from_sqlstate(Some("42703")), StorageErrorKind::BadField);
        assert_eq!(StorageErrorKind::from_sqlstate(Some("22P02")), StorageErrorKind::BadField);
        assert_eq!(StorageErrorKind::from_sqlstate(Some("23514")), StorageErrorKind::BadField);
        assert_eq!(StorageErrorKind::from_sqlstate(Some("40001")), StorageErrorKind::Other);
        assert_eq!(StorageErrorKind::from_sqlstate(None), StorageErrorKind::Other);
    }

    #[test]
    fn non_database_errors_are_other() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind, StorageErrorKind::Other);
    }

    #[tokio::test]
    async fn validation_error_is_400_with_message() {
        let response = AppError::Validation("Latitude and longitude are required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Latitude and longitude are required" })
        );
    }

    #[tokio::test]
    async fn conflict_is_409() {
        let response = AppError::Conflict("School with the same name already exists".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn storage_error_does_not_leak_details() {
        let err = AppError::from(StorageError::from(sqlx::Error::Protocol("password=hunter2".into())));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn body_error_keeps_its_status() {
        let response = AppError::Body(StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large".into()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await, serde_json::json!({ "error": "Payload Too Large" }));
    }

    #[tokio::test]
    async fn not_found_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, serde_json::json!({ "error": "Not Found" }));
    }
}
