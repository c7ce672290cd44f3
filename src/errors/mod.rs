//! Unified error handling with consistent API response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            error: None,
        })
    }

    /// Wrap an error in the envelope.
    pub fn error(code: &str, message: &str) -> Json<Self> {
        Json(Self {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }
}

/// Failure of a data access operation.
///
/// The message is fixed per operation. The underlying store error is kept as
/// the `source` for diagnostics and never rendered through `Display`.
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{message}")]
    NotFound { message: &'static str },
}

impl DataAccessError {
    /// Build a mapper that logs a store error and wraps it with `message`.
    ///
    /// ```ignore
    /// sqlx::query(..).fetch_all(pool).await.map_err(DataAccessError::store("Failed to fetch revenue data."))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| {
            tracing::error!(error = %source, "Database error: {message}");
            Self::Store { message, source }
        }
    }

    /// Check if this error represents a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The fixed, user-safe message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Store { message, .. } | Self::NotFound { message } => message,
        }
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::DataAccess(e @ DataAccessError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", e.message().to_string())
            }
            AppError::DataAccess(e @ DataAccessError::Store { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                e.message().to_string(),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        (status, ApiResponse::<()>::error(code, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn api_response_success() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["data"], "hello");
        assert!(json["error"].is_null());
    }

    #[test]
    fn api_response_error() {
        let response = ApiResponse::<()>::error("NOT_FOUND", "Invoice not found.");
        let json = serde_json::to_value(&response.0).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Invoice not found.");
    }

    #[test]
    fn store_error_hides_cause_in_display() {
        let err = DataAccessError::store("Failed to fetch revenue data.")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Failed to fetch revenue data.");
        assert!(!err.is_not_found());
        let source = err.source().expect("store error keeps its cause");
        assert_eq!(source.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn not_found_is_a_data_access_error() {
        let err: AppError = DataAccessError::NotFound {
            message: "Invoice not found.",
        }
        .into();
        assert!(matches!(&err, AppError::DataAccess(e) if e.is_not_found()));
        assert_eq!(err.to_string(), "Invoice not found.");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(DataAccessError::NotFound {
            message: "Invoice not found.",
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_error_maps_to_500() {
        let err = AppError::from(DataAccessError::store("Failed to fetch invoices.")(
            sqlx::Error::RowNotFound,
        ));
        assert!(matches!(&err, AppError::DataAccess(e) if !e.is_not_found()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn error_response_uses_envelope() {
        let err = AppError::from(DataAccessError::NotFound {
            message: "Invoice not found.",
        });
        let body = axum::body::to_bytes(err.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Invoice not found.");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("page must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: page must be at least 1");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
