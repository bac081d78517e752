//! Error types for ledgerdash-api
//!
//! Internal errors carry codes and context; the HTTP boundary exposes
//! only a generic message plus the status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ledgerdash_core::{CoreError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Map a core error onto the HTTP taxonomy
    ///
    /// `internal_message` is the operation-specific generic message
    /// returned for store-level failures; the real cause is logged
    /// here and never leaves the process.
    pub fn from_core(error: CoreError, internal_message: &str) -> Self {
        match error.code() {
            ErrorCode::TransactionNotFound => ApiError::NotFound {
                message: "Transaction not found".to_string(),
            },
            ErrorCode::ValidationError => ApiError::BadRequest {
                message: match error {
                    CoreError::ValidationError { message } => message,
                    _ => "Invalid request".to_string(),
                },
            },
            ErrorCode::InvalidAmount | ErrorCode::StoreError => {
                log::error!("{}: {}", internal_message, error);
                ApiError::Internal {
                    message: internal_message.to_string(),
                }
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest { message }
            | ApiError::NotFound { message }
            | ApiError::Internal { message } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.message() }));
        (status, body).into_response()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let error = ApiError::from_core(
            CoreError::TransactionNotFound {
                id: "9".to_string(),
            },
            "Failed to fetch transaction",
        );
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Transaction not found");
    }

    #[test]
    fn test_validation_mapping_keeps_message() {
        let error = ApiError::from_core(
            CoreError::ValidationError {
                message: "Amount and description are required".to_string(),
            },
            "Failed to create transaction",
        );
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Amount and description are required");
    }

    #[test]
    fn test_store_failure_is_generic_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = ApiError::from_core(
            CoreError::Store(ledgerdash_store::StoreError::from(io)),
            "Failed to fetch transactions",
        );
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // The filesystem detail must not leak into the response
        assert_eq!(error.message(), "Failed to fetch transactions");
    }
}
