//! Error types for ledgerdash-store

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreErrorCode {
    /// IO error
    IoError,
    /// Persisted document is not valid JSON for the expected shape
    InvalidDocument,
    /// Records could not be serialized
    SerializeFailed,
}

impl std::fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreErrorCode::IoError => write!(f, "IO_ERROR"),
            StoreErrorCode::InvalidDocument => write!(f, "INVALID_DOCUMENT"),
            StoreErrorCode::SerializeFailed => write!(f, "SERIALIZE_FAILED"),
        }
    }
}

/// Store error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error")]
    Io(#[from] io::Error),

    #[error("Invalid ledger document: {message}")]
    InvalidDocument { message: String },

    #[error("Failed to serialize ledger document: {message}")]
    SerializeFailed { message: String },
}

impl StoreError {
    /// Get the error code
    pub fn code(&self) -> StoreErrorCode {
        match self {
            StoreError::Io(_) => StoreErrorCode::IoError,
            StoreError::InvalidDocument { .. } => StoreErrorCode::InvalidDocument,
            StoreError::SerializeFailed { .. } => StoreErrorCode::SerializeFailed,
        }
    }
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
