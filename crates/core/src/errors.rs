//! Core error types for the Fintrack application.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures (file I/O, serialization) are converted to these types by the
//! storage layer.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::auth::AuthError;
use crate::family::FamilyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Family ledger error: {0}")]
    Family(#[from] FamilyError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing storage backends
/// to convert their own failures (I/O, encoding, etc.) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the underlying store failed.
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// A value could not be serialized for persistence.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Internal/unexpected backend error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Store(StoreError::Io(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(StoreError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
