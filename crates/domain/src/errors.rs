//! Error types used throughout the application.

use thiserror::Error;

/// Main error type for StoreLens.
#[derive(Error, Debug)]
pub enum StoreLensError {
    /// The sales dataset could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The local persistence sink failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A lookup did not match any record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A caller supplied an argument outside the accepted range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for StoreLens operations.
pub type Result<T> = std::result::Result<T, StoreLensError>;
