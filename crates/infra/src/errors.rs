//! Infrastructure error types.

use storelens_domain::StoreLensError;
use thiserror::Error;

/// Errors raised by infrastructure adapters before they cross a port
/// boundary.
#[derive(Debug, Error)]
pub enum InfraError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<InfraError> for StoreLensError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Io(e) => StoreLensError::Storage(e.to_string()),
            InfraError::Json(e) => StoreLensError::Serialization(e.to_string()),
        }
    }
}
