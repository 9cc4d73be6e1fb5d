//! Shared error type across Vigil crates.

use std::path::PathBuf;

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Model artifact path does not exist.
    NotFound,
    /// Artifact exists but could not be deserialized.
    LoadFailed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::LoadFailed => "LOAD_FAILED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VigilError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VigilError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("model not found: {}", .0.display())]
    ModelNotFound(PathBuf),
    #[error("{0}")]
    ModelLoad(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VigilError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VigilError::BadRequest(_) => ClientCode::BadRequest,
            VigilError::ModelNotFound(_) => ClientCode::NotFound,
            VigilError::ModelLoad(_) => ClientCode::LoadFailed,
            VigilError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VigilError::Internal(_) => ClientCode::Internal,
        }
    }
}
