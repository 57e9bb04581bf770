//! Error types for the HAL crate.

use acq_ir::IrError;
use thiserror::Error;

/// Errors that can occur in connector and transport operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// The service answered but reported failure, or answered with an
    /// unexpected status.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Service-provided exception text.
        message: String,
        /// HTTP status when it was not 200.
        status: Option<u16>,
    },

    /// The session was rejected (HTTP 403).
    #[error("403 Forbidden: session rejected by the service")]
    Forbidden,

    /// A gate payload failed validation.
    #[error("Invalid gate: {0}")]
    InvalidGate(#[from] IrError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Circuit exceeds backend capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error below the envelope layer.
    #[error("Network error: {0}")]
    Network(String),
}

impl HalError {
    /// A `RequestFailed` without an HTTP status.
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            message: message.into(),
            status: None,
        }
    }

    /// The HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
            Self::Forbidden => Some(403),
            _ => None,
        }
    }
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
