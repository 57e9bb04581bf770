//! Error types for the HTTP adapter.

use acq_hal::HalError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type for HTTP adapter operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur when talking to the service over HTTP.
#[derive(Debug, Error)]
pub enum HttpError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not a valid envelope.
    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The service rejected the session.
    #[error("403 Forbidden")]
    Forbidden,

    /// Non-200 response.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Configuration could not be loaded or is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<HttpError> for HalError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Forbidden => HalError::Forbidden,
            HttpError::ApiError { status, message } => HalError::RequestFailed {
                message,
                status: Some(status),
            },
            HttpError::Json(err) => HalError::request_failed(err.to_string()),
            HttpError::Http(err) => HalError::Network(err.to_string()),
            HttpError::Config(err) => HalError::Configuration(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = HttpError::ApiError {
            status: 500,
            message: "internal".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal"));
    }

    // -- HalError conversion tests --

    #[test]
    fn test_forbidden_to_hal() {
        let hal: HalError = HttpError::Forbidden.into();
        assert!(matches!(hal, HalError::Forbidden));
    }

    #[test]
    fn test_api_error_to_hal_keeps_status() {
        let hal: HalError = HttpError::ApiError {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert_eq!(hal.status(), Some(502));
        assert!(matches!(hal, HalError::RequestFailed { ref message, .. } if message == "bad gateway"));
    }

    #[test]
    fn test_json_error_to_hal() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let hal: HalError = HttpError::Json(err).into();
        assert!(matches!(hal, HalError::RequestFailed { status: None, .. }));
    }

    #[test]
    fn test_config_error_to_hal() {
        let hal: HalError = HttpError::Config(ConfigError::MissingCsrfToken).into();
        assert!(matches!(hal, HalError::Configuration(_)));
    }
}
