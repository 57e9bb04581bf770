//! Error types for the IR crate.

use thiserror::Error;

/// Errors raised while constructing or decoding gates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A coordinate is non-positive, a coordinate sequence has the wrong
    /// arity, x-values are not all equal, or y-values are not distinct.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Rotation angle outside `[0, 360]`.
    #[error("Invalid angle {0}: must be between 0 and 360")]
    InvalidAngle(i64),

    /// The `text` label of a wire payload names no known gate.
    #[error("Unknown gate label '{0}'")]
    UnknownGate(String),

    /// A wire payload is missing a field or carries a value of the wrong type.
    #[error("Malformed gate payload: {0}")]
    MalformedPayload(String),
}

impl IrError {
    /// Shorthand for an [`IrError::InvalidCoordinate`].
    pub fn invalid_coordinate(reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate(reason.into())
    }

    /// Shorthand for an [`IrError::MalformedPayload`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload(reason.into())
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
