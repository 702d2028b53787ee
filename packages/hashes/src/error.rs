//! Error handling for the hash registry and hash contexts

use thiserror::Error;

/// Broad category of a [`HashError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had the wrong type (e.g. a string where an integer was expected)
    Type,
    /// An argument had the right type but an unacceptable value
    Value,
    /// The algorithm is unknown or the backend cannot compute it
    Unsupported,
    /// A configuration document could not be parsed
    Configuration,
    /// The backend or the async machinery misbehaved
    Internal,
}

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Parameter was not an integer
    #[error("{param} must be an int")]
    InvalidType { param: &'static str },

    /// Parameter value was rejected
    #[error("{0}")]
    InvalidValue(String),

    /// Required parameter was not supplied
    #[error("{param} is required for {algorithm}")]
    MissingParameter {
        param: &'static str,
        algorithm: &'static str,
    },

    #[error("Unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("{algorithm} is not supported by the {backend} backend")]
    UnsupportedAlgorithm {
        algorithm: String,
        backend: &'static str,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Hash finalization error: {0}")]
    Finalization(String),

    #[error("Stream processing error: {0}")]
    StreamProcessing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } | Self::MissingParameter { .. } => ErrorKind::Type,
            Self::InvalidValue(_) => ErrorKind::Value,
            Self::UnknownAlgorithm(_) | Self::UnsupportedAlgorithm { .. } => ErrorKind::Unsupported,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Finalization(_) | Self::StreamProcessing(_) | Self::Internal(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create an `invalid_value` error
    #[must_use]
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Create an unsupported-algorithm error for a named backend
    #[must_use]
    pub fn unsupported(algorithm: impl Into<String>, backend: &'static str) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
            backend,
        }
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
