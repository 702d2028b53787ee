//! JSON configuration for selecting an algorithm and chunking input

use crate::registry::{Algorithm, AlgorithmSpec};
use crate::{HashError, Result};
use serde::Deserialize;
use serde_json::Value;

/// Bytes fed to the backend between yield points
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Validated hashing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashConfig {
    /// Algorithm to hash with
    pub algorithm: Algorithm,
    /// Bytes processed per step by [`crate::Hasher::compute`]
    pub chunk_size: usize,
}

#[derive(Deserialize)]
struct RawHashConfig {
    algorithm: AlgorithmSpec,
    #[serde(default = "default_chunk_size")]
    chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl HashConfig {
    /// Configuration with the default chunk size
    #[must_use]
    pub fn new(algorithm: impl Into<Algorithm>) -> Self {
        Self {
            algorithm: algorithm.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Parse a JSON document such as
    /// `{"algorithm": {"name": "shake128", "digest_size": 16}}`
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` for malformed JSON or a zero chunk
    /// size, and the registry's own errors (with their kinds intact) for a
    /// bad algorithm selection.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawHashConfig = serde_json::from_str(json)
            .map_err(|e| HashError::Configuration(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Same as [`HashConfig::from_json`] for an already-parsed value
    ///
    /// # Errors
    ///
    /// See [`HashConfig::from_json`].
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawHashConfig = serde_json::from_value(value)
            .map_err(|e| HashError::Configuration(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawHashConfig) -> Result<Self> {
        Ok(Self {
            chunk_size: validate_chunk_size(raw.chunk_size)?,
            algorithm: Algorithm::try_from(raw.algorithm)?,
        })
    }
}

pub(crate) fn validate_chunk_size(chunk_size: usize) -> Result<usize> {
    if chunk_size == 0 {
        tracing::debug!("zero chunk size rejected");
        return Err(HashError::Configuration(
            "chunk_size must be greater than zero".to_string(),
        ));
    }
    Ok(chunk_size)
}
