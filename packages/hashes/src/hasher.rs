//! Builder entry point for async and streaming hashing
//!
//! Usage: `Hasher::new(Sha256).compute(data).await`

use crate::async_result::AsyncHashResult;
use crate::config::{DEFAULT_CHUNK_SIZE, HashConfig, validate_chunk_size};
use crate::context::{Hash, HashContext};
use crate::registry::Algorithm;
use crate::streaming::StreamingHasher;
use crate::Result;
use futures::Stream;
use tokio::sync::oneshot;

/// Hash operation builder
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    algorithm: Algorithm,
    chunk_size: usize,
}

impl Hasher {
    /// Builder for `algorithm` with the default chunk size
    #[must_use]
    pub fn new(algorithm: impl Into<Algorithm>) -> Self {
        Self {
            algorithm: algorithm.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Builder taking both settings from `config`
    #[must_use]
    pub fn from_config(config: &HashConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            chunk_size: config.chunk_size,
        }
    }

    /// Bytes absorbed between yield points
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` for a zero chunk size, the same
    /// rule [`HashConfig`] applies.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Result<Self> {
        self.chunk_size = validate_chunk_size(chunk_size)?;
        Ok(self)
    }

    /// Algorithm this builder hashes with
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Hash `data` on a spawned tokio task
    ///
    /// Must be called from within a tokio runtime.
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        let data = data.into();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = hash_chunked(self.algorithm, &data, self.chunk_size).await;
            let _ = tx.send(result);
        });

        AsyncHashResult::new(rx)
    }

    /// Hash a stream of byte chunks incrementally
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if the default backend
    /// rejects the algorithm.
    pub fn stream<S>(self, input: S) -> Result<StreamingHasher<S>>
    where
        S: Stream<Item = Vec<u8>>,
    {
        StreamingHasher::new(input, self.algorithm)
    }
}

async fn hash_chunked(
    algorithm: Algorithm,
    data: &[u8],
    chunk_size: usize,
) -> Result<crate::HashResult> {
    let mut hash = Hash::new(algorithm)?;
    for chunk in data.chunks(chunk_size) {
        hash.update(chunk);
        tokio::task::yield_now().await;
    }
    hash.finalize()
}
