//! Stateful hash contexts

use crate::algorithm::HashAlgorithm;
use crate::backend::{self, Backend, BackendContext};
use crate::registry::Algorithm;
use crate::{HashError, HashResult, Result};

/// Live state that absorbs input and yields a digest
///
/// Finalizing consumes the context, so a context cannot be used after it
/// has produced its digest.
pub trait HashContext: Send {
    /// Algorithm this context computes; fixed for the context's lifetime
    fn algorithm(&self) -> Algorithm;

    /// Absorb more input
    fn update(&mut self, data: &[u8]);

    /// Produce the digest
    ///
    /// # Errors
    ///
    /// Returns `HashError::Finalization` if the backend could not produce the
    /// digest or produced one of the wrong length.
    fn finalize(self) -> Result<HashResult>
    where
        Self: Sized;

    /// Independent duplicate of the current state
    #[must_use]
    fn copy(&self) -> Self
    where
        Self: Sized;
}

/// Hash context backed by a [`Backend`]
pub struct Hash {
    algorithm: Algorithm,
    state: Box<dyn BackendContext>,
}

impl Hash {
    /// Start hashing with the default backend
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if the backend rejects the
    /// algorithm.
    pub fn new(algorithm: impl Into<Algorithm>) -> Result<Self> {
        Self::with_backend(algorithm, backend::default_backend())
    }

    /// Start hashing with a caller-supplied backend
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if `backend` does not
    /// support the algorithm.
    pub fn with_backend(algorithm: impl Into<Algorithm>, backend: &dyn Backend) -> Result<Self> {
        let algorithm = algorithm.into();
        if !backend.hash_supported(&algorithm) {
            return Err(backend::unsupported(&algorithm, backend));
        }
        let state = backend.create_context(&algorithm)?;
        Ok(Self { algorithm, state })
    }

    /// Hash `data` in one call
    ///
    /// # Errors
    ///
    /// Same as [`Hash::new`] and [`HashContext::finalize`].
    pub fn digest(algorithm: impl Into<Algorithm>, data: impl AsRef<[u8]>) -> Result<HashResult> {
        let mut hash = Self::new(algorithm)?;
        hash.update(data.as_ref());
        hash.finalize()
    }
}

impl HashContext for Hash {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize(self) -> Result<HashResult> {
        let name = self.algorithm.name();
        let expected = self.algorithm.digest_size();
        let bytes = self.state.finalize()?;
        if bytes.len() != expected {
            return Err(HashError::Finalization(format!(
                "{name} backend produced {} bytes, expected {expected}",
                bytes.len()
            )));
        }
        tracing::trace!(algorithm = name, digest_size = expected, "context finalized");
        Ok(HashResult::new(name, bytes))
    }

    fn copy(&self) -> Self {
        tracing::trace!(algorithm = self.algorithm.name(), "context copied");
        Self {
            algorithm: self.algorithm,
            state: self.state.copy(),
        }
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hash")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}
