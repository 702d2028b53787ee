//! Digest engines behind the hash contexts
//!
//! The registry only names algorithms; a [`Backend`] turns a name into live
//! hashing state. [`RustCryptoBackend`] is the default and covers every
//! algorithm in the registry.

use crate::algorithm::HashAlgorithm;
use crate::registry::Algorithm;
use crate::{HashError, Result};
use digest::{Digest, ExtendableOutput, Update, XofReader};

/// Source of hashing state for a [`crate::Hash`]
pub trait Backend: Send + Sync {
    /// Short identifier used in error messages
    fn name(&self) -> &'static str;

    /// Whether [`Backend::create_context`] would succeed for `algorithm`
    fn hash_supported(&self, algorithm: &Algorithm) -> bool;

    /// Fresh hashing state for `algorithm`
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if this backend cannot
    /// compute `algorithm`.
    fn create_context(&self, algorithm: &Algorithm) -> Result<Box<dyn BackendContext>>;
}

/// Opaque hashing state owned by one context
pub trait BackendContext: Send + Sync {
    /// Absorb `data`
    fn update(&mut self, data: &[u8]);

    /// Produce the digest, consuming the state
    ///
    /// # Errors
    ///
    /// Returns `HashError::Finalization` if the output buffer cannot be
    /// allocated.
    fn finalize(self: Box<Self>) -> Result<Vec<u8>>;

    /// Independent duplicate of the current state
    fn copy(&self) -> Box<dyn BackendContext>;
}

/// Backend built on the RustCrypto hash crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend;

static DEFAULT_BACKEND: RustCryptoBackend = RustCryptoBackend;

/// The backend [`crate::Hash::new`] uses
#[must_use]
pub fn default_backend() -> &'static RustCryptoBackend {
    &DEFAULT_BACKEND
}

impl Backend for RustCryptoBackend {
    fn name(&self) -> &'static str {
        "rustcrypto"
    }

    fn hash_supported(&self, _algorithm: &Algorithm) -> bool {
        true
    }

    fn create_context(&self, algorithm: &Algorithm) -> Result<Box<dyn BackendContext>> {
        let context: Box<dyn BackendContext> = match algorithm {
            Algorithm::Sha1(_) => DigestContext::<sha1::Sha1>::boxed(),
            Algorithm::Sha512_224(_) => DigestContext::<sha2::Sha512_224>::boxed(),
            Algorithm::Sha512_256(_) => DigestContext::<sha2::Sha512_256>::boxed(),
            Algorithm::Sha224(_) => DigestContext::<sha2::Sha224>::boxed(),
            Algorithm::Sha256(_) => DigestContext::<sha2::Sha256>::boxed(),
            Algorithm::Sha384(_) => DigestContext::<sha2::Sha384>::boxed(),
            Algorithm::Sha512(_) => DigestContext::<sha2::Sha512>::boxed(),
            Algorithm::Sha3_224(_) => DigestContext::<sha3::Sha3_224>::boxed(),
            Algorithm::Sha3_256(_) => DigestContext::<sha3::Sha3_256>::boxed(),
            Algorithm::Sha3_384(_) => DigestContext::<sha3::Sha3_384>::boxed(),
            Algorithm::Sha3_512(_) => DigestContext::<sha3::Sha3_512>::boxed(),
            Algorithm::Shake128(xof) => XofContext::<sha3::Shake128>::boxed(xof.digest_size()),
            Algorithm::Shake256(xof) => XofContext::<sha3::Shake256>::boxed(xof.digest_size()),
            Algorithm::Md5(_) => DigestContext::<md5::Md5>::boxed(),
            Algorithm::Blake2b(_) => DigestContext::<blake2::Blake2b512>::boxed(),
            Algorithm::Blake2s(_) => DigestContext::<blake2::Blake2s256>::boxed(),
            Algorithm::Sm3(_) => DigestContext::<sm3::Sm3>::boxed(),
        };
        tracing::trace!(algorithm = algorithm.name(), backend = self.name(), "context created");
        Ok(context)
    }
}

/// Fixed-output state
#[derive(Clone)]
struct DigestContext<D>(D);

impl<D> DigestContext<D>
where
    D: Digest + Clone + Send + Sync + 'static,
{
    fn boxed() -> Box<dyn BackendContext> {
        Box::new(Self(D::new()))
    }
}

impl<D> BackendContext for DigestContext<D>
where
    D: Digest + Clone + Send + Sync + 'static,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>> {
        let Self(digest) = *self;
        Ok(digest.finalize().to_vec())
    }

    fn copy(&self) -> Box<dyn BackendContext> {
        Box::new(self.clone())
    }
}

/// Extendable-output state that reads a preset number of bytes
#[derive(Clone)]
struct XofContext<X> {
    state: X,
    output_len: usize,
}

impl<X> XofContext<X>
where
    X: ExtendableOutput + Update + Default + Clone + Send + Sync + 'static,
{
    fn boxed(output_len: usize) -> Box<dyn BackendContext> {
        Box::new(Self {
            state: X::default(),
            output_len,
        })
    }
}

impl<X> BackendContext for XofContext<X>
where
    X: ExtendableOutput + Update + Default + Clone + Send + Sync + 'static,
{
    fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.state, data);
    }

    fn finalize(self: Box<Self>) -> Result<Vec<u8>> {
        let Self { state, output_len } = *self;
        let mut out: Vec<u8> = Vec::new();
        out.try_reserve_exact(output_len).map_err(|e| {
            tracing::debug!(output_len, error = %e, "xof output buffer not allocated");
            HashError::Finalization(format!("cannot allocate {output_len} output bytes: {e}"))
        })?;
        out.resize(output_len, 0);
        state.finalize_xof().read(&mut out);
        Ok(out)
    }

    fn copy(&self) -> Box<dyn BackendContext> {
        Box::new(self.clone())
    }
}

/// Reject an algorithm on behalf of a backend, with logging
pub(crate) fn unsupported(algorithm: &Algorithm, backend: &dyn Backend) -> HashError {
    tracing::debug!(
        algorithm = algorithm.name(),
        backend = backend.name(),
        "algorithm not supported by backend"
    );
    HashError::unsupported(algorithm.name(), backend.name())
}
