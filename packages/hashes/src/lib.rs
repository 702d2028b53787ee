//! Hash algorithm registry and backend-driven hash contexts
//!
//! Algorithms are immutable descriptors (`name`, `digest_size`,
//! `block_size`). Contexts hold backend state and produce a [`HashResult`].
//!
//! ```
//! use cryypt_hashes::{Hash, HashAlgorithm, algorithms::Sha256};
//!
//! assert_eq!(Sha256.digest_size(), 32);
//! let digest = Hash::digest(Sha256, b"abc")?;
//! assert_eq!(digest.len(), 32);
//! # Ok::<(), cryypt_hashes::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod algorithms;
pub mod async_result;
pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod hash_result;
pub mod hasher;
pub mod registry;
pub mod streaming;
pub mod validation;

pub use error::{ErrorKind, HashError, Result};

pub use algorithm::{ExtendableOutputFunction, HashAlgorithm};
pub use registry::{Algorithm, AlgorithmDescriptor, AlgorithmSpec};

pub use backend::{Backend, BackendContext, RustCryptoBackend, default_backend};
pub use context::{Hash, HashContext};
pub use hash_result::HashResult;

pub use async_result::{AsyncHashResult, AsyncHashResultWithHandler};
pub use config::HashConfig;
pub use hasher::Hasher;
pub use streaming::{StreamHashChunk, StreamHashResult, StreamingHasher, collect_hash};
