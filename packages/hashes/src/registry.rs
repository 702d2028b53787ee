//! The closed set of supported algorithms
//!
//! [`Algorithm`] is the sum type over every descriptor in
//! [`crate::algorithms`]. Lookup by name is a `match`; the fixed algorithms
//! are also listed in a `const` table.

use crate::algorithm::HashAlgorithm;
use crate::algorithms::{
    Blake2b, Blake2s, Md5, Sha1, Sha224, Sha256, Sha384, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    Sha512, Sha512_224, Sha512_256, Shake128, Shake256, Sm3,
};
use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Immutable `{name, digest_size, block_size}` snapshot of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AlgorithmDescriptor {
    /// Canonical algorithm name
    pub name: &'static str,
    /// Output length in bytes
    pub digest_size: usize,
    /// Block size in bytes, if defined
    pub block_size: Option<usize>,
}

/// Any supported hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AlgorithmSpec", into = "AlgorithmDescriptor")]
#[allow(missing_docs)]
pub enum Algorithm {
    Sha1(Sha1),
    Sha512_224(Sha512_224),
    Sha512_256(Sha512_256),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha3_224(Sha3_224),
    Sha3_256(Sha3_256),
    Sha3_384(Sha3_384),
    Sha3_512(Sha3_512),
    Shake128(Shake128),
    Shake256(Shake256),
    Md5(Md5),
    Blake2b(Blake2b),
    Blake2s(Blake2s),
    Sm3(Sm3),
}

impl Algorithm {
    /// Every algorithm whose output length is fixed
    pub const FIXED: [Self; 13] = [
        Self::Sha1(Sha1),
        Self::Sha512_224(Sha512_224),
        Self::Sha512_256(Sha512_256),
        Self::Sha224(Sha224),
        Self::Sha256(Sha256),
        Self::Sha384(Sha384),
        Self::Sha512(Sha512),
        Self::Sha3_224(Sha3_224),
        Self::Sha3_256(Sha3_256),
        Self::Sha3_384(Sha3_384),
        Self::Sha3_512(Sha3_512),
        Self::Md5(Md5),
        Self::Sm3(Sm3),
    ];

    /// Canonical name of every variant
    pub const NAMES: [&'static str; 17] = [
        Sha1::NAME,
        Sha512_224::NAME,
        Sha512_256::NAME,
        Sha224::NAME,
        Sha256::NAME,
        Sha384::NAME,
        Sha512::NAME,
        Sha3_224::NAME,
        Sha3_256::NAME,
        Sha3_384::NAME,
        Sha3_512::NAME,
        Shake128::NAME,
        Shake256::NAME,
        Md5::NAME,
        Blake2b::NAME,
        Blake2s::NAME,
        Sm3::NAME,
    ];

    /// Look an algorithm up by its canonical name
    ///
    /// `digest_size` is required for SHAKE, optional for BLAKE2 (defaults to
    /// the full width) and, when given for a fixed algorithm, must match it.
    ///
    /// # Errors
    ///
    /// - `HashError::UnknownAlgorithm` for an unknown name
    /// - `HashError::MissingParameter` for SHAKE without a digest size
    /// - `HashError::InvalidValue` for a rejected digest size
    pub fn from_name(name: &str, digest_size: Option<usize>) -> Result<Self> {
        let algorithm = match name {
            Shake128::NAME => Self::Shake128(Shake128::new(require(Shake128::NAME, digest_size)?)?),
            Shake256::NAME => Self::Shake256(Shake256::new(require(Shake256::NAME, digest_size)?)?),
            Blake2b::NAME => Self::Blake2b(match digest_size {
                Some(size) => Blake2b::new(size)?,
                None => Blake2b::default(),
            }),
            Blake2s::NAME => Self::Blake2s(match digest_size {
                Some(size) => Blake2s::new(size)?,
                None => Blake2s::default(),
            }),
            _ => {
                let fixed =
                    Self::fixed(name).ok_or_else(|| HashError::UnknownAlgorithm(name.to_owned()))?;
                if let Some(size) = digest_size {
                    crate::validation::pinned(size, fixed.digest_size())?;
                }
                fixed
            }
        };
        Ok(algorithm)
    }

    /// Look up a fixed-output algorithm by name
    #[must_use]
    pub fn fixed(name: &str) -> Option<Self> {
        Self::FIXED.into_iter().find(|algorithm| algorithm.name() == name)
    }

    /// Whether the caller chooses the output length
    #[must_use]
    pub fn is_extendable_output(&self) -> bool {
        matches!(self, Self::Shake128(_) | Self::Shake256(_))
    }

    /// Snapshot of this algorithm's metadata
    #[must_use]
    pub fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            name: self.name(),
            digest_size: self.digest_size(),
            block_size: self.block_size(),
        }
    }

    fn inner(&self) -> &dyn HashAlgorithm {
        match self {
            Self::Sha1(a) => a,
            Self::Sha512_224(a) => a,
            Self::Sha512_256(a) => a,
            Self::Sha224(a) => a,
            Self::Sha256(a) => a,
            Self::Sha384(a) => a,
            Self::Sha512(a) => a,
            Self::Sha3_224(a) => a,
            Self::Sha3_256(a) => a,
            Self::Sha3_384(a) => a,
            Self::Sha3_512(a) => a,
            Self::Shake128(a) => a,
            Self::Shake256(a) => a,
            Self::Md5(a) => a,
            Self::Blake2b(a) => a,
            Self::Blake2s(a) => a,
            Self::Sm3(a) => a,
        }
    }
}

fn require(algorithm: &'static str, digest_size: Option<usize>) -> Result<usize> {
    digest_size.ok_or(HashError::MissingParameter {
        param: "digest_size",
        algorithm,
    })
}

impl HashAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn digest_size(&self) -> usize {
        self.inner().digest_size()
    }

    fn block_size(&self) -> Option<usize> {
        self.inner().block_size()
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Algorithm> for AlgorithmDescriptor {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.descriptor()
    }
}

macro_rules! impl_from_descriptor {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Algorithm {
                fn from(algorithm: $ty) -> Self {
                    Self::$ty(algorithm)
                }
            }
        )*
    };
}

impl_from_descriptor!(
    Sha1, Sha512_224, Sha512_256, Sha224, Sha256, Sha384, Sha512, Sha3_224, Sha3_256, Sha3_384,
    Sha3_512, Shake128, Shake256, Md5, Blake2b, Blake2s, Sm3,
);

/// Untyped algorithm selection, as read from configuration
///
/// `digest_size` is kept as a raw JSON value so the type check runs in the
/// same order as for any other untyped input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSpec {
    /// Canonical algorithm name
    pub name: String,
    /// Requested digest size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_size: Option<Value>,
}

impl AlgorithmSpec {
    /// Spec for `name` with no digest size
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest_size: None,
        }
    }

    /// Attach an untyped digest size
    #[must_use]
    pub fn with_digest_size(mut self, digest_size: impl Into<Value>) -> Self {
        self.digest_size = Some(digest_size.into());
        self
    }
}

impl TryFrom<AlgorithmSpec> for Algorithm {
    type Error = HashError;

    fn try_from(spec: AlgorithmSpec) -> Result<Self> {
        let digest_size = spec
            .digest_size
            .as_ref()
            .map(crate::validation::digest_size_from_value)
            .transpose()?;
        Self::from_name(&spec.name, digest_size)
    }
}

impl From<Algorithm> for AlgorithmSpec {
    fn from(algorithm: Algorithm) -> Self {
        let spec = Self::named(algorithm.name());
        if algorithm.is_extendable_output() {
            spec.with_digest_size(algorithm.digest_size())
        } else {
            spec
        }
    }
}
