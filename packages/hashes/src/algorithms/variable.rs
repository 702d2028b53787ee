//! Descriptors whose digest size is supplied by the caller
//!
//! SHAKE accepts any positive length. The BLAKE2 descriptors take a digest
//! size too, but only the full-width output is accepted: 64 bytes for
//! BLAKE2b and 32 for BLAKE2s.

use crate::Result;
use crate::algorithm::{ExtendableOutputFunction, HashAlgorithm};
use crate::validation::{self, digest_size_from_value};
use serde_json::Value;

macro_rules! variable_algorithm {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $block_size:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty {
            digest_size: usize,
        }

        impl $ty {
            /// Canonical algorithm name
            pub const NAME: &'static str = $name;
            /// Block size in bytes, if the algorithm defines one
            pub const BLOCK_SIZE: Option<usize> = $block_size;

            /// Create a descriptor with a validated digest size
            ///
            /// # Errors
            ///
            /// Returns `HashError::InvalidValue` if `digest_size` is outside
            /// the range this algorithm permits.
            pub fn new(digest_size: usize) -> Result<Self> {
                let check: fn(usize) -> Result<usize> = $check;
                Ok(Self {
                    digest_size: check(digest_size)?,
                })
            }

            /// Create a descriptor from an untyped configuration value
            ///
            /// # Errors
            ///
            /// Returns `HashError::InvalidType` if `value` is not an integer,
            /// otherwise the same errors as [`Self::new`].
            pub fn from_value(value: &Value) -> Result<Self> {
                Self::new(digest_size_from_value(value)?)
            }
        }

        impl HashAlgorithm for $ty {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn digest_size(&self) -> usize {
                self.digest_size
            }

            fn block_size(&self) -> Option<usize> {
                Self::BLOCK_SIZE
            }
        }
    };
}

variable_algorithm!(
    /// SHAKE128 extendable-output function
    Shake128, "shake128", None, validation::positive
);
variable_algorithm!(
    /// SHAKE256 extendable-output function
    Shake256, "shake256", None, validation::positive
);
variable_algorithm!(
    /// BLAKE2b
    Blake2b, "blake2b", Some(128), |size| validation::pinned(size, Blake2b::MAX_DIGEST_SIZE)
);
variable_algorithm!(
    /// BLAKE2s
    Blake2s, "blake2s", Some(64), |size| validation::pinned(size, Blake2s::MAX_DIGEST_SIZE)
);

impl ExtendableOutputFunction for Shake128 {}
impl ExtendableOutputFunction for Shake256 {}

impl Blake2b {
    /// Largest (and only accepted) BLAKE2b digest size
    pub const MAX_DIGEST_SIZE: usize = 64;
}

impl Blake2s {
    /// Largest (and only accepted) BLAKE2s digest size
    pub const MAX_DIGEST_SIZE: usize = 32;
}

impl Default for Blake2b {
    fn default() -> Self {
        Self {
            digest_size: Self::MAX_DIGEST_SIZE,
        }
    }
}

impl Default for Blake2s {
    fn default() -> Self {
        Self {
            digest_size: Self::MAX_DIGEST_SIZE,
        }
    }
}
