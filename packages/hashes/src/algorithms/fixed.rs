//! Fixed-output algorithm descriptors

use crate::algorithm::HashAlgorithm;

macro_rules! fixed_algorithm {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $digest_size:literal, $block_size:expr) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl $ty {
            /// Canonical algorithm name
            pub const NAME: &'static str = $name;
            /// Output length in bytes
            pub const DIGEST_SIZE: usize = $digest_size;
            /// Block size in bytes, if the algorithm defines one
            pub const BLOCK_SIZE: Option<usize> = $block_size;
        }

        impl HashAlgorithm for $ty {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn digest_size(&self) -> usize {
                Self::DIGEST_SIZE
            }

            fn block_size(&self) -> Option<usize> {
                Self::BLOCK_SIZE
            }
        }
    };
}

fixed_algorithm!(
    /// SHA-1. Broken for collision resistance; kept for legacy interop.
    Sha1, "sha1", 20, Some(64)
);
fixed_algorithm!(
    /// SHA-512 truncated to 224 bits
    Sha512_224, "sha512-224", 28, Some(128)
);
fixed_algorithm!(
    /// SHA-512 truncated to 256 bits
    Sha512_256, "sha512-256", 32, Some(128)
);
fixed_algorithm!(
    /// SHA-224
    Sha224, "sha224", 28, Some(64)
);
fixed_algorithm!(
    /// SHA-256
    Sha256, "sha256", 32, Some(64)
);
fixed_algorithm!(
    /// SHA-384
    Sha384, "sha384", 48, Some(128)
);
fixed_algorithm!(
    /// SHA-512
    Sha512, "sha512", 64, Some(128)
);
fixed_algorithm!(
    /// SHA3-224
    Sha3_224, "sha3-224", 28, None
);
fixed_algorithm!(
    /// SHA3-256
    Sha3_256, "sha3-256", 32, None
);
fixed_algorithm!(
    /// SHA3-384
    Sha3_384, "sha3-384", 48, None
);
fixed_algorithm!(
    /// SHA3-512
    Sha3_512, "sha3-512", 64, None
);
fixed_algorithm!(
    /// MD5. Broken; kept for legacy interop.
    Md5, "md5", 16, Some(64)
);
fixed_algorithm!(
    /// SM3 (GB/T 32905-2016)
    Sm3, "sm3", 32, Some(64)
);
