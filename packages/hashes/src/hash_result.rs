//! Finalized digest with encoding helpers

use subtle::ConstantTimeEq;

/// Output of a finalized hash context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: &'static str,
    bytes: Vec<u8>,
}

impl HashResult {
    /// Wrap digest bytes produced by `algorithm`
    #[must_use]
    pub fn new(algorithm: &'static str, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// Name of the algorithm that produced this digest
    #[must_use]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the digest bytes
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard base64 encoding
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// URL-safe base64 encoding
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64_url::encode(&self.bytes)
    }

    /// Digest length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Compare against an expected digest in constant time
    #[must_use]
    pub fn verify(&self, expected: &[u8]) -> bool {
        self.bytes.len() == expected.len() && bool::from(self.bytes.ct_eq(expected))
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
