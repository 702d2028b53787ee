//! Interfaces shared by every hash algorithm descriptor

/// Identity and fixed metadata of a hash algorithm
///
/// Implementors are plain values: the metadata never changes after
/// construction and carries no hidden state.
pub trait HashAlgorithm {
    /// Canonical algorithm name, e.g. `"sha256"`
    fn name(&self) -> &'static str;

    /// Output length in bytes
    fn digest_size(&self) -> usize;

    /// Internal block size in bytes, `None` where the notion does not apply
    /// (the sponge-based SHA-3 and SHAKE families)
    fn block_size(&self) -> Option<usize>;
}

/// Marker for algorithms whose output length is chosen by the caller
pub trait ExtendableOutputFunction: HashAlgorithm {}
