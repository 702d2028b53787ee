//! Async and streaming entry points agree with the synchronous context

use cryypt_hashes::algorithms::{Blake2b, Sha256, Sha384, Shake256};
use cryypt_hashes::{ErrorKind, Hash, HashConfig, HashError, HashResult, Hasher, collect_hash};
use futures::stream;

#[tokio::test]
async fn test_compute_matches_digest() -> Result<(), HashError> {
    let data = vec![7u8; 50_000];

    let async_digest = Hasher::new(Sha256).with_chunk_size(1000)?.compute(data.clone()).await?;

    assert_eq!(async_digest, Hash::digest(Sha256, &data)?);
    Ok(())
}

#[tokio::test]
async fn test_compute_with_result_handler() {
    let len = Hasher::new(Blake2b::default())
        .compute(b"handled".to_vec())
        .on_result(|result| match result {
            Ok(digest) => digest.len(),
            Err(e) => {
                tracing::error!("hash failed: {e}");
                0
            }
        })
        .await;

    assert_eq!(len, 64);
}

#[tokio::test]
async fn test_compute_from_config() -> Result<(), HashError> {
    let config = HashConfig::from_json(
        r#"{"algorithm": {"name": "shake256", "digest_size": 40}, "chunk_size": 3}"#,
    )?;
    let hasher = Hasher::from_config(&config);
    assert_eq!(hasher.algorithm(), config.algorithm);

    let digest = hasher.compute(b"configured input".to_vec()).await?;

    assert_eq!(digest.len(), 40);
    assert_eq!(digest, Hash::digest(Shake256::new(40)?, b"configured input")?);
    Ok(())
}

#[tokio::test]
async fn test_ready_and_error_results() {
    let ready = cryypt_hashes::AsyncHashResult::ready(Ok(HashResult::new("sha256", vec![1, 2])));
    assert_eq!(ready.await.map(HashResult::to_vec).ok(), Some(vec![1, 2]));

    let failed = cryypt_hashes::AsyncHashResult::error(HashError::internal("boom")).await;
    assert!(matches!(failed, Err(HashError::Internal(_))));
}

#[tokio::test]
async fn test_stream_from_builder() -> Result<(), HashError> {
    let chunks = vec![b"one ".to_vec(), b"two ".to_vec(), b"three".to_vec()];

    let result = collect_hash(Hasher::new(Sha384).stream(stream::iter(chunks))?).await?;

    assert_eq!(result.total_bytes, 13);
    assert_eq!(result.hash, Hash::digest(Sha384, b"one two three")?.to_vec());
    Ok(())
}

#[test]
fn test_zero_chunk_size_rejected_like_config() {
    let builder_kind = Hasher::new(Sha256).with_chunk_size(0).err().map(|e| e.kind());
    let config_kind = HashConfig::from_json(r#"{"algorithm": {"name": "sha256"}, "chunk_size": 0}"#)
        .err()
        .map(|e| e.kind());

    assert_eq!(builder_kind, Some(ErrorKind::Configuration));
    assert_eq!(builder_kind, config_kind);
}
