//! Incremental hashing over a stream of byte chunks

use crate::context::{Hash, HashContext};
use crate::registry::Algorithm;
use crate::{HashError, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Stream adapter that absorbs each input chunk as it arrives
    ///
    /// Yields one [`StreamHashChunk`] per input chunk, then a final chunk
    /// carrying the digest.
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        algorithm: Algorithm,
        state: Option<Hash>,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Wrap `input`, hashing with the default backend
    ///
    /// # Errors
    ///
    /// Returns `HashError::UnsupportedAlgorithm` if the backend rejects
    /// `algorithm`.
    pub fn new(input: S, algorithm: impl Into<Algorithm>) -> Result<Self> {
        let algorithm = algorithm.into();
        Ok(Self {
            input,
            algorithm,
            state: Some(Hash::new(algorithm)?),
            total_bytes: 0,
        })
    }

    /// Bytes absorbed so far
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Outcome of a fully consumed [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final digest
    pub hash: Vec<u8>,
    /// Total bytes processed
    pub total_bytes: u64,
    /// Algorithm used
    pub algorithm: Algorithm,
}

/// Progress item yielded by [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes absorbed from this chunk
    pub bytes_processed: u64,
    /// Bytes absorbed so far
    pub total_bytes: u64,
    /// Whether this is the last item
    pub is_final: bool,
    /// Digest, present only on the final item
    pub digest: Option<Vec<u8>>,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();

        let Some(hash) = this.state.as_mut() else {
            return Poll::Ready(None);
        };

        match this.input.poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes += chunk_size;
                hash.update(&chunk);

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    is_final: false,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                let Some(hash) = this.state.take() else {
                    return Poll::Ready(None);
                };
                let total_bytes = *this.total_bytes;
                let item = hash.finalize().map(|digest| {
                    tracing::debug!(
                        algorithm = %this.algorithm,
                        total_bytes,
                        "streaming hash complete"
                    );
                    StreamHashChunk {
                        bytes_processed: 0,
                        total_bytes,
                        is_final: true,
                        digest: Some(digest.to_vec()),
                    }
                });
                Poll::Ready(Some(item))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Drive a [`StreamingHasher`] to completion
///
/// # Errors
///
/// Returns `HashError::StreamProcessing` if the stream ends without a final
/// digest, or any error the hasher yields.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    let algorithm = hasher.algorithm;
    let mut total_bytes = 0;
    let mut final_hash = None;

    while let Some(chunk_result) = hasher.next().await {
        let chunk = chunk_result?;
        total_bytes = chunk.total_bytes;

        if chunk.is_final {
            final_hash = chunk.digest;
            break;
        }
    }

    let hash = final_hash.ok_or_else(|| {
        HashError::StreamProcessing("Stream ended without producing final hash".to_string())
    })?;

    Ok(StreamHashResult {
        hash,
        total_bytes,
        algorithm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::HashAlgorithm;
    use crate::algorithms::{Sha256, Sha3_512, Shake256};
    use futures::stream;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn test_streaming_matches_one_shot() -> Result<()> {
        let data_chunks = vec![
            b"Hello ".to_vec(),
            b"streaming ".to_vec(),
            b"world!".to_vec(),
        ];
        let input_stream = stream::iter(data_chunks.clone());

        let stream_result = collect_hash(StreamingHasher::new(input_stream, Sha256)?).await?;

        let combined_data: Vec<u8> = data_chunks.into_iter().flatten().collect();
        let batch_hash = Hash::digest(Sha256, &combined_data)?;

        assert_eq!(stream_result.hash, batch_hash.as_bytes());
        assert_eq!(stream_result.total_bytes, combined_data.len() as u64);
        assert_eq!(stream_result.algorithm, Algorithm::from(Sha256));
        Ok(())
    }

    #[tokio::test]
    async fn test_streaming_chunk_processing() -> Result<()> {
        let data_chunks = vec![b"chunk1".to_vec(), b"chunk2".to_vec(), b"chunk3".to_vec()];
        let mut stream_hasher = StreamingHasher::new(stream::iter(data_chunks), Sha3_512)?;
        let mut chunk_count = 0;
        let mut bytes_seen = 0;

        while let Some(chunk_result) = stream_hasher.next().await {
            let chunk = chunk_result?;

            if chunk.is_final {
                assert_eq!(chunk.digest.map(|d| d.len()), Some(64));
                break;
            }
            chunk_count += 1;
            bytes_seen += chunk.bytes_processed;
            assert_eq!(stream_hasher.total_bytes(), chunk.total_bytes);
            assert!(chunk.digest.is_none(), "non-final chunks carry no digest");
        }

        assert_eq!(chunk_count, 3);
        assert_eq!(bytes_seen, 18);
        assert_eq!(stream_hasher.total_bytes(), 18);
        assert!(stream_hasher.next().await.is_none(), "stream is fused after the digest");
        Ok(())
    }

    #[tokio::test]
    async fn test_streaming_xof_length() -> Result<()> {
        let shake = Shake256::new(100)?;
        let chunks = vec![b"abc".to_vec(), Vec::new(), b"def".to_vec()];

        let result = collect_hash(StreamingHasher::new(stream::iter(chunks), shake)?).await?;

        assert_eq!(result.hash.len(), shake.digest_size());
        assert_eq!(result.hash, Hash::digest(shake, b"abcdef")?.to_vec());
        Ok(())
    }
}
