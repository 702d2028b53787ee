//! Futures returned by [`crate::Hasher::compute`]

use crate::{HashError, HashResult, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Digest being computed on a spawned task
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<HashResult>>,
}

/// Digest being computed, passed through a caller handler on completion
pub struct AsyncHashResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<HashResult>>,
    handler: Option<F>,
}

impl AsyncHashResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<HashResult>>) -> Self {
        Self { receiver }
    }

    /// Already-completed result
    #[must_use]
    pub fn ready(result: Result<HashResult>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Already-failed result
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }

    /// Resolve to whatever `handler` makes of the result
    pub fn on_result<F, T>(self, handler: F) -> AsyncHashResultWithHandler<F>
    where
        F: FnOnce(Result<HashResult>) -> T,
    {
        AsyncHashResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

fn task_dropped() -> HashError {
    HashError::internal("Hash computation task dropped")
}

impl Future for AsyncHashResult {
    type Output = Result<HashResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(task_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncHashResultWithHandler<F>
where
    F: FnOnce(Result<HashResult>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Polling after completion is a caller bug; stay pending rather than panic
        if this.handler.is_none() {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(task_dropped()),
            Poll::Pending => return Poll::Pending,
        };
        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}
