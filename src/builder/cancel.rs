//! Cooperative cancellation for generation operations.
//!
//! A [`CancelHandle`] requests cancellation; the matching
//! [`CancelToken`] is polled by the running operation. Cancellation is
//! a request, not forced termination: the operation observes the token
//! at defined points and winds down on its own.

use std::sync::Arc;

use tokio::sync::watch;

/// Creates a linked cancellation handle and token.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (
        CancelHandle { tx: Arc::new(tx) },
        CancelToken { rx },
    )
}

/// Requests cancellation of the operation holding the paired token.
///
/// Cheap to clone; all clones control the same operation.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    /// Requests cancellation. Idempotent; a no-op once the operation
    /// has finished.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Returns true if cancellation has been requested.
    pub fn is_cancel_requested(&self) -> bool {
        *self.tx.borrow()
    }

    /// Creates an additional token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }
}

/// Observed by the running operation at its cancellation points.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Returns true if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested.
    ///
    /// If every handle is dropped without cancelling, this future never
    /// resolves; the operation simply runs to completion.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_uncancelled() {
        let (handle, token) = cancel_pair();
        assert!(!handle.is_cancel_requested());
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_is_observed() {
        let (handle, mut token) = cancel_pair();
        handle.cancel();

        assert!(token.is_cancelled());
        token.cancelled().await;
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let (handle, token) = cancel_pair();
        let second = handle.clone();
        second.cancel();

        assert!(handle.is_cancel_requested());
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_extra_tokens_observe_cancel() {
        let (handle, _token) = cancel_pair();
        let mut extra = handle.token();
        handle.cancel();

        extra.cancelled().await;
    }
}
