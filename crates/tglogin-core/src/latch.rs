//! Single-fulfillment result latch.
//!
//! Bridges the callback-style verification hook into an awaitable result:
//! [`latch`] returns a [`Completer`] handed (via the sink) to application
//! code and a [`Completion`] awaited by the orchestrator. The latch can be
//! completed exactly once and observed exactly once; a second completion
//! attempt is a programmer error and is rejected rather than silently
//! ignored. The completer side may fire before or after the orchestrator
//! starts waiting; both orders resolve.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Misuse of a latch endpoint.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LatchError {
    /// The latch was already completed; the new value was discarded.
    #[error("result latch was already completed")]
    AlreadyCompleted,

    /// Every completer was dropped without firing.
    #[error("result latch was abandoned without completion")]
    Abandoned,
}

/// The writing end of a latch. Cloneable so application code can route it
/// through closures and spawned tasks; all clones share the one fulfillment.
#[derive(Debug)]
pub struct Completer<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Completer<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Completer<T> {
    /// Complete the latch with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LatchError::AlreadyCompleted`] if the latch was completed
    /// before; the first completion wins and `value` is dropped.
    pub fn complete(&self, value: T) -> Result<(), LatchError> {
        let sender = self.tx.lock().take().ok_or(LatchError::AlreadyCompleted)?;
        // The receiver being gone is not the completer's error: the value
        // was accepted, there is just nobody left to observe it.
        let _ = sender.send(value);
        Ok(())
    }
}

/// The reading end of a latch.
#[derive(Debug)]
pub struct Completion<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Completion<T> {
    /// Wait for the latch to be completed.
    ///
    /// # Errors
    ///
    /// Returns [`LatchError::Abandoned`] if every completer was dropped
    /// without firing.
    pub async fn wait(self) -> Result<T, LatchError> {
        self.rx.await.map_err(|_| LatchError::Abandoned)
    }
}

/// Create a connected completer/completion pair.
#[must_use]
pub fn latch<T>() -> (Completer<T>, Completion<T>) {
    let (tx, rx) = oneshot::channel();
    (
        Completer {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        Completion { rx },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_should_resolve_when_completed_before_wait() {
        let (completer, completion) = latch();
        completer.complete(7).expect("test complete");
        assert_eq!(completion.wait().await, Ok(7));
    }

    #[tokio::test]
    async fn test_should_resolve_when_completed_after_wait() {
        let (completer, completion) = latch();
        let task = tokio::spawn(async move { completion.wait().await });
        tokio::task::yield_now().await;
        completer.complete("done").expect("test complete");
        assert_eq!(task.await.expect("test join"), Ok("done"));
    }

    #[tokio::test]
    async fn test_should_reject_second_completion() {
        let (completer, completion) = latch();
        completer.complete(1).expect("test complete");
        assert_eq!(completer.complete(2), Err(LatchError::AlreadyCompleted));
        // The first completion wins.
        assert_eq!(completion.wait().await, Ok(1));
    }

    #[tokio::test]
    async fn test_should_reject_second_completion_from_clone() {
        let (completer, _completion) = latch();
        let other = completer.clone();
        completer.complete(1).expect("test complete");
        assert_eq!(other.complete(2), Err(LatchError::AlreadyCompleted));
    }

    #[tokio::test]
    async fn test_should_report_abandonment() {
        let (completer, completion) = latch::<i32>();
        drop(completer);
        assert_eq!(completion.wait().await, Err(LatchError::Abandoned));
    }
}
