//! Hand-off of blocking work from the owning (front-end) context.
//!
//! Distrobox calls can run for minutes. The owning context submits the work
//! with [`offload`], stays responsive (spinner, signals), and receives the
//! result through a single-consumer channel by awaiting [`Pending::wait`].
//! There is no cancellation and no timeout.

use std::future::Future;

use anyhow::Result;
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors raised by the hand-off itself, not by the offloaded work.
#[derive(Debug, Error)]
pub enum OffloadError {
    #[error("background worker stopped before returning a result")]
    WorkerLost,
}

/// Result of offloaded work, not yet delivered.
#[must_use = "offloaded work is only observed through Pending::wait"]
pub struct Pending<T> {
    rx: oneshot::Receiver<Result<T>>,
}

/// Run `work` on a runtime worker and return a handle to its result.
///
/// Must be called from inside a tokio runtime.
pub fn offload<F, T>(work: F) -> Pending<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        // Receiver gone means the owner stopped caring; nothing to report.
        let _ = tx.send(work.await);
    });
    Pending { rx }
}

impl<T> Pending<T> {
    /// Wait for the worker's result.
    ///
    /// # Errors
    ///
    /// Returns the work's own error, or [`OffloadError::WorkerLost`] if the
    /// worker panicked before sending.
    pub async fn wait(self) -> Result<T> {
        self.rx.await.map_err(|_| OffloadError::WorkerLost)?
    }
}
