//! TTL Reaper Task
//!
//! Background task that periodically sweeps expired entries out of a store,
//! so memory is reclaimed even for keys that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

// == Reaper ==
/// Handle to a running sweep task.
///
/// The task stops when [`Reaper::shutdown`] or [`Reaper::cancel`] is called,
/// or when the handle is dropped.
#[derive(Debug)]
pub struct Reaper {
    cancellation: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Reaper {
    /// Spawns a task on the current tokio runtime that calls
    /// `purge_expired` on `store` every `interval`.
    ///
    /// The first sweep happens one full interval after spawning.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    ///
    /// # Example
    /// ```ignore
    /// let store = Arc::new(CacheStore::<String>::new());
    /// let reaper = Reaper::spawn(store.clone(), Duration::from_secs(300));
    /// // Later, during shutdown:
    /// reaper.shutdown().await;
    /// ```
    pub fn spawn<V>(store: Arc<CacheStore<V>>, interval: Duration) -> Self
    where
        V: Send + Sync + 'static,
    {
        let cancellation = CancellationToken::new();
        let cancel = cancellation.clone();

        let handle = tokio::spawn(async move {
            info!("Starting TTL reaper with interval of {:?}", interval);

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {}
                }

                let removed = store.purge_expired();

                if removed > 0 {
                    info!("TTL reaper: removed {} expired entries", removed);
                } else {
                    debug!("TTL reaper: no expired entries found");
                }
            }

            info!("TTL reaper stopped");
        });

        Self {
            cancellation,
            handle: Some(handle),
        }
    }

    /// Signals the task to stop without waiting for it.
    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    /// Signals the task to stop and waits for it to exit.
    pub async fn shutdown(mut self) {
        self.cancellation.cancel();

        if let Some(handle) = self.handle.take() {
            if let Err(err) = handle.await {
                warn!(error = ?err, "TTL reaper did not exit cleanly");
            }
        }
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}
