//! Cache Handle Module
//!
//! Ties a store to the lifetime of its background reaper.

use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::tasks::Reaper;

// == Cache ==
/// A store together with the reaper that sweeps it.
///
/// Construction starts the reaper, [`Cache::shutdown`] stops it. All store
/// operations are reachable through `Deref`.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<CacheStore<V>>,
    reaper: Reaper,
}

impl<V> Cache<V>
where
    V: Send + Sync + 'static,
{
    /// Creates an empty cache swept every `reaper_interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(reaper_interval: Duration) -> Self {
        let store = Arc::new(CacheStore::new());
        let reaper = Reaper::spawn(store.clone(), reaper_interval);
        Self { store, reaper }
    }

    /// Creates a cache from configuration, applying the capacity ceiling if set.
    pub fn from_config(config: &Config) -> Self {
        let cache = Self::new(Duration::from_secs(config.reaper_interval));
        if let Some(spec) = &config.max_memory {
            // Rejection is logged by the store; the cache stays unbounded
            cache.store.set_max_capacity(spec);
        }
        cache
    }

    /// Returns the shared store, for collaborators that outlive a borrow.
    pub fn store(&self) -> Arc<CacheStore<V>> {
        self.store.clone()
    }

    /// Stops the reaper and waits for it to exit.
    pub async fn shutdown(self) {
        self.reaper.shutdown().await;
    }
}

impl<V> Deref for Cache<V> {
    type Target = CacheStore<V>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
