//! Cache Store Module
//!
//! Main cache engine: a HashMap of TTL entries behind a single reader-writer lock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{trace, warn};

use crate::cache::{capacity, CacheEntry};
use crate::error::Result;

/// State guarded by the store lock.
#[derive(Debug)]
struct Inner<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Advisory byte ceiling, not enforced
    max_capacity: Option<u64>,
}

// == Cache Store ==
/// Concurrency-safe key-value storage with per-key TTL.
///
/// Every operation takes the lock only for the duration of one in-memory map
/// operation. `get` takes the write lock because it evicts expired entries;
/// `exists` and `key_count` take the read lock and do not look at expiry.
#[derive(Debug)]
pub struct CacheStore<V> {
    inner: RwLock<Inner<V>>,
}

impl<V> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store with no capacity ceiling.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                max_capacity: None,
            }),
        }
    }

    // == Capacity ==
    /// Sets the advisory capacity ceiling from a size spec such as `100KB`.
    ///
    /// Returns false and keeps the previous ceiling if the spec is malformed.
    pub fn set_max_capacity(&self, size_spec: &str) -> bool {
        match self.try_set_max_capacity(size_spec) {
            Ok(_) => true,
            Err(err) => {
                warn!("Rejected capacity spec: {}", err);
                false
            }
        }
    }

    /// Like [`CacheStore::set_max_capacity`], but returns the parsed ceiling
    /// or the reason the spec was rejected.
    pub fn try_set_max_capacity(&self, size_spec: &str) -> Result<u64> {
        let bytes = capacity::parse_size(size_spec)?;
        self.inner.write().max_capacity = Some(bytes);
        Ok(bytes)
    }

    /// Returns the configured capacity ceiling in bytes.
    pub fn max_capacity(&self) -> Option<u64> {
        self.inner.read().max_capacity
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// An existing entry is fully replaced, value and expiry. If the capacity
    /// check trips the write is dropped without notice.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let mut inner = self.inner.write();

        if inner.is_over_capacity() {
            trace!(key = %key, "Capacity exceeded, dropping write");
            return;
        }

        inner.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Delete ==
    /// Removes `key`, returning whether it was present.
    pub fn delete(&self, key: &str) -> bool {
        self.inner.write().entries.remove(key).is_some()
    }

    // == Exists ==
    /// Reports whether `key` is present, without checking expiry.
    ///
    /// An expired entry that has not yet been read or swept still exists.
    pub fn exists(&self, key: &str) -> bool {
        self.inner.read().entries.contains_key(key)
    }

    // == Flush ==
    /// Drops every entry. Always succeeds.
    pub fn flush(&self) -> bool {
        self.inner.write().entries = HashMap::new();
        true
    }

    // == Key Count ==
    /// Returns the number of stored entries, including unswept expired ones.
    pub fn key_count(&self) -> usize {
        self.inner.read().entries.len()
    }

    // == Purge Expired ==
    /// Removes every entry whose expiry lies before a single instant taken at
    /// the start of the scan.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let mut inner = self.inner.write();
        let now = Instant::now();
        let before = inner.entries.len();

        inner.entries.retain(|_, entry| !entry.is_expired_at(now));

        before - inner.entries.len()
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Returns a clone of the value stored under `key`.
    ///
    /// An expired entry is removed as a side effect and reported exactly like
    /// a missing one.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.write();

        let expired = inner.entries.get(key)?.is_expired();
        if expired {
            inner.entries.remove(key);
            trace!(key = %key, "Evicted expired entry on read");
            return None;
        }

        inner.entries.get(key).map(|entry| entry.value.clone())
    }
}

impl<V> Inner<V> {
    fn is_over_capacity(&self) -> bool {
        if self.entries.is_empty() || self.max_capacity.is_none() {
            return false;
        }

        // TODO: track per-entry byte cost and compare against max_capacity
        false
    }
}
