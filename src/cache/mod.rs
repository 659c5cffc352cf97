//! Cache Module
//!
//! Provides in-memory caching with per-key TTL, lazy expiration on read and
//! active expiration through a background reaper.

pub mod capacity;
mod entry;
mod handle;
mod store;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub use handle::Cache;
pub use store::CacheStore;

// == Public Constants ==
/// Default interval between background sweeps (5 minutes)
pub const DEFAULT_REAPER_INTERVAL_SECS: u64 = 300;
