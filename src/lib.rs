//! ttl_cache - An in-process key-value cache with per-key TTL
//!
//! Expired entries are dropped lazily when read and actively by a background
//! reaper. An optional HTTP wrapper exposes the store over REST.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheStore};
pub use config::Config;
pub use tasks::Reaper;
