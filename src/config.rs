//! Configuration Module
//!
//! Handles loading cache and server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_REAPER_INTERVAL_SECS;

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Advisory capacity ceiling as a size spec (e.g. `100MB`)
    pub max_memory: Option<String>,
    /// Default TTL in seconds for requests without explicit TTL
    pub default_ttl: u64,
    /// Background sweep interval in seconds
    pub reaper_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_MEMORY` - Capacity ceiling size spec (default: unset)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `REAPER_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_memory: env::var("CACHE_MAX_MEMORY")
                .ok()
                .filter(|v| !v.is_empty()),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            reaper_interval: env::var("REAPER_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.reaper_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_memory: None,
            default_ttl: 300,
            reaper_interval: DEFAULT_REAPER_INTERVAL_SECS,
            server_port: 3000,
        }
    }
}
