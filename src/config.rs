//! Configuration Module
//!
//! Handles loading cache configuration from environment variables or serde.

use std::env;

use serde::Deserialize;

/// How a seed larger than the capacity is handled at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Evict the earliest seed entries until the seed fits.
    #[default]
    Trim,
    /// Keep the whole seed; eviction waits for the next write or resize.
    Retain,
}

impl SeedPolicy {
    /// Parses `trim` / `retain`, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trim" => Some(Self::Trim),
            "retain" => Some(Self::Retain),
            _ => None,
        }
    }
}

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of ordinary entries; validated when the cache is built
    pub capacity: i64,
    /// Handling of oversized seeds
    pub seed_policy: SeedPolicy,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `LRU_SEED_POLICY` - `trim` or `retain` (default: trim)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("LRU_CAPACITY")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
            seed_policy: env::var("LRU_SEED_POLICY")
                .ok()
                .and_then(|v| SeedPolicy::parse(&v))
                .unwrap_or(defaults.seed_policy),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            seed_policy: SeedPolicy::Trim,
        }
    }
}
