//! Bounded LRU - a capacity-bounded key-value cache
//!
//! Evicts the least recently used entry when an insertion would exceed the
//! capacity, and cascades evictions when the capacity shrinks at runtime.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{BoundedLruCache, CacheStats, ControlValue, ReservedKey};
pub use config::{CacheConfig, SeedPolicy};
pub use error::{CacheError, Result};
