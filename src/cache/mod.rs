//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and runtime resizing.

mod access;
mod lru;
mod reserved;
mod stats;
mod store;


// Re-export public types
pub use access::ControlValue;
pub use lru::RecencyOrder;
pub use reserved::{is_reserved, ReservedKey};
pub use stats::CacheStats;
pub use store::BoundedLruCache;
