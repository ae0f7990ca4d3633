//! Map-like Access Module
//!
//! A name-based read/write/remove surface for callers that treat the cache as
//! a plain property map. Control names are intercepted here: `capacity` and
//! `size` read back as values, and writing `capacity` resizes the cache.

use tracing::warn;

use crate::cache::{BoundedLruCache, ReservedKey};
use crate::error::{CacheError, Result};

/// Values that can carry the cache's control numbers.
pub trait ControlValue: Sized {
    /// Builds the value reported for `capacity` and `size`.
    fn from_count(count: usize) -> Self;

    /// Interprets the value as a requested capacity, if it is an integer.
    fn as_capacity(&self) -> Option<i64>;

    /// Short rendering used when a capacity write is rejected.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl ControlValue for i64 {
    fn from_count(count: usize) -> Self {
        i64::try_from(count).unwrap_or(i64::MAX)
    }

    fn as_capacity(&self) -> Option<i64> {
        Some(*self)
    }
}

impl ControlValue for u64 {
    fn from_count(count: usize) -> Self {
        count as u64
    }

    fn as_capacity(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl ControlValue for usize {
    fn from_count(count: usize) -> Self {
        count
    }

    fn as_capacity(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl ControlValue for String {
    fn from_count(count: usize) -> Self {
        count.to_string()
    }

    fn as_capacity(&self) -> Option<i64> {
        self.trim().parse().ok()
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl ControlValue for serde_json::Value {
    fn from_count(count: usize) -> Self {
        serde_json::Value::from(count)
    }

    fn as_capacity(&self) -> Option<i64> {
        self.as_i64()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<V: ControlValue + Clone> BoundedLruCache<V> {
    // == Read ==
    /// Reads a name the way a property lookup would.
    ///
    /// `capacity` and `size` return the control values without touching
    /// recency; other control names return `None`. Ordinary keys behave as
    /// [`get`](Self::get).
    pub fn read(&mut self, key: &str) -> Option<V> {
        match ReservedKey::parse(key) {
            Some(ReservedKey::Capacity) => Some(V::from_count(self.capacity())),
            Some(ReservedKey::Size) => Some(V::from_count(self.len())),
            Some(_) => None,
            None => self.get(key).cloned(),
        }
    }

    // == Write ==
    /// Writes a name the way a property assignment would.
    ///
    /// Writing `capacity` resizes the cache; other control names are rejected.
    ///
    /// # Errors
    /// - `MalformedCapacity` if a `capacity` write is not an integer
    /// - `InvalidCapacity` if it is negative
    /// - `ReservedKeyConflict` for any other control name
    pub fn write(&mut self, key: &str, value: V) -> Result<()> {
        match ReservedKey::parse(key) {
            Some(ReservedKey::Capacity) => {
                let requested = value.as_capacity().ok_or_else(|| {
                    warn!("Rejected non-integer capacity write");
                    CacheError::MalformedCapacity(value.describe())
                })?;
                self.resize(requested).map(drop)
            }
            Some(reserved) => {
                warn!("Rejected write to reserved key: {}", reserved);
                Err(CacheError::ReservedKeyConflict(reserved.to_string()))
            }
            None => self.set(key, value).map(drop),
        }
    }

    // == Remove ==
    /// Deletes a name the way a property delete would; see [`delete`](Self::delete).
    pub fn remove(&mut self, key: &str) -> bool {
        self.delete(key)
    }
}
