//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and a
//! runtime-adjustable capacity.

use std::collections::HashMap;
use std::mem;

use tracing::{debug, info, warn};

use crate::cache::{is_reserved, CacheStats, RecencyOrder};
use crate::config::{CacheConfig, SeedPolicy};
use crate::error::{CacheError, Result};

/// Stored value plus its position in the recency order.
#[derive(Debug)]
struct Slot<V> {
    value: V,
    node: usize,
}

// == Bounded LRU Cache ==
/// Capacity-bounded map from string keys to opaque values with LRU eviction.
///
/// Every read or write of an ordinary key refreshes its recency. Inserting a
/// new key while `len() >= capacity()` first evicts the least recently used
/// entry. Capacity and size live in dedicated fields; their names, and the
/// names of the control operations (see [`ReservedKey`](crate::cache::ReservedKey)), can never be stored
/// as data.
///
/// Not thread-safe. Wrap the whole cache in one lock if it must be shared:
/// `get` mutates the recency order.
#[derive(Debug)]
pub struct BoundedLruCache<V> {
    /// Key-value storage
    entries: HashMap<String, Slot<V>>,
    /// Access order, least recent first
    order: RecencyOrder,
    /// Traffic counters
    stats: CacheStats,
    /// Maximum number of ordinary entries
    capacity: usize,
}

impl<V> BoundedLruCache<V> {
    // == Constructor ==
    /// Creates a cache seeded with `seed`, recorded in iteration order (first
    /// item = least recently used).
    ///
    /// A seed larger than `capacity` is trimmed from the least recent end.
    /// Use [`BoundedLruCache::with_seed_policy`] to keep it whole instead.
    ///
    /// # Errors
    /// - `InvalidCapacity` if `capacity` is negative
    /// - `ReservedKeyConflict` if the seed names a reserved key
    pub fn new<K, I>(capacity: i64, seed: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_seed_policy(capacity, SeedPolicy::Trim, seed)
    }

    /// Creates an empty cache.
    pub fn with_capacity(capacity: i64) -> Result<Self> {
        Self::new(capacity, std::iter::empty::<(String, V)>())
    }

    /// Creates a cache from loaded configuration.
    pub fn from_config<K, I>(config: &CacheConfig, seed: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_seed_policy(config.capacity, config.seed_policy, seed)
    }

    /// Creates a cache with an explicit policy for oversized seeds.
    ///
    /// Duplicate seed keys keep the last value, positioned as if it had been
    /// written last.
    pub fn with_seed_policy<K, I>(capacity: i64, policy: SeedPolicy, seed: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let capacity = validate_capacity(capacity)?;
        let mut cache = Self {
            entries: HashMap::new(),
            order: RecencyOrder::new(),
            stats: CacheStats::new(),
            capacity,
        };

        for (key, value) in seed {
            let key = key.into();
            if is_reserved(&key) {
                warn!("Rejected reserved key in seed: {}", key);
                return Err(CacheError::ReservedKeyConflict(key));
            }
            match cache.entries.get_mut(&key) {
                Some(slot) => {
                    slot.value = value;
                    cache.order.touch(slot.node);
                }
                None => {
                    let node = cache.order.push_back(key.clone());
                    cache.entries.insert(key, Slot { value, node });
                }
            }
        }

        if policy == SeedPolicy::Trim {
            let trimmed = cache.evict_down_to(capacity).len();
            if trimmed > 0 {
                debug!("Trimmed {} seed entries to fit capacity {}", trimmed, capacity);
            }
        }

        debug!(
            "Cache created: capacity={}, entries={}, seed_policy={:?}",
            cache.capacity,
            cache.len(),
            policy
        );
        Ok(cache)
    }

    // == Get ==
    /// Retrieves a value and marks the key most recently used.
    ///
    /// Absent keys return `None` without touching the recency order. Reserved
    /// names are never stored, so they also return `None`.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if is_reserved(key) {
            return None;
        }
        match self.entries.get(key) {
            Some(slot) => {
                self.order.touch(slot.node);
                self.stats.record_hit();
                Some(&slot.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Like [`get`](Self::get), but hands out a mutable reference.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if is_reserved(key) {
            return None;
        }
        match self.entries.get_mut(key) {
            Some(slot) => {
                self.order.touch(slot.node);
                self.stats.record_hit();
                Some(&mut slot.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Reads a value without changing recency or stats.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|slot| &slot.value)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Set ==
    /// Stores a value and marks the key most recently used.
    ///
    /// Updating an existing key returns its previous value and never evicts.
    /// Inserting a new key while the cache is full evicts the least recently
    /// used entry first. A zero-capacity cache retains nothing.
    ///
    /// # Errors
    /// `ReservedKeyConflict` if `key` is a control name; nothing is mutated.
    /// Resizing goes through [`resize`](Self::resize).
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let key = key.into();
        if is_reserved(&key) {
            warn!("Rejected write to reserved key: {}", key);
            return Err(CacheError::ReservedKeyConflict(key));
        }

        if let Some(slot) = self.entries.get_mut(&key) {
            self.order.touch(slot.node);
            self.stats.record_update();
            return Ok(Some(mem::replace(&mut slot.value, value)));
        }

        if self.capacity == 0 {
            // A retained seed may still hold entries
            self.evict_down_to(0);
            debug!("Dropped write to {} on zero-capacity cache", key);
            self.stats.record_evictions(1);
            return Ok(None);
        }

        if self.order.len() >= self.capacity {
            self.evict_oldest();
        }

        let node = self.order.push_back(key.clone());
        self.entries.insert(key, Slot { value, node });
        self.stats.record_insertion();
        Ok(None)
    }

    // == Delete ==
    /// Removes an entry, returning whether it was present.
    ///
    /// Reserved names are a no-op returning `false`.
    pub fn delete(&mut self, key: &str) -> bool {
        if is_reserved(key) {
            debug!("Ignored delete of reserved key: {}", key);
            return false;
        }
        match self.entries.remove(key) {
            Some(slot) => {
                self.order.remove(slot.node);
                self.stats.record_removal();
                true
            }
            None => false,
        }
    }

    // == Resize ==
    /// Changes the capacity, evicting least recently used entries until the
    /// cache fits. Growing never evicts.
    ///
    /// Returns the evicted entries, least recent first.
    ///
    /// # Errors
    /// `InvalidCapacity` if `new_capacity` is negative; nothing is mutated.
    pub fn resize(&mut self, new_capacity: i64) -> Result<Vec<(String, V)>> {
        let new_capacity = validate_capacity(new_capacity)?;
        let old_capacity = mem::replace(&mut self.capacity, new_capacity);
        let evicted = self.evict_down_to(new_capacity);

        info!(
            "Cache resized: capacity {} -> {}, evicted {} entries",
            old_capacity,
            new_capacity,
            evicted.len()
        );
        Ok(evicted)
    }

    // == Accessors ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of ordinary entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.order.iter()
    }

    /// Drops every entry; capacity is unchanged.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.record_removals(dropped);
    }

    // == Stats ==
    /// Returns a snapshot of the traffic counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.entries = self.len();
        stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }

    // == Eviction ==
    fn evict_oldest(&mut self) -> Option<(String, V)> {
        let key = self.order.pop_front()?;
        let slot = self.entries.remove(&key)?;
        self.stats.record_evictions(1);
        debug!("Evicted least recently used key: {}", key);
        Some((key, slot.value))
    }

    fn evict_down_to(&mut self, limit: usize) -> Vec<(String, V)> {
        let mut evicted = Vec::with_capacity(self.len().saturating_sub(limit));
        while self.len() > limit {
            match self.evict_oldest() {
                Some(entry) => evicted.push(entry),
                None => break,
            }
        }
        evicted
    }

    /// Checks the size, ordering and bound invariants. Test support only.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let keys: Vec<&str> = self.keys().collect();
        let unique: std::collections::HashSet<&str> = keys.iter().copied().collect();

        assert_eq!(self.len(), self.entries.len(), "size != stored entries");
        assert_eq!(keys.len(), self.entries.len(), "order length != stored entries");
        assert_eq!(unique.len(), keys.len(), "duplicate key in recency order");
        for key in &keys {
            assert!(self.entries.contains_key(*key), "ordered key {} not stored", key);
            assert!(!is_reserved(key), "reserved key {} tracked", key);
        }
    }
}

/// Converts a caller-supplied capacity, rejecting negatives.
fn validate_capacity(capacity: i64) -> Result<usize> {
    match usize::try_from(capacity) {
        Ok(capacity) => Ok(capacity),
        Err(_) => {
            warn!("Rejected invalid capacity: {}", capacity);
            Err(CacheError::InvalidCapacity(capacity))
        }
    }
}
