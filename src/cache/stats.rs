//! Cache Statistics Module
//!
//! Counts lookups, writes and removals, separating evictions from explicit deletes.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing cache traffic since construction or the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups through `get` that found the key
    pub hits: u64,
    /// Lookups through `get` that found nothing
    pub misses: u64,
    /// Writes that created a new key
    pub insertions: u64,
    /// Writes that replaced the value of an existing key
    pub updates: u64,
    /// Entries dropped by the LRU policy (insert pressure or resize)
    pub evictions: u64,
    /// Entries dropped by an explicit delete
    pub removals: u64,
    /// Current number of ordinary entries
    pub entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Total number of `get` calls on ordinary keys.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    pub(crate) fn record_update(&mut self) {
        self.updates += 1;
    }

    pub(crate) fn record_evictions(&mut self, count: usize) {
        self.evictions += count as u64;
    }

    pub(crate) fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub(crate) fn record_removals(&mut self, count: usize) {
        self.removals += count as u64;
    }
}
