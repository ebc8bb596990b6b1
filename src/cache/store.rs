//! Cache Store Module
//!
//! Generic key-value cache whose entries live for a fixed TTL.
//!
//! There is no background sweeper and no capacity bound: an entry is only
//! evicted when it is read after its TTL has elapsed, or replaced by `set`.
//! The cache is not synchronized; callers sharing one instance across tasks
//! must wrap it in a lock.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// In-memory cache with a single TTL fixed at construction.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Lookup statistics
    stats: CacheStats,
    /// Maximum age of a value before it is considered stale
    ttl: Duration,
}

impl<T> TtlCache<T> {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Set ==
    /// Stores a value stamped with the current time.
    ///
    /// Any previous entry for the key is replaced and its age reset.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        debug!("Cache set: {}", key);
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the value for `key` if present and no older than the TTL.
    ///
    /// A stale entry is removed as a side effect, so later reads of the same
    /// key also miss until it is set again.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                debug!("Cache miss: {}", key);
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            debug!("Cache entry expired: {}", key);
            return None;
        }

        self.stats.record_hit();
        debug!("Cache hit: {}", key);
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == TTL ==
    /// Returns the TTL this cache was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the lookup statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the number of stored entries, including stale ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
