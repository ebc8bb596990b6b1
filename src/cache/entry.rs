//! Cache Entry Module
//!
//! Defines a single cached value together with the moment it was stored.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value and its storage timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// When the value was stored (monotonic clock)
    pub stored_at: Instant,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` right now.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(ttl, Instant::now())
    }

    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is
    /// still fresh; it expires only once the age exceeds the TTL.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string());

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(42u32);
        let ttl = Duration::from_millis(50);

        assert!(!entry.is_expired(ttl));

        // Wait for expiration
        sleep(Duration::from_millis(100));

        assert!(entry.is_expired(ttl));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test");
        let ttl = Duration::from_secs(10);

        // Age equal to the TTL is still fresh
        assert!(!entry.is_expired_at(ttl, entry.stored_at + ttl));
        // One millisecond past it is not
        assert!(entry.is_expired_at(ttl, entry.stored_at + ttl + Duration::from_millis(1)));
    }
}
