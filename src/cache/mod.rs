//! Cache Module
//!
//! Provides a small generic in-memory cache with a fixed TTL and lazy,
//! read-time expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;
