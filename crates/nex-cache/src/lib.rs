//! Entity cache abstraction for nex.
//!
//! This crate provides generic caching traits that decouple cache consumers
//! from the underlying storage mechanism. Two traits form the core API:
//!
//! - [`Cache`]: Factory for named cache buckets
//! - [`CacheBucket`]: Keyed blob store
//!
//! The export pipeline opens one bucket per entity kind (`page`, `block`,
//! `database`, `block_children`, `database_children`) and stores each entity
//! as a JSON blob under its canonical id. Entries are written once per crawl
//! session and never deleted.
//!
//! # Implementations
//!
//! - [`FileCache`]: File-based implementation with version validation
//! - [`MemoryCache`]: In-memory implementation (tests, cache-less runs)
//! - [`NullCache`] / [`NullCacheBucket`]: No-op implementations (always miss)
//!
//! # Example
//!
//! ```
//! use nex_cache::{Cache, MemoryCache};
//!
//! let cache = MemoryCache::new();
//! let bucket = cache.bucket("page");
//! bucket.set("b7a0c1d2-0000-0000-0000-000000000001", b"{}");
//! assert!(bucket.get("b7a0c1d2-0000-0000-0000-000000000001").is_some());
//! ```

mod file;
mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

/// A named partition within a [`Cache`].
///
/// Each bucket stores key-value pairs. `set` is insert-or-replace and `get`
/// for a key written earlier in the same process must observe that value.
/// Implementations must tolerate concurrent `get`/`set` on distinct keys.
pub trait CacheBucket: Send + Sync {
    /// Retrieve a cached value, or `None` on miss.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Store a value, overwriting any existing entry for the same key.
    ///
    /// Storage failures are not surfaced to the caller; the cache is an
    /// optimization and a failed write only costs a refetch.
    fn set(&self, key: &str, value: &[u8]);
}

/// Factory for named cache [`CacheBucket`]s.
///
/// A `Cache` produces buckets that are logically isolated from each other.
/// Calling `bucket` multiple times with the same name may return independent
/// handles that share the same underlying storage.
pub trait Cache: Send + Sync {
    /// Open or create a named bucket.
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket>;
}

/// No-op [`CacheBucket`] that never stores or retrieves data.
///
/// Every `get` returns `None`; every `set` is silently discarded.
/// Used as the bucket type for [`NullCache`].
pub struct NullCacheBucket;

impl CacheBucket for NullCacheBucket {
    fn get(&self, _key: &str) -> Option<Vec<u8>> {
        None
    }

    fn set(&self, _key: &str, _value: &[u8]) {}
}

/// No-op [`Cache`] that always returns [`NullCacheBucket`]s.
///
/// Use when caching is disabled. Every fetch goes to the remote source.
pub struct NullCache;

impl Cache for NullCache {
    fn bucket(&self, _name: &str) -> Box<dyn CacheBucket> {
        Box::new(NullCacheBucket)
    }
}
