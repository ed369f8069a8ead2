//! In-memory cache implementation.
//!
//! [`MemoryCache`] keeps every bucket in a process-local map. Used by tests
//! and by single-shot runs that want write-through semantics without leaving
//! files behind.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Cache, CacheBucket};

type Entries = Arc<RwLock<HashMap<String, Vec<u8>>>>;

/// In-memory [`Cache`].
///
/// Buckets handed out for the same name share storage, so a fetcher and a
/// test assertion observe the same entries.
#[derive(Default)]
pub struct MemoryCache {
    buckets: RwLock<HashMap<String, Entries>>,
}

impl MemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        let mut buckets = self
            .buckets
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entries = buckets.entry(name.to_owned()).or_default();
        Box::new(MemoryCacheBucket {
            entries: Arc::clone(entries),
        })
    }
}

/// A single in-memory bucket.
struct MemoryCacheBucket {
    entries: Entries,
}

impl CacheBucket for MemoryCacheBucket {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_vec());
    }
}
