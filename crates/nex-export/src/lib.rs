//! Cached fetching and graph crawling.
//!
//! Two pieces sit between the remote [`Source`](nex_notion::Source) and the
//! renderer:
//!
//! - [`CachedFetcher`]: one fetch interface per entity kind with
//!   write-through caching. Children fetches denormalize: entities obtained
//!   incidentally (blocks inside a children listing, records inside a
//!   database query) are also stored under their own cache key.
//! - [`Crawler`]: recursive, cycle-safe traversal from a root id that
//!   materializes the entire reachable subtree into the cache, visiting
//!   each distinct (kind, id) at most once.
//!
//! After a crawl completes, every fetch the renderer performs is satisfied
//! from the cache.

mod crawler;
mod error;
mod fetcher;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use crawler::{Crawler, Seen};
pub use error::FetchError;
pub use fetcher::CachedFetcher;
