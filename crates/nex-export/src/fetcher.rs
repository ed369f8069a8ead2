//! Write-through cached fetching.

use nex_cache::{Cache, CacheBucket};
use nex_notion::Source;
use nex_notion::types::{Block, Database, Page};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Bucket name per entity kind. A block id and a database id may coincide
/// (the `child_database` case), so kinds are never mixed in one bucket.
const PAGE: &str = "page";
const BLOCK: &str = "block";
const DATABASE: &str = "database";
const BLOCK_CHILDREN: &str = "block_children";
const DATABASE_CHILDREN: &str = "database_children";

/// A [`Source`] behind a write-through cache.
///
/// Cache hit short-circuits the remote call. Cache miss fetches, writes
/// through, then returns. Missing entities pass through as `Ok(None)` and
/// are never cached, so a later crawl may still pick the entity up if it
/// reappears upstream.
///
/// Children fetches denormalize as a contract, not an optimization: each
/// block in a `block_children` result is also stored under the block
/// bucket, and each record in a `database_children` result under the page
/// bucket. A record reachable only through a listing needs no second fetch.
pub struct CachedFetcher {
    source: Box<dyn Source>,
    pages: Box<dyn CacheBucket>,
    blocks: Box<dyn CacheBucket>,
    databases: Box<dyn CacheBucket>,
    block_children: Box<dyn CacheBucket>,
    database_children: Box<dyn CacheBucket>,
}

impl CachedFetcher {
    /// Compose a source and a cache behind one fetch interface.
    #[must_use]
    pub fn new(source: Box<dyn Source>, cache: &dyn Cache) -> Self {
        Self {
            source,
            pages: cache.bucket(PAGE),
            blocks: cache.bucket(BLOCK),
            databases: cache.bucket(DATABASE),
            block_children: cache.bucket(BLOCK_CHILDREN),
            database_children: cache.bucket(DATABASE_CHILDREN),
        }
    }

    /// Fetch a page (or database record; records are pages).
    ///
    /// # Errors
    ///
    /// Source failures and corrupt cache blobs.
    pub fn page(&self, id: &str) -> Result<Option<Page>, FetchError> {
        if let Some(cached) = Self::load(self.pages.as_ref(), id)? {
            return Ok(Some(cached));
        }
        let Some(page) = self.source.page(id)? else {
            return Ok(None);
        };
        Self::store(self.pages.as_ref(), id, &page)?;
        Ok(Some(page))
    }

    /// Fetch a single block.
    pub fn block(&self, id: &str) -> Result<Option<Block>, FetchError> {
        if let Some(cached) = Self::load(self.blocks.as_ref(), id)? {
            return Ok(Some(cached));
        }
        let Some(block) = self.source.block(id)? else {
            return Ok(None);
        };
        Self::store(self.blocks.as_ref(), id, &block)?;
        Ok(Some(block))
    }

    /// Fetch a database.
    pub fn database(&self, id: &str) -> Result<Option<Database>, FetchError> {
        if let Some(cached) = Self::load(self.databases.as_ref(), id)? {
            return Ok(Some(cached));
        }
        let Some(database) = self.source.database(id)? else {
            return Ok(None);
        };
        Self::store(self.databases.as_ref(), id, &database)?;
        Ok(Some(database))
    }

    /// Fetch the ordered child block list of a page or block.
    ///
    /// Denormalizes: every child is also stored under the block bucket.
    pub fn block_children(&self, id: &str) -> Result<Option<Vec<Block>>, FetchError> {
        if let Some(cached) = Self::load(self.block_children.as_ref(), id)? {
            return Ok(Some(cached));
        }
        let Some(children) = self.source.block_children(id)? else {
            return Ok(None);
        };
        for child in &children {
            Self::store(self.blocks.as_ref(), &child.id, child)?;
        }
        Self::store(self.block_children.as_ref(), id, &children)?;
        Ok(Some(children))
    }

    /// Fetch the record list of a database.
    ///
    /// Denormalizes: every record is also stored under the page bucket.
    pub fn database_children(&self, id: &str) -> Result<Option<Vec<Page>>, FetchError> {
        if let Some(cached) = Self::load(self.database_children.as_ref(), id)? {
            return Ok(Some(cached));
        }
        let Some(records) = self.source.database_children(id)? else {
            return Ok(None);
        };
        for record in &records {
            Self::store(self.pages.as_ref(), &record.id, record)?;
        }
        Self::store(self.database_children.as_ref(), id, &records)?;
        Ok(Some(records))
    }

    fn load<T: DeserializeOwned>(
        bucket: &dyn CacheBucket,
        id: &str,
    ) -> Result<Option<T>, FetchError> {
        match bucket.get(id) {
            Some(blob) => Ok(Some(serde_json::from_slice(&blob)?)),
            None => Ok(None),
        }
    }

    fn store<T: Serialize>(
        bucket: &dyn CacheBucket,
        id: &str,
        value: &T,
    ) -> Result<(), FetchError> {
        bucket.set(id, &serde_json::to_vec(value)?);
        Ok(())
    }
}
