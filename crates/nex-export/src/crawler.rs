//! Recursive crawl of the reachable entity graph.

use std::collections::HashSet;

use nex_notion::types::{Block, BlockData, Database, Page};
use tracing::warn;

use crate::error::FetchError;
use crate::fetcher::CachedFetcher;

/// Nesting ceiling. Real workspaces sit far below this; the guard exists so
/// a pathological or corrupted hierarchy cannot blow the stack.
const MAX_DEPTH: usize = 64;

/// A document discovered during a crawl, announced before its subtree is
/// descended into.
pub enum Seen<'a> {
    Page(&'a Page),
    Database(&'a Database),
}

/// Depth-first crawl from a root page or database.
///
/// Every reachable entity ends up in the fetcher's cache. Visited sets are
/// kept per kind, since a `child_database` block shares its id with the
/// database it introduces, and each (kind, id) pair is marked visited
/// *before* its fetch, so no entity is fetched twice even when the graph
/// contains cycles.
///
/// Missing entities prune their branch with a warning instead of failing
/// the crawl; a stale reference upstream should not sink an export.
pub struct Crawler<'a> {
    fetcher: &'a CachedFetcher,
    pages: HashSet<String>,
    blocks: HashSet<String>,
    databases: HashSet<String>,
    observer: Option<Box<dyn FnMut(Seen<'_>) + 'a>>,
}

impl<'a> Crawler<'a> {
    #[must_use]
    pub fn new(fetcher: &'a CachedFetcher) -> Self {
        Self {
            fetcher,
            pages: HashSet::new(),
            blocks: HashSet::new(),
            databases: HashSet::new(),
            observer: None,
        }
    }

    /// Register a callback invoked once per discovered document, in
    /// discovery order.
    #[must_use]
    pub fn with_observer(mut self, observer: impl FnMut(Seen<'_>) + 'a) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Crawl the subtree rooted at a page.
    ///
    /// # Errors
    ///
    /// Source or cache failures; missing entities are not errors.
    pub fn crawl_page(&mut self, id: &str) -> Result<(), FetchError> {
        self.visit_page(id, 0)
    }

    /// Crawl the subtree rooted at a database.
    pub fn crawl_database(&mut self, id: &str) -> Result<(), FetchError> {
        self.visit_database(id, 0)
    }

    fn visit_page(&mut self, id: &str, depth: usize) -> Result<(), FetchError> {
        if depth > MAX_DEPTH {
            warn!(id, depth, "nesting ceiling reached, pruning");
            return Ok(());
        }
        if !self.pages.insert(id.to_owned()) {
            return Ok(());
        }
        let Some(page) = self.fetcher.page(id)? else {
            warn!(id, "page missing upstream, pruning branch");
            return Ok(());
        };
        self.notify(Seen::Page(&page));
        self.visit_children(id, depth)
    }

    fn visit_database(&mut self, id: &str, depth: usize) -> Result<(), FetchError> {
        if depth > MAX_DEPTH {
            warn!(id, depth, "nesting ceiling reached, pruning");
            return Ok(());
        }
        if !self.databases.insert(id.to_owned()) {
            return Ok(());
        }
        let Some(database) = self.fetcher.database(id)? else {
            warn!(id, "database missing upstream, pruning branch");
            return Ok(());
        };
        self.notify(Seen::Database(&database));

        let Some(records) = self.fetcher.database_children(id)? else {
            warn!(id, "database records missing upstream, pruning branch");
            return Ok(());
        };
        for record in &records {
            // Records were denormalized into the page bucket by the
            // listing fetch, so the page visit hits the cache.
            self.visit_page(&record.id, depth + 1)?;
        }
        Ok(())
    }

    /// Descend into the child block list of a page or block.
    fn visit_children(&mut self, parent: &str, depth: usize) -> Result<(), FetchError> {
        let Some(children) = self.fetcher.block_children(parent)? else {
            warn!(id = parent, "children missing upstream, pruning branch");
            return Ok(());
        };
        for child in &children {
            self.visit_block(child, depth)?;
        }
        Ok(())
    }

    fn visit_block(&mut self, block: &Block, depth: usize) -> Result<(), FetchError> {
        match &block.data {
            BlockData::ChildPage { .. } => self.visit_page(&block.id, depth + 1),
            BlockData::ChildDatabase { .. } => self.visit_database(&block.id, depth + 1),
            _ if block.has_children => {
                if depth + 1 > MAX_DEPTH {
                    warn!(id = %block.id, depth, "nesting ceiling reached, pruning");
                    return Ok(());
                }
                if !self.blocks.insert(block.id.clone()) {
                    return Ok(());
                }
                self.visit_children(&block.id, depth + 1)
            }
            _ => Ok(()),
        }
    }

    fn notify(&mut self, seen: Seen<'_>) {
        if let Some(observer) = &mut self.observer {
            observer(seen);
        }
    }
}
