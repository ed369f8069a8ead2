//! The fetch seam between the export pipeline and the remote API.

use crate::error::ApiError;
use crate::types::{Block, Database, Page};
use crate::NotionClient;

/// A remote source of Notion entities.
///
/// Every operation returns `Ok(None)` for the expected missing-entity case
/// (deleted or inaccessible upstream); `Err` is reserved for transport and
/// protocol failures. Children collections arrive fully reassembled from
/// cursor pagination, in source order.
///
/// Implementations must be shareable across threads: the export pipeline
/// renders documents in parallel against one source.
pub trait Source: Send + Sync {
    /// Fetch a page by id.
    fn page(&self, id: &str) -> Result<Option<Page>, ApiError>;

    /// Fetch a block by id.
    fn block(&self, id: &str) -> Result<Option<Block>, ApiError>;

    /// Fetch a database by id.
    fn database(&self, id: &str) -> Result<Option<Database>, ApiError>;

    /// Fetch the full ordered child block list of a page or block.
    fn block_children(&self, id: &str) -> Result<Option<Vec<Block>>, ApiError>;

    /// Fetch the full record list of a database.
    fn database_children(&self, id: &str) -> Result<Option<Vec<Page>>, ApiError>;
}

impl Source for NotionClient {
    fn page(&self, id: &str) -> Result<Option<Page>, ApiError> {
        Self::page(self, id)
    }

    fn block(&self, id: &str) -> Result<Option<Block>, ApiError> {
        Self::block(self, id)
    }

    fn database(&self, id: &str) -> Result<Option<Database>, ApiError> {
        Self::database(self, id)
    }

    fn block_children(&self, id: &str) -> Result<Option<Vec<Block>>, ApiError> {
        Self::block_children(self, id)
    }

    fn database_children(&self, id: &str) -> Result<Option<Vec<Page>>, ApiError> {
        Self::database_children(self, id)
    }
}
