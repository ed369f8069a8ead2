//! Paginated children collections.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{NOTION_VERSION, NotionClient};
use crate::error::ApiError;
use crate::types::{Block, Page};

/// Results per request; the API maximum.
const PAGE_SIZE: u32 = 100;

/// One cursor page of a children listing.
#[derive(Debug, Deserialize)]
struct PagedResponse<T> {
    results: Vec<T>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionClient {
    /// Retrieve the full ordered child block list of a page or block,
    /// following continuation cursors until exhausted.
    ///
    /// # Errors
    ///
    /// Transport and non-404 HTTP failures. A missing parent is `Ok(None)`.
    pub fn block_children(&self, id: &str) -> Result<Option<Vec<Block>>, ApiError> {
        let mut children = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/blocks/{id}/children?page_size={PAGE_SIZE}",
                self.base_url
            );
            if let Some(cursor) = &cursor {
                url.push_str("&start_cursor=");
                url.push_str(cursor);
            }

            let Some(page) = self.get_entity::<PagedResponse<Block>>(&url)? else {
                return Ok(None);
            };
            debug!("fetched {} child blocks of {id}", page.results.len());
            children.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(Some(children))
    }

    /// Retrieve the full record list of a database, newest first, following
    /// continuation cursors until exhausted.
    ///
    /// # Errors
    ///
    /// Transport and non-404 HTTP failures. A missing database is `Ok(None)`.
    pub fn database_children(&self, id: &str) -> Result<Option<Vec<Page>>, ApiError> {
        let url = format!("{}/databases/{id}/query", self.base_url);
        let mut children = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = json!({
                "page_size": PAGE_SIZE,
                "sorts": [{ "timestamp": "created_time", "direction": "descending" }],
            });
            if let Some(cursor) = &cursor {
                request["start_cursor"] = json!(cursor);
            }

            let response = self
                .agent
                .post(&url)
                .header("Authorization", &self.bearer())
                .header("Notion-Version", NOTION_VERSION)
                .header("Accept", "application/json")
                .send_json(&request)?;

            let Some(page) = Self::read_optional::<PagedResponse<Page>>(response)? else {
                return Ok(None);
            };
            debug!("fetched {} records of {id}", page.results.len());
            children.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(Some(children))
    }
}
