//! Notion REST API client.
//!
//! Sync HTTP client for the Notion API with bearer token authentication.
//! Children collections are paginated server-side; [`children`](self)
//! operations follow continuation cursors and return one ordered sequence,
//! so nothing above this layer ever sees a partial page.

mod children;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::ApiError;
use crate::types::{Block, Database, Page};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// API version pin; entity shapes in [`crate::types`] match this version.
const NOTION_VERSION: &str = "2022-06-28";

/// Production API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client with the given integration token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: token.into(),
        }
    }

    /// Override the API base URL (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Retrieve a single page.
    ///
    /// # Errors
    ///
    /// Transport and non-404 HTTP failures. A deleted or inaccessible page
    /// is `Ok(None)`.
    pub fn page(&self, id: &str) -> Result<Option<Page>, ApiError> {
        self.get_entity(&format!("{}/pages/{id}", self.base_url))
    }

    /// Retrieve a single block.
    pub fn block(&self, id: &str) -> Result<Option<Block>, ApiError> {
        self.get_entity(&format!("{}/blocks/{id}", self.base_url))
    }

    /// Retrieve a single database.
    pub fn database(&self, id: &str) -> Result<Option<Database>, ApiError> {
        self.get_entity(&format!("{}/databases/{id}", self.base_url))
    }

    /// GET a JSON entity, mapping 404 to `Ok(None)`.
    pub(crate) fn get_entity<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.bearer())
            .header("Notion-Version", NOTION_VERSION)
            .header("Accept", "application/json")
            .call()?;

        Self::read_optional(response)
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Interpret a response: 404 is the explicit missing marker, other
    /// error statuses are hard failures.
    pub(crate) fn read_optional<T: DeserializeOwned>(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<Option<T>, ApiError> {
        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status == 404 {
            tracing::debug!("entity not found upstream");
            return Ok(None);
        }

        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ApiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(Some(body.read_json()?))
    }
}
