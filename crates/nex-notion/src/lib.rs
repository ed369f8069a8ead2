//! Notion API data model and client.
//!
//! This crate owns the wire-facing half of the export pipeline:
//!
//! - [`types`]: typed entity model (pages, blocks, databases, rich text,
//!   property values) as closed serde enums. An unknown `type` tag is a
//!   deserialization error, never a silently dropped variant.
//! - [`NotionClient`]: sync HTTP client for the Notion REST API with bearer
//!   auth and cursor-followed pagination for children collections.
//! - [`Source`]: the fetch seam consumed by the export layer. Missing
//!   entities (deleted or inaccessible upstream) are `Ok(None)`, not errors.
//! - [`normalize_id`]: canonicalizes bare 32-hex ids into the dashed-uuid
//!   form expected by both the API and the cache keys.

mod client;
mod error;
mod id;
mod source;
pub mod types;

pub use client::NotionClient;
pub use error::ApiError;
pub use id::normalize_id;
pub use source::Source;
