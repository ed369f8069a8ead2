//! Render-time errors.

use nex_export::FetchError;

/// Failure to render a document.
///
/// The renderer runs against a cache the crawler already filled, so a
/// missing entity at render time means the input contract was violated
/// and the document cannot be produced. Sibling documents in a batch are
/// unaffected.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing page: {0}")]
    MissingPage(String),

    #[error("missing database: {0}")]
    MissingDatabase(String),

    #[error("missing database records: {0}")]
    MissingRecords(String),

    #[error("missing block children: {0}")]
    MissingChildren(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
