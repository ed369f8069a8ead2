//! Error types for the export layer.

use nex_notion::ApiError;

/// Error from cached fetch operations.
///
/// Missing entities are not errors; they surface as `Ok(None)` from the
/// fetcher, mirroring the [`Source`](nex_notion::Source) contract.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Remote source failure (transport or protocol).
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A cache blob failed to (de)serialize. The store is trusted after
    /// write-through, so this indicates a corrupt or foreign cache
    /// directory rather than a recoverable condition.
    #[error("cache blob error")]
    Json(#[from] serde_json::Error),
}
