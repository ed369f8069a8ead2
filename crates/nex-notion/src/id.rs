//! Entity id normalization.
//!
//! Notion accepts ids in both bare (`0e276124…`) and dashed-uuid form, and
//! share URLs commonly carry the bare form. The cache keys entries by the
//! dashed form only, so every externally supplied id passes through
//! [`normalize_id`] before use.

use uuid::Uuid;

use crate::error::ApiError;

/// Canonicalize an entity id into dashed-lowercase uuid form.
///
/// Accepts both `8-4-4-4-12` dashed and bare 32-hex-digit input.
///
/// # Errors
///
/// Returns [`ApiError::InvalidId`] when the input is not a valid id in
/// either form.
pub fn normalize_id(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    let uuid =
        Uuid::parse_str(trimmed).map_err(|_| ApiError::InvalidId(trimmed.to_owned()))?;
    Ok(uuid.hyphenated().to_string())
}
