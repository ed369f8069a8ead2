//! Pages and database records (structurally identical).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::property::PropertyValue;
use super::rich_text::RichText;

/// A titled document, or a database record (records are pages).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Canonical dashed-uuid id.
    pub id: String,
    /// Property values keyed by property name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// The rich text of this page's title property, if one exists.
    ///
    /// Every well-formed page has exactly one property of type `title`, but
    /// the renderer treats its absence as a malformed-shape case (warn and
    /// render blank), not a panic.
    #[must_use]
    pub fn title(&self) -> Option<&[RichText]> {
        self.properties.values().find_map(|value| match value {
            PropertyValue::Title { title } => Some(title.as_slice()),
            _ => None,
        })
    }
}
