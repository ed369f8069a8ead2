//! Databases: titled, schema-bearing record collections.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rich_text::RichText;

/// A database entity. Its records are [`Page`](super::Page)s fetched via
/// the `database_children` collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Database {
    /// Canonical dashed-uuid id. Shared with the `child_database` block
    /// that declares this database inside a page.
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichText>,
    /// Property schema in declaration order.
    #[serde(default)]
    pub properties: SchemaMap,
}

/// One schema entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropertySchema {
    pub name: String,
    /// Property type name (`title`, `number`, …). Display order and names
    /// drive rendering; values are dispatched by their own tags.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Property schemas in JSON declaration order.
///
/// `serde_json`'s map type does not preserve key order, and the rendered
/// table's column order is the schema's declared order, so this wraps a
/// `Vec` of entries with map-shaped serde.
#[derive(Debug, Clone, Default)]
pub struct SchemaMap(Vec<(String, PropertySchema)>);

impl SchemaMap {
    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PropertySchema)> for SchemaMap {
    fn from_iter<I: IntoIterator<Item = (String, PropertySchema)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for SchemaMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SchemaMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaMapVisitor;

        impl<'de> Visitor<'de> for SchemaMapVisitor {
            type Value = SchemaMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property schemas")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(SchemaMap(entries))
            }
        }

        deserializer.deserialize_map(SchemaMapVisitor)
    }
}
