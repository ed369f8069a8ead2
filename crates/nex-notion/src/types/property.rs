//! Typed property values.

use serde::{Deserialize, Serialize};

use super::block::FileSource;
use super::rich_text::{DateValue, RichText};

/// One typed property value on a page or database record.
///
/// Closed union over every property type the renderer knows how to format.
/// Nullable scalars (`number`, `url`, …) keep their nullability so "blank
/// when null" is representable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Number { number: Option<f64> },
    Checkbox { checkbox: bool },
    Select { select: Option<SelectOption> },
    Status { status: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Date { date: Option<DateValue> },
    People { people: Vec<User> },
    Files { files: Vec<FileRef> },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Formula { formula: FormulaValue },
    Relation { relation: Vec<Relation> },
    Rollup { rollup: RollupValue },
    CreatedTime { created_time: String },
    CreatedBy { created_by: User },
    LastEditedTime { last_edited_time: String },
    LastEditedBy { last_edited_by: User },
}

/// A select/status/multi-select option.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectOption {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// A workspace user as embedded in property values.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    /// Only present when the integration may read user profiles.
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of a files property.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileRef {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub source: FileSource,
}

/// One entry of a relation property.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Relation {
    pub id: String,
}

/// Computed formula result.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    Boolean { boolean: Option<bool> },
    Date { date: Option<DateValue> },
    Number { number: Option<f64> },
    String { string: Option<String> },
}

/// Rollup result. The array case recurses into [`PropertyValue`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number { number: Option<f64> },
    Date { date: Option<DateValue> },
    Array { array: Vec<PropertyValue> },
}
