//! Typed Notion entity model.
//!
//! Every polymorphic field in the API (`block.type`, `property.type`,
//! `rich_text.type`, mention kinds, file sources, formula/rollup results) is
//! modeled as a closed internally-tagged enum. Rendering dispatches with
//! exhaustive `match`es, so a new upstream variant surfaces as a
//! deserialization error at the wire or cache boundary instead of silently
//! dropped content.

mod block;
mod database;
mod page;
mod property;
mod rich_text;

pub use block::{
    Block, BlockData, ChildTitle, CodeBlock, EmbedBlock, FileBlock, FileSource, LinkToPage,
    TableBlock, TableRowBlock, TextBlock, ToDoBlock,
};
pub use database::{Database, PropertySchema, SchemaMap};
pub use page::Page;
pub use property::{FileRef, FormulaValue, PropertyValue, Relation, RollupValue, SelectOption, User};
pub use rich_text::{
    Annotations, DateValue, EntityRef, Equation, Link, Mention, RichText, RichTextData,
    TemplateMention, TextContent, UrlRef, UserRef,
};

/// Serde default for Notion color strings.
pub(crate) fn default_color() -> String {
    "default".to_owned()
}
