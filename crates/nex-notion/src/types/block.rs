//! Block tree nodes.

use serde::{Deserialize, Serialize};

use super::default_color;
use super::rich_text::{Equation, RichText, UrlRef};

/// One node in a page's content tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Block {
    /// Canonical dashed-uuid id. For `child_database` blocks this is also
    /// the id of the database entity itself.
    pub id: String,
    /// Whether a `block_children` collection exists under this id.
    #[serde(default)]
    pub has_children: bool,
    /// Variant discriminant and payload.
    #[serde(flatten)]
    pub data: BlockData,
}

/// Block variants.
///
/// Variants with no payload worth rendering (`table_of_contents`,
/// `breadcrumb`, `synced_block`, `column`, `column_list`, `template`,
/// `unsupported`) are unit variants; they exist so dispatch stays total.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockData {
    Paragraph { paragraph: TextBlock },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlock },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlock },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlock },
    Quote { quote: TextBlock },
    Toggle { toggle: TextBlock },
    Callout { callout: TextBlock },
    Code { code: CodeBlock },
    BulletedListItem { bulleted_list_item: TextBlock },
    NumberedListItem { numbered_list_item: TextBlock },
    ToDo { to_do: ToDoBlock },
    File { file: FileBlock },
    Image { image: FileBlock },
    Video { video: FileBlock },
    Audio { audio: FileBlock },
    Pdf { pdf: FileBlock },
    Embed { embed: EmbedBlock },
    Bookmark { bookmark: EmbedBlock },
    LinkPreview { link_preview: UrlRef },
    Equation { equation: Equation },
    Divider,
    Table { table: TableBlock },
    TableRow { table_row: TableRowBlock },
    LinkToPage { link_to_page: LinkToPage },
    ChildPage { child_page: ChildTitle },
    ChildDatabase { child_database: ChildTitle },
    TableOfContents,
    Breadcrumb,
    SyncedBlock,
    Column,
    ColumnList,
    Template,
    Unsupported,
}

/// Shared payload for text-bearing blocks (paragraph, headings, quote,
/// toggle, callout, list items).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default = "default_color")]
    pub color: String,
}

/// Code block payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub caption: Vec<RichText>,
    pub language: String,
}

/// To-do item payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub checked: bool,
}

/// Payload for media blocks backed by a file (file, image, video, audio,
/// pdf).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileBlock {
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(flatten)]
    pub source: FileSource,
}

/// Internal-file vs external-URL union used by media blocks and file
/// property values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    File { file: UrlRef },
    External { external: UrlRef },
}

impl FileSource {
    /// The resolved URL regardless of which side of the union is present.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::File { file } => &file.url,
            Self::External { external } => &external.url,
        }
    }
}

/// Embed / bookmark payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedBlock {
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

/// Table block payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableBlock {
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

/// Table row payload: one rich text sequence per cell.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableRowBlock {
    #[serde(default)]
    pub cells: Vec<Vec<RichText>>,
}

/// Link-to-page payload: points at either a page or a database.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinkToPage {
    PageId { page_id: String },
    DatabaseId { database_id: String },
}

/// Payload for `child_page` / `child_database` blocks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChildTitle {
    #[serde(default)]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_paragraph() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "paragraph",
            "has_children": false,
            "paragraph": { "rich_text": [], "color": "default" }
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(!block.has_children);
        assert!(matches!(block.data, BlockData::Paragraph { .. }));
    }

    #[test]
    fn test_deserialize_child_database() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "child_database",
            "has_children": false,
            "child_database": { "title": "Tasks" }
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let BlockData::ChildDatabase { child_database } = &block.data else {
            panic!("expected child_database");
        };
        assert_eq!(child_database.title, "Tasks");
    }

    #[test]
    fn test_deserialize_divider_ignores_empty_payload() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "divider",
            "has_children": false,
            "divider": {}
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert!(matches!(block.data, BlockData::Divider));
    }

    #[test]
    fn test_deserialize_image_with_external_source() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "image",
            "has_children": false,
            "image": {
                "type": "external",
                "external": { "url": "https://example.com/a.png" },
                "caption": []
            }
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let BlockData::Image { image } = &block.data else {
            panic!("expected image");
        };
        assert_eq!(image.source.url(), "https://example.com/a.png");
    }

    #[test]
    fn test_unknown_block_type_is_an_error() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "teleporter",
            "has_children": false,
            "teleporter": {}
        }"#;
        assert!(serde_json::from_str::<Block>(json).is_err());
    }

    #[test]
    fn test_unit_variant_round_trips() {
        let json = r#"{
            "id": "0e276124-0308-4b2f-b4a3-166edafd623a",
            "type": "breadcrumb",
            "has_children": false,
            "breadcrumb": {}
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let blob = serde_json::to_vec(&block).unwrap();
        let back: Block = serde_json::from_slice(&blob).unwrap();
        assert!(matches!(back.data, BlockData::Breadcrumb));
    }
}
