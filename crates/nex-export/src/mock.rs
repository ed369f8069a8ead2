//! Mock source and entity fixtures for testing.
//!
//! [`MockSource`] serves entities from in-memory maps and counts every call,
//! so tests can assert crawl idempotency ("second crawl performs zero remote
//! fetches") without a network. The fixture functions build minimal but
//! well-formed entities; ids are short hex tags expanded to full dashed-uuid
//! form via [`id`].

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nex_notion::types::{
    Annotations, Block, BlockData, ChildTitle, Database, Page, PropertySchema, PropertyValue,
    RichText, RichTextData, SchemaMap, TextBlock, TextContent,
};
use nex_notion::{ApiError, Source};

/// Shared counter of calls made through a [`MockSource`].
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Total source calls so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory [`Source`] for tests.
#[derive(Default)]
pub struct MockSource {
    pages: HashMap<String, Page>,
    blocks: HashMap<String, Block>,
    databases: HashMap<String, Database>,
    block_children: HashMap<String, Vec<Block>>,
    database_children: HashMap<String, Vec<Page>>,
    counter: CallCounter,
}

impl MockSource {
    /// Create an empty mock source. Every fetch misses until fixtures are
    /// added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the call counter; keep a clone before boxing the source.
    #[must_use]
    pub fn counter(&self) -> CallCounter {
        self.counter.clone()
    }

    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.insert(page.id.clone(), page);
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.insert(block.id.clone(), block);
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: Database) -> Self {
        self.databases.insert(database.id.clone(), database);
        self
    }

    #[must_use]
    pub fn with_block_children(mut self, parent: &str, children: Vec<Block>) -> Self {
        self.block_children.insert(parent.to_owned(), children);
        self
    }

    #[must_use]
    pub fn with_database_children(mut self, parent: &str, records: Vec<Page>) -> Self {
        self.database_children.insert(parent.to_owned(), records);
        self
    }
}

impl Source for MockSource {
    fn page(&self, id: &str) -> Result<Option<Page>, ApiError> {
        self.counter.bump();
        Ok(self.pages.get(id).cloned())
    }

    fn block(&self, id: &str) -> Result<Option<Block>, ApiError> {
        self.counter.bump();
        Ok(self.blocks.get(id).cloned())
    }

    fn database(&self, id: &str) -> Result<Option<Database>, ApiError> {
        self.counter.bump();
        Ok(self.databases.get(id).cloned())
    }

    fn block_children(&self, id: &str) -> Result<Option<Vec<Block>>, ApiError> {
        self.counter.bump();
        Ok(self.block_children.get(id).cloned())
    }

    fn database_children(&self, id: &str) -> Result<Option<Vec<Page>>, ApiError> {
        self.counter.bump();
        Ok(self.database_children.get(id).cloned())
    }
}

/// Expand a short hex tag (`"a1"`) into a full dashed-uuid id.
///
/// # Panics
///
/// Panics when the tag is longer than 32 characters; fixtures use short
/// tags by construction.
#[must_use]
pub fn id(tag: &str) -> String {
    assert!(tag.len() <= 32, "fixture id tag too long: {tag}");
    let padded = format!("{tag:0>32}");
    format!(
        "{}-{}-{}-{}-{}",
        &padded[0..8],
        &padded[8..12],
        &padded[12..16],
        &padded[16..20],
        &padded[20..32]
    )
}

/// One plain text run.
#[must_use]
pub fn text_run(content: &str) -> RichText {
    RichText {
        plain_text: content.to_owned(),
        href: None,
        annotations: Annotations::default(),
        data: RichTextData::Text {
            text: TextContent {
                content: content.to_owned(),
                link: None,
            },
        },
    }
}

/// A page titled `title` under property name `Name`.
#[must_use]
pub fn page(tag: &str, title: &str) -> Page {
    Page {
        id: id(tag),
        properties: HashMap::from([(
            "Name".to_owned(),
            PropertyValue::Title {
                title: vec![text_run(title)],
            },
        )]),
    }
}

fn text_block(tag: &str, data: BlockData) -> Block {
    Block {
        id: id(tag),
        has_children: false,
        data,
    }
}

fn text_payload(text: &str) -> TextBlock {
    TextBlock {
        rich_text: vec![text_run(text)],
        color: "default".to_owned(),
    }
}

/// A childless paragraph block.
#[must_use]
pub fn paragraph(tag: &str, text: &str) -> Block {
    text_block(
        tag,
        BlockData::Paragraph {
            paragraph: text_payload(text),
        },
    )
}

/// A bulleted list item.
#[must_use]
pub fn bulleted(tag: &str, text: &str) -> Block {
    text_block(
        tag,
        BlockData::BulletedListItem {
            bulleted_list_item: text_payload(text),
        },
    )
}

/// A numbered list item.
#[must_use]
pub fn numbered(tag: &str, text: &str) -> Block {
    text_block(
        tag,
        BlockData::NumberedListItem {
            numbered_list_item: text_payload(text),
        },
    )
}

/// A `child_page` block; its id doubles as the page id.
#[must_use]
pub fn child_page_block(tag: &str, title: &str) -> Block {
    text_block(
        tag,
        BlockData::ChildPage {
            child_page: ChildTitle {
                title: title.to_owned(),
            },
        },
    )
}

/// A `child_database` block; its id doubles as the database id.
#[must_use]
pub fn child_database_block(tag: &str, title: &str) -> Block {
    text_block(
        tag,
        BlockData::ChildDatabase {
            child_database: ChildTitle {
                title: title.to_owned(),
            },
        },
    )
}

/// Mark a block as having children.
#[must_use]
pub fn with_children(mut block: Block) -> Block {
    block.has_children = true;
    block
}

/// A database with the given `(name, type)` schema entries in order.
#[must_use]
pub fn database(tag: &str, title: &str, schema: &[(&str, &str)]) -> Database {
    let properties: SchemaMap = schema
        .iter()
        .map(|(name, kind)| {
            (
                (*name).to_owned(),
                PropertySchema {
                    name: (*name).to_owned(),
                    kind: (*kind).to_owned(),
                },
            )
        })
        .collect();

    Database {
        id: id(tag),
        title: vec![text_run(title)],
        properties,
    }
}
