//! Document rendering over the crawled cache.

use std::fmt::Write;

use nex_export::CachedFetcher;
use nex_notion::types::{Block, BlockData, LinkToPage, RichText};
use tracing::warn;

use crate::error::RenderError;
use crate::html::{children_div, colored, escape_html};
use crate::property::render_property;
use crate::rich_text::{render_plain_text, render_rich_text};

/// Kinds of sibling blocks that need a list wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bulleted,
    Numbered,
    Todo,
}

impl ListKind {
    fn of(block: &Block) -> Option<Self> {
        match block.data {
            BlockData::BulletedListItem { .. } => Some(Self::Bulleted),
            BlockData::NumberedListItem { .. } => Some(Self::Numbered),
            BlockData::ToDo { .. } => Some(Self::Todo),
            _ => None,
        }
    }

    fn open(self) -> &'static str {
        match self {
            Self::Bulleted | Self::Todo => "<ul>",
            Self::Numbered => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Self::Bulleted | Self::Todo => "</ul>",
            Self::Numbered => "</ol>",
        }
    }
}

/// Renders crawled pages and databases to self-contained HTML fragments.
///
/// Reads through the same fetch interface the crawler filled, so every
/// lookup is a cache hit once the crawl has run. A missing root entity is
/// a hard error; the renderer never reaches out to repair an incomplete
/// cache.
pub struct HtmlRenderer<'a> {
    fetcher: &'a CachedFetcher,
}

impl<'a> HtmlRenderer<'a> {
    #[must_use]
    pub fn new(fetcher: &'a CachedFetcher) -> Self {
        Self { fetcher }
    }

    /// Render a page: `<h1>` title followed by its block tree.
    ///
    /// # Errors
    ///
    /// [`RenderError::MissingPage`] when the page is not cache-resident,
    /// and fetch or children errors from the block tree.
    pub fn render_page(&self, id: &str) -> Result<String, RenderError> {
        let Some(page) = self.fetcher.page(id)? else {
            return Err(RenderError::MissingPage(id.to_owned()));
        };

        let title = match page.title() {
            Some(title) => render_rich_text(title),
            None => {
                warn!(id, "page has no title property");
                String::new()
            }
        };

        // A page's root content is its children collection.
        let body = self.render_children(id, true)?;
        Ok(format!("<h1>{title}</h1>{body}"))
    }

    /// Render a database: `<h1>` title and one table over its records.
    ///
    /// Header cells follow the schema's declared property order; each
    /// record contributes one row with one cell per schema property. The
    /// title property doubles as the row's link to the record document.
    pub fn render_database(&self, id: &str) -> Result<String, RenderError> {
        let Some(database) = self.fetcher.database(id)? else {
            return Err(RenderError::MissingDatabase(id.to_owned()));
        };
        let Some(records) = self.fetcher.database_children(id)? else {
            return Err(RenderError::MissingRecords(id.to_owned()));
        };

        let title = render_rich_text(&database.title);

        let mut table = String::from("<table><tr>");
        for (_, schema) in database.properties.iter() {
            write!(table, "<th>{}</th>", escape_html(&schema.name)).unwrap();
        }
        table.push_str("</tr>");

        for record in &records {
            table.push_str("<tr>");
            for (name, _) in database.properties.iter() {
                match record.properties.get(name) {
                    Some(value) => {
                        write!(table, "<td>{}</td>", render_property(value, &record.id))
                            .unwrap();
                    }
                    None => table.push_str("<td></td>"),
                }
            }
            table.push_str("</tr>");
        }
        table.push_str("</table>");

        Ok(format!("<h1>{title}</h1>{table}"))
    }

    /// Render the ordered children of a page or block, grouping adjacent
    /// list items.
    ///
    /// List items arrive as flat siblings; adjacency in source order, not
    /// declared grouping, decides where `<ul>`/`<ol>` boundaries fall. A
    /// change of kind always closes the open wrapper before opening the
    /// next, so mixed adjacent kinds each get their own list.
    fn render_children(&self, id: &str, has_children: bool) -> Result<String, RenderError> {
        if !has_children {
            return Ok(String::new());
        }
        let Some(children) = self.fetcher.block_children(id)? else {
            return Err(RenderError::MissingChildren(id.to_owned()));
        };

        let mut html = String::new();
        let mut open: Option<ListKind> = None;

        for child in &children {
            let kind = ListKind::of(child);
            if let Some(current) = open
                && kind != Some(current)
            {
                html.push_str(current.close());
                open = None;
            }
            if open.is_none()
                && let Some(kind) = kind
            {
                html.push_str(kind.open());
                open = Some(kind);
            }
            html.push_str(&self.render_block(child)?);
        }

        if let Some(current) = open {
            html.push_str(current.close());
        }
        Ok(html)
    }

    /// Render one block to an HTML fragment.
    #[allow(clippy::too_many_lines)]
    fn render_block(&self, block: &Block) -> Result<String, RenderError> {
        let html = match &block.data {
            BlockData::Paragraph { paragraph } => {
                colored("p", &paragraph.color, &render_rich_text(&paragraph.rich_text))
                    + &children_div(self.nested(block)?)
            }

            // The page title claims h1, so headings shift down one level.
            BlockData::Heading1 { heading_1 } => {
                colored("h2", &heading_1.color, &render_rich_text(&heading_1.rich_text))
                    + &children_div(self.nested(block)?)
            }
            BlockData::Heading2 { heading_2 } => {
                colored("h3", &heading_2.color, &render_rich_text(&heading_2.rich_text))
                    + &children_div(self.nested(block)?)
            }
            BlockData::Heading3 { heading_3 } => {
                colored("h4", &heading_3.color, &render_rich_text(&heading_3.rich_text))
                    + &children_div(self.nested(block)?)
            }

            BlockData::Quote { quote } => {
                let inner = render_rich_text(&quote.rich_text) + &self.nested(block)?;
                colored("blockquote", &quote.color, &inner)
            }
            BlockData::Toggle { toggle } => {
                let inner = format!(
                    "<summary>{}</summary>{}",
                    render_rich_text(&toggle.rich_text),
                    self.nested(block)?
                );
                colored("details", &toggle.color, &inner)
            }
            BlockData::Callout { callout } => {
                let inner = format!(
                    "<p>{}</p>{}",
                    render_rich_text(&callout.rich_text),
                    self.nested(block)?
                );
                colored("aside", &callout.color, &inner)
            }

            BlockData::Code { code } => {
                let text = render_rich_text(&code.rich_text);
                let html = format!(
                    r#"<pre><code class="lang-{}">{text}</code></pre>"#,
                    escape_html(&code.language)
                );
                captioned(&code.caption, html)
            }
            BlockData::Equation { equation } => {
                format!(r#"<pre class="katex">{}</pre>"#, escape_html(&equation.expression))
            }

            BlockData::BulletedListItem { bulleted_list_item: item }
            | BlockData::NumberedListItem { numbered_list_item: item } => {
                let children = self.nested(block)?;
                let title = render_rich_text(&item.rich_text);
                let text = if children.is_empty() {
                    title
                } else {
                    format!("<p>{title}</p>{children}")
                };
                colored("li", &item.color, &text)
            }
            BlockData::ToDo { to_do } => {
                let children = self.nested(block)?;
                let checked = if to_do.checked { " checked" } else { "" };
                let title = format!(
                    r#"<input type="checkbox"{checked}/>{}"#,
                    render_rich_text(&to_do.rich_text)
                );
                let text = if children.is_empty() {
                    title
                } else {
                    format!("<p>{title}</p>{children}")
                };
                colored("li", &to_do.color, &text)
            }

            BlockData::File { file } => {
                let url = escape_html(file.source.url());
                captioned(&file.caption, format!(r#"<a class="file" href="{url}">{url}</a>"#))
            }
            BlockData::Pdf { pdf } => {
                let url = escape_html(pdf.source.url());
                captioned(&pdf.caption, format!(r#"<a class="pdf" href="{url}">{url}</a>"#))
            }
            BlockData::Image { image } => {
                let url = escape_html(image.source.url());
                captioned(&image.caption, format!(r#"<img src="{url}"/>"#))
            }
            BlockData::Audio { audio } => {
                let url = escape_html(audio.source.url());
                captioned(
                    &audio.caption,
                    format!(r#"<audio controls><source src="{url}"></audio>"#),
                )
            }
            BlockData::Video { video } => {
                let url = escape_html(video.source.url());
                captioned(
                    &video.caption,
                    format!(r#"<video controls><source src="{url}"></video>"#),
                )
            }
            BlockData::Embed { embed } => {
                let url = escape_html(&embed.url);
                captioned(&embed.caption, format!(r#"<iframe src="{url}"></iframe>"#))
            }
            BlockData::Bookmark { bookmark } => {
                let url = escape_html(&bookmark.url);
                captioned(
                    &bookmark.caption,
                    format!(r#"<a class="bookmark" href="{url}">{url}</a>"#),
                )
            }
            BlockData::LinkPreview { link_preview } => {
                let url = escape_html(&link_preview.url);
                format!(r#"<a class="preview" href="{url}">{url}</a>"#)
            }

            BlockData::Divider => "<hr/>".to_owned(),

            BlockData::Table { table } => self.render_table(block, table)?,
            BlockData::TableRow { .. } => {
                warn!(id = %block.id, "table row outside a table");
                String::new()
            }

            BlockData::LinkToPage { link_to_page } => match link_to_page {
                LinkToPage::PageId { page_id } => {
                    let title = self.page_title(page_id)?;
                    page_anchor(page_id, &title)
                }
                LinkToPage::DatabaseId { database_id } => {
                    let title = self.database_title(database_id)?;
                    page_anchor(database_id, &title)
                }
            },
            BlockData::ChildPage { child_page } => {
                page_anchor(&block.id, &escape_html(&child_page.title))
            }
            BlockData::ChildDatabase { child_database } => {
                page_anchor(&block.id, &escape_html(&child_database.title))
            }

            // Structural types carry nothing renderable.
            BlockData::TableOfContents
            | BlockData::Breadcrumb
            | BlockData::SyncedBlock
            | BlockData::Column
            | BlockData::ColumnList
            | BlockData::Template
            | BlockData::Unsupported => String::new(),
        };
        Ok(html)
    }

    fn nested(&self, block: &Block) -> Result<String, RenderError> {
        self.render_children(&block.id, block.has_children)
    }

    /// Tables fetch their rows directly; rows never flow through the
    /// generic children path.
    fn render_table(
        &self,
        block: &Block,
        table: &nex_notion::types::TableBlock,
    ) -> Result<String, RenderError> {
        let rows = self.fetcher.block_children(&block.id)?.unwrap_or_default();

        let mut html = String::from("<table>");
        for (row, child) in rows.iter().enumerate() {
            let BlockData::TableRow { table_row } = &child.data else {
                warn!(id = %block.id, child = %child.id, "table child is not a table row");
                continue;
            };
            html.push_str("<tr>");
            for (col, cell) in table_row.cells.iter().enumerate() {
                let header = (table.has_column_header && row == 0)
                    || (table.has_row_header && col == 0);
                let tag = if header { "th" } else { "td" };
                write!(html, "<{tag}>{}</{tag}>", render_rich_text(cell)).unwrap();
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
        Ok(html)
    }

    /// Cached title of a linked page, falling back to the raw id.
    fn page_title(&self, id: &str) -> Result<String, RenderError> {
        let title = self
            .fetcher
            .page(id)?
            .as_ref()
            .and_then(|page| page.title().map(render_plain_text))
            .filter(|title| !title.is_empty());
        Ok(title.unwrap_or_else(|| id.to_owned()))
    }

    fn database_title(&self, id: &str) -> Result<String, RenderError> {
        let title = self
            .fetcher
            .database(id)?
            .map(|database| render_plain_text(&database.title))
            .filter(|title| !title.is_empty());
        Ok(title.unwrap_or_else(|| id.to_owned()))
    }
}

fn page_anchor(id: &str, title: &str) -> String {
    format!(r#"<p><a class="page-mention" href="{id}.html">{title}</a></p>"#)
}

fn captioned(caption: &[RichText], html: String) -> String {
    if caption.is_empty() {
        return html;
    }
    format!("<figure>{html}<figcaption>{}</figcaption></figure>", render_rich_text(caption))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nex_cache::MemoryCache;
    use nex_export::mock::{self, MockSource};
    use nex_export::{Crawler, Seen};
    use nex_notion::types::ToDoBlock;
    use pretty_assertions::assert_eq;

    fn fetcher(source: MockSource, cache: &MemoryCache) -> CachedFetcher {
        CachedFetcher::new(Box::new(source), cache)
    }

    fn crawled(source: MockSource, cache: &MemoryCache) -> CachedFetcher {
        let fetcher = fetcher(source, cache);
        Crawler::new(&fetcher).crawl_page(&mock::id("a1")).unwrap();
        fetcher
    }

    fn todo(tag: &str, text: &str, checked: bool) -> Block {
        Block {
            id: mock::id(tag),
            has_children: false,
            data: BlockData::ToDo {
                to_do: ToDoBlock {
                    rich_text: vec![mock::text_run(text)],
                    color: "default".to_owned(),
                    checked,
                },
            },
        }
    }

    #[test]
    fn test_render_page_title_and_paragraph() {
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![mock::paragraph("b1", "hello")]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(html, "<h1>Root</h1><p>hello</p>");
    }

    #[test]
    fn test_missing_root_page_is_a_hard_error() {
        let cache = MemoryCache::new();
        let fetcher = fetcher(MockSource::new(), &cache);

        let err = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap_err();
        assert!(matches!(err, RenderError::MissingPage(_)));
    }

    #[test]
    fn test_list_grouping_splits_on_kind_change() {
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(
                &mock::id("a1"),
                vec![
                    mock::bulleted("b1", "one"),
                    mock::bulleted("b2", "two"),
                    mock::numbered("b3", "three"),
                    mock::bulleted("b4", "four"),
                ],
            );
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            "<h1>Root</h1>\
             <ul><li>one</li><li>two</li></ul>\
             <ol><li>three</li></ol>\
             <ul><li>four</li></ul>"
        );
    }

    #[test]
    fn test_adjacent_todo_and_bulleted_get_separate_lists() {
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(
                &mock::id("a1"),
                vec![todo("b1", "task", true), mock::bulleted("b2", "note")],
            );
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            "<h1>Root</h1>\
             <ul><li><input type=\"checkbox\" checked/>task</li></ul>\
             <ul><li>note</li></ul>"
        );
    }

    #[test]
    fn test_nested_list_item_wraps_title_in_paragraph() {
        let item = mock::with_children(mock::bulleted("b1", "outer"));
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![item])
            .with_block_children(&mock::id("b1"), vec![mock::paragraph("b2", "inner")]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            "<h1>Root</h1><ul><li><p>outer</p><p>inner</p></li></ul>"
        );
    }

    #[test]
    fn test_child_page_renders_as_anchor() {
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(
                &mock::id("a1"),
                vec![mock::child_page_block("a2", "Nested")],
            )
            .with_page(mock::page("a2", "Nested"))
            .with_block_children(&mock::id("a2"), vec![]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        let expected = format!(
            r#"<h1>Root</h1><p><a class="page-mention" href="{}.html">Nested</a></p>"#,
            mock::id("a2")
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_database_renders_schema_ordered_table() {
        let mut record = mock::page("c1", "Task one");
        record.properties.insert(
            "Done".to_owned(),
            nex_notion::types::PropertyValue::Checkbox { checkbox: true },
        );
        let source = MockSource::new()
            .with_database(mock::database(
                "d1",
                "Tasks",
                &[("Name", "title"), ("Done", "checkbox")],
            ))
            .with_database_children(&mock::id("d1"), vec![record]);
        let cache = MemoryCache::new();
        let fetcher = fetcher(source, &cache);
        Crawler::new(&fetcher).crawl_database(&mock::id("d1")).unwrap();

        let html = HtmlRenderer::new(&fetcher).render_database(&mock::id("d1")).unwrap();
        let expected = format!(
            "<h1>Tasks</h1><table>\
             <tr><th>Name</th><th>Done</th></tr>\
             <tr><td><a href=\"{}.html\">Task one</a></td><td>true</td></tr>\
             </table>",
            mock::id("c1")
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_database_record_missing_schema_property_renders_blank_cell() {
        let source = MockSource::new()
            .with_database(mock::database(
                "d1",
                "Tasks",
                &[("Name", "title"), ("Done", "checkbox")],
            ))
            .with_database_children(&mock::id("d1"), vec![mock::page("c1", "Task one")]);
        let cache = MemoryCache::new();
        let fetcher = fetcher(source, &cache);
        Crawler::new(&fetcher).crawl_database(&mock::id("d1")).unwrap();

        let html = HtmlRenderer::new(&fetcher).render_database(&mock::id("d1")).unwrap();
        assert!(html.ends_with("<td></td></tr></table>"));
    }

    #[test]
    fn test_table_block_headers() {
        let table = Block {
            id: mock::id("t1"),
            has_children: true,
            data: BlockData::Table {
                table: nex_notion::types::TableBlock {
                    has_column_header: true,
                    has_row_header: false,
                },
            },
        };
        let row = |tag: &str, a: &str, b: &str| Block {
            id: mock::id(tag),
            has_children: false,
            data: BlockData::TableRow {
                table_row: nex_notion::types::TableRowBlock {
                    cells: vec![vec![mock::text_run(a)], vec![mock::text_run(b)]],
                },
            },
        };
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![table])
            .with_block_children(
                &mock::id("t1"),
                vec![row("r1", "Col A", "Col B"), row("r2", "1", "2")],
            );
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            "<h1>Root</h1><table>\
             <tr><th>Col A</th><th>Col B</th></tr>\
             <tr><td>1</td><td>2</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_link_to_page_uses_cached_title() {
        let link = Block {
            id: mock::id("b1"),
            has_children: false,
            data: BlockData::LinkToPage {
                link_to_page: LinkToPage::PageId { page_id: mock::id("a2") },
            },
        };
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_page(mock::page("a2", "Target"))
            .with_block_children(&mock::id("a1"), vec![link]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);
        // Make the target cache-resident the way a full crawl would.
        fetcher.page(&mock::id("a2")).unwrap();

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        let expected = format!(
            r#"<h1>Root</h1><p><a class="page-mention" href="{}.html">Target</a></p>"#,
            mock::id("a2")
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_toggle_renders_disclosure() {
        let toggle = Block {
            id: mock::id("b1"),
            has_children: true,
            data: BlockData::Toggle {
                toggle: nex_notion::types::TextBlock {
                    rich_text: vec![mock::text_run("More")],
                    color: "default".to_owned(),
                },
            },
        };
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![toggle])
            .with_block_children(&mock::id("b1"), vec![mock::paragraph("b2", "detail")]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            "<h1>Root</h1><details><summary>More</summary><p>detail</p></details>"
        );
    }

    #[test]
    fn test_heading_children_get_container() {
        let heading = Block {
            id: mock::id("b1"),
            has_children: true,
            data: BlockData::Heading1 {
                heading_1: nex_notion::types::TextBlock {
                    rich_text: vec![mock::text_run("Section")],
                    color: "default".to_owned(),
                },
            },
        };
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![heading])
            .with_block_children(&mock::id("b1"), vec![mock::paragraph("b2", "body")]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(
            html,
            r#"<h1>Root</h1><h2>Section</h2><div class="children"><p>body</p></div>"#
        );
    }

    #[test]
    fn test_render_after_crawl_never_reaches_the_source() {
        // Crawl a tree mixing nested pages and a database, then render
        // every discovered document. The renderer must be satisfied
        // entirely from the cache.
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(
                &mock::id("a1"),
                vec![
                    mock::paragraph("b1", "intro"),
                    mock::child_page_block("a2", "Nested"),
                    mock::child_database_block("d1", "Tasks"),
                ],
            )
            .with_page(mock::page("a2", "Nested"))
            .with_block_children(&mock::id("a2"), vec![mock::bulleted("b2", "point")])
            .with_database(mock::database("d1", "Tasks", &[("Name", "title")]))
            .with_database_children(&mock::id("d1"), vec![mock::page("c1", "Row")])
            .with_block_children(&mock::id("c1"), vec![]);
        let counter = source.counter();
        let cache = MemoryCache::new();
        let fetcher = fetcher(source, &cache);

        let mut pages = Vec::new();
        let mut databases = Vec::new();
        let mut crawler = Crawler::new(&fetcher).with_observer(|seen| match seen {
            Seen::Page(page) => pages.push(page.id.clone()),
            Seen::Database(database) => databases.push(database.id.clone()),
        });
        crawler.crawl_page(&mock::id("a1")).unwrap();
        drop(crawler);
        let after_crawl = counter.get();

        let renderer = HtmlRenderer::new(&fetcher);
        for id in &pages {
            assert!(renderer.render_page(id).unwrap().starts_with("<h1>"));
        }
        for id in &databases {
            assert!(renderer.render_database(id).unwrap().contains("<table>"));
        }

        // Root, nested page, and the database record.
        assert_eq!(pages.len(), 3);
        assert_eq!(databases.len(), 1);
        assert_eq!(counter.get(), after_crawl);
    }

    #[test]
    fn test_structural_blocks_render_empty() {
        let divider = Block {
            id: mock::id("b2"),
            has_children: false,
            data: BlockData::Divider,
        };
        let breadcrumb = Block {
            id: mock::id("b1"),
            has_children: false,
            data: BlockData::Breadcrumb,
        };
        let source = MockSource::new()
            .with_page(mock::page("a1", "Root"))
            .with_block_children(&mock::id("a1"), vec![breadcrumb, divider]);
        let cache = MemoryCache::new();
        let fetcher = crawled(source, &cache);

        let html = HtmlRenderer::new(&fetcher).render_page(&mock::id("a1")).unwrap();
        assert_eq!(html, "<h1>Root</h1><hr/>");
    }
}
