//! HTML rendering over a crawled cache.
//!
//! [`HtmlRenderer`] turns a fully-crawled page or database into one
//! self-contained HTML string, reading through the same fetch interface the
//! crawler populated. Rendering assumes the crawl already ran: a missing
//! root entity is a hard error here, unlike the tolerant crawl.
//!
//! Dispatch over block and property variants is exhaustive by construction;
//! the entity model is a closed set of enums, so upstream drift fails at
//! deserialization instead of rendering blanks.

mod date;
mod error;
mod html;
mod property;
mod renderer;
mod rich_text;

pub use error::RenderError;
pub use html::escape_html;
pub use renderer::HtmlRenderer;
