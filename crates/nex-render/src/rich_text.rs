//! Rich text run rendering.

use nex_notion::types::{Annotations, Mention, RichText, RichTextData, TemplateMention};

use crate::date::format_date_value;
use crate::html::{escape_html, parse_color};

/// Render a rich text sequence to inline HTML.
pub(crate) fn render_rich_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| render_run(run, false)).collect()
}

/// Render a rich text sequence stripped of styling and links.
pub(crate) fn render_plain_text(runs: &[RichText]) -> String {
    runs.iter().map(|run| render_run(run, true)).collect()
}

fn render_run(run: &RichText, plain: bool) -> String {
    match &run.data {
        RichTextData::Text { .. } => {
            let html = escape_html(&run.plain_text);
            if plain {
                html
            } else {
                linked(run, annotated(html, &run.annotations))
            }
        }
        RichTextData::Equation { equation } => {
            let html = escape_html(&equation.expression);
            linked(run, annotated(html, &run.annotations))
        }
        RichTextData::Mention { mention } => render_mention(run, mention, plain),
    }
}

/// Apply annotation wrappers, innermost first, so the result nests as
/// `<strong><code><em><s><u>text</u></s></em></code></strong>`.
fn annotated(mut html: String, annotations: &Annotations) -> String {
    if annotations.underline {
        html = format!("<u>{html}</u>");
    }
    if annotations.strikethrough {
        html = format!("<s>{html}</s>");
    }
    if annotations.italic {
        html = format!("<em>{html}</em>");
    }
    if annotations.code {
        html = format!("<code>{html}</code>");
    }
    if annotations.bold {
        html = format!("<strong>{html}</strong>");
    }

    let (color, background) = parse_color(&annotations.color);
    if let Some(background) = background {
        html = format!(r#"<span style="background:{background}">{html}</span>"#);
    }
    if let Some(color) = color {
        html = format!(r#"<span style="color:{color}">{html}</span>"#);
    }
    html
}

fn linked(run: &RichText, html: String) -> String {
    match &run.href {
        Some(href) => format!(r#"<a href="{}">{html}</a>"#, escape_html(href)),
        None => html,
    }
}

fn render_mention(run: &RichText, mention: &Mention, plain: bool) -> String {
    match mention {
        Mention::Date { date } => {
            let text = format_date_value(date);
            if plain {
                text
            } else {
                format!("<time>{text}</time>")
            }
        }
        Mention::Page { page } => entity_anchor(&run.plain_text, &page.id, plain),
        Mention::Database { database } => entity_anchor(&run.plain_text, &database.id, plain),
        Mention::LinkPreview { link_preview } => {
            let text = escape_html(&run.plain_text);
            if plain {
                text
            } else {
                format!(r#"<a href="{}">{text}</a>"#, escape_html(&link_preview.url))
            }
        }
        Mention::User { user } => {
            let text = escape_html(&run.plain_text);
            if plain {
                text
            } else {
                format!(
                    r#"<span class="user-mention" data-id="{}">{text}</span>"#,
                    escape_html(&user.id)
                )
            }
        }
        Mention::TemplateMention { template_mention } => {
            let name = match template_mention {
                TemplateMention::TemplateMentionDate { template_mention_date } => {
                    template_mention_date
                }
                TemplateMention::TemplateMentionUser { template_mention_user } => {
                    template_mention_user
                }
            };
            let text = format!("{{{{{}}}}}", escape_html(name));
            if plain {
                text
            } else {
                format!("<span>{text}</span>")
            }
        }
    }
}

fn entity_anchor(plain_text: &str, id: &str, plain: bool) -> String {
    let text = escape_html(plain_text);
    if plain {
        text
    } else {
        format!(r#"<a class="page-mention" href="{id}.html">{text}</a>"#)
    }
}
