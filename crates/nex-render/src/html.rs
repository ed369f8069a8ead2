//! Small HTML emission helpers.

use std::fmt::Write;

/// Escape text for safe inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Split a color attribute into foreground and background parts.
///
/// `"default"` means unstyled. Names ending in `_background` (for example
/// `blue_background`) style the background with the prefix before the
/// underscore; every other name styles the foreground.
pub(crate) fn parse_color(raw: &str) -> (Option<&str>, Option<&str>) {
    if raw == "default" {
        return (None, None);
    }
    if raw.contains("background") {
        let background = raw.split('_').next().unwrap_or(raw);
        return (None, Some(background));
    }
    (Some(raw), None)
}

/// Wrap `content` in `tag`, carrying the block color as an inline style.
pub(crate) fn colored(tag: &str, color: &str, content: &str) -> String {
    let (color, background) = parse_color(color);
    let mut out = String::with_capacity(content.len() + 32);
    if let Some(background) = background {
        write!(out, r#"<{tag} style="background:{background}">{content}</{tag}>"#)
            .unwrap();
    } else if let Some(color) = color {
        write!(out, r#"<{tag} style="color:{color}">{content}</{tag}>"#).unwrap();
    } else {
        write!(out, "<{tag}>{content}</{tag}>").unwrap();
    }
    out
}

/// Wrap non-empty nested content in the shared children container.
pub(crate) fn children_div(html: String) -> String {
    if html.is_empty() {
        html
    } else {
        format!(r#"<div class="children">{html}</div>"#)
    }
}
