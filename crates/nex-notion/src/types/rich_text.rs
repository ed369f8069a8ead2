//! Rich text runs and mentions.

use serde::{Deserialize, Serialize};

use super::default_color;

/// One styled inline unit within a text field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RichText {
    /// Unstyled text of this run.
    #[serde(default)]
    pub plain_text: String,
    /// Optional link target.
    #[serde(default)]
    pub href: Option<String>,
    /// Style set applied to this run.
    #[serde(default)]
    pub annotations: Annotations,
    /// Token kind and payload.
    #[serde(flatten)]
    pub data: RichTextData,
}

/// Style set for a rich text run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    /// Color name, or `default`. `*_background` names set the background.
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

/// Rich text token kinds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextData {
    /// Plain styled text.
    Text { text: TextContent },
    /// Inline equation (raw expression, typesetting is out of scope).
    Equation { equation: Equation },
    /// Reference to another entity, a date, a user, or an external link.
    Mention { mention: Mention },
}

/// Payload of a text token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

/// Inline link payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Link {
    pub url: String,
}

/// Equation payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Equation {
    pub expression: String,
}

/// A reference carried by a url-only payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlRef {
    pub url: String,
}

/// Mention sub-kinds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    Page { page: EntityRef },
    Database { database: EntityRef },
    Date { date: DateValue },
    User { user: UserRef },
    LinkPreview { link_preview: UrlRef },
    TemplateMention { template_mention: TemplateMention },
}

/// Id-only reference to a page or database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntityRef {
    pub id: String,
}

/// Reference to a workspace user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserRef {
    pub id: String,
}

/// Template placeholder mention.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TemplateMention {
    TemplateMentionDate { template_mention_date: String },
    TemplateMentionUser { template_mention_user: String },
}

/// A date or date range property/mention value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DateValue {
    /// ISO date (`2024-03-01`) or timestamp (`2024-03-01T15:45:00.000Z`).
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    /// IANA time zone label, when the value carries one.
    #[serde(default)]
    pub time_zone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_text_run() {
        let json = r#"{
            "type": "text",
            "text": { "content": "hello", "link": null },
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": "hello",
            "href": null
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        assert_eq!(run.plain_text, "hello");
        assert!(run.annotations.bold);
        match &run.data {
            RichTextData::Text { text } => assert_eq!(text.content, "hello"),
            other => panic!("expected text run, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_date_mention() {
        let json = r#"{
            "type": "mention",
            "mention": {
                "type": "date",
                "date": { "start": "2024-03-01", "end": null, "time_zone": null }
            },
            "plain_text": "2024-03-01",
            "href": null
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        let RichTextData::Mention { mention: Mention::Date { date } } = &run.data else {
            panic!("expected date mention");
        };
        assert_eq!(date.start, "2024-03-01");
        assert_eq!(date.end, None);
    }

    #[test]
    fn test_unknown_token_kind_is_an_error() {
        let json = r#"{ "type": "hologram", "hologram": {}, "plain_text": "" }"#;
        assert!(serde_json::from_str::<RichText>(json).is_err());
    }

    #[test]
    fn test_rich_text_round_trips_through_cache_blob() {
        let json = r#"{
            "type": "equation",
            "equation": { "expression": "e=mc^2" },
            "plain_text": "e=mc^2",
            "href": null
        }"#;
        let run: RichText = serde_json::from_str(json).unwrap();
        let blob = serde_json::to_vec(&run).unwrap();
        let back: RichText = serde_json::from_slice(&blob).unwrap();
        assert_eq!(back.plain_text, "e=mc^2");
        match back.data {
            RichTextData::Equation { equation } => assert_eq!(equation.expression, "e=mc^2"),
            other => panic!("expected equation run, got {other:?}"),
        }
    }
}
