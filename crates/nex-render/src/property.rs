//! Typed property value formatting for database cells.

use nex_notion::types::{FormulaValue, PropertyValue, RollupValue, SelectOption, User};

use crate::date::{format_date_value, format_timestamp};
use crate::html::escape_html;
use crate::rich_text::{render_plain_text, render_rich_text};

/// Render one property value as a table cell fragment.
///
/// Null scalars render blank. `record_id` is the owning record, used to
/// turn the title property into the row's link.
pub(crate) fn render_property(value: &PropertyValue, record_id: &str) -> String {
    match value {
        PropertyValue::Title { title } => {
            let text = render_plain_text(title);
            format!(r#"<a href="{record_id}.html">{text}</a>"#)
        }
        PropertyValue::RichText { rich_text } => render_rich_text(rich_text),

        PropertyValue::Number { number } => number.map(format_number).unwrap_or_default(),
        PropertyValue::Checkbox { checkbox } => checkbox.to_string(),

        PropertyValue::Select { select } | PropertyValue::Status { status: select } => {
            select.as_ref().map(token).unwrap_or_default()
        }
        PropertyValue::MultiSelect { multi_select } => {
            multi_select.iter().map(token).collect::<Vec<_>>().join(", ")
        }

        PropertyValue::Date { date } => {
            date.as_ref().map(format_date_value).unwrap_or_default()
        }
        PropertyValue::CreatedTime { created_time } => format_timestamp(created_time),
        PropertyValue::LastEditedTime { last_edited_time } => {
            format_timestamp(last_edited_time)
        }

        PropertyValue::People { people } => {
            people.iter().map(person_name).collect::<Vec<_>>().join(", ")
        }
        PropertyValue::CreatedBy { created_by: user }
        | PropertyValue::LastEditedBy { last_edited_by: user } => person_name(user),

        PropertyValue::Url { url } => url
            .as_ref()
            .map(|url| {
                let url = escape_html(url);
                format!(r#"<a href="{url}">{url}</a>"#)
            })
            .unwrap_or_default(),
        PropertyValue::Email { email } => email
            .as_ref()
            .map(|email| {
                let email = escape_html(email);
                format!(r#"<a href="mailto:{email}">{email}</a>"#)
            })
            .unwrap_or_default(),
        PropertyValue::PhoneNumber { phone_number } => phone_number
            .as_ref()
            .map(|phone| {
                let digits: String =
                    phone.chars().filter(char::is_ascii_digit).collect();
                format!(r#"<a href="tel:{digits}">{}</a>"#, escape_html(phone))
            })
            .unwrap_or_default(),

        PropertyValue::Files { files } => files
            .iter()
            .map(|file| {
                format!(
                    r#"<a href="{}">{}</a>"#,
                    escape_html(file.source.url()),
                    escape_html(&file.name)
                )
            })
            .collect::<Vec<_>>()
            .join(", "),

        PropertyValue::Relation { relation } => relation
            .iter()
            .map(|relation| format!(r#"<a href="{0}.html">{0}</a>"#, relation.id))
            .collect::<Vec<_>>()
            .join(", "),

        PropertyValue::Formula { formula } => match formula {
            FormulaValue::Boolean { boolean } => boolean.unwrap_or_default().to_string(),
            FormulaValue::Date { date } => {
                date.as_ref().map(format_date_value).unwrap_or_default()
            }
            FormulaValue::Number { number } => {
                number.map(format_number).unwrap_or_default()
            }
            FormulaValue::String { string } => {
                string.as_deref().map(escape_html).unwrap_or_default()
            }
        },

        PropertyValue::Rollup { rollup } => match rollup {
            RollupValue::Number { number } => {
                number.map(format_number).unwrap_or_default()
            }
            RollupValue::Date { date } => {
                date.as_ref().map(format_date_value).unwrap_or_default()
            }
            RollupValue::Array { array } => array
                .iter()
                .map(|item| render_property(item, record_id))
                .collect::<Vec<_>>()
                .join(", "),
        },
    }
}

fn format_number(number: f64) -> String {
    number.to_string()
}

fn token(option: &SelectOption) -> String {
    format!(
        r#"<span class="token" style="background:{}">{}</span>"#,
        escape_html(&option.color),
        escape_html(&option.name)
    )
}

fn person_name(user: &User) -> String {
    user.name.as_deref().map(escape_html).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nex_notion::types::{DateValue, Relation};
    use pretty_assertions::assert_eq;

    const RECORD: &str = "rec-1";

    #[test]
    fn test_null_scalars_render_blank() {
        assert_eq!(render_property(&PropertyValue::Number { number: None }, RECORD), "");
        assert_eq!(render_property(&PropertyValue::Url { url: None }, RECORD), "");
        assert_eq!(render_property(&PropertyValue::Date { date: None }, RECORD), "");
    }

    #[test]
    fn test_number_drops_trailing_zero() {
        assert_eq!(
            render_property(&PropertyValue::Number { number: Some(4.0) }, RECORD),
            "4"
        );
        assert_eq!(
            render_property(&PropertyValue::Number { number: Some(2.5) }, RECORD),
            "2.5"
        );
    }

    #[test]
    fn test_checkbox_is_literal() {
        assert_eq!(
            render_property(&PropertyValue::Checkbox { checkbox: true }, RECORD),
            "true"
        );
    }

    #[test]
    fn test_phone_anchor_keeps_digits_only_in_scheme() {
        let value = PropertyValue::PhoneNumber {
            phone_number: Some("+1 (555) 010-2030".to_owned()),
        };
        assert_eq!(
            render_property(&value, RECORD),
            r#"<a href="tel:15550102030">+1 (555) 010-2030</a>"#
        );
    }

    #[test]
    fn test_email_anchor() {
        let value = PropertyValue::Email { email: Some("ada@example.com".to_owned()) };
        assert_eq!(
            render_property(&value, RECORD),
            r#"<a href="mailto:ada@example.com">ada@example.com</a>"#
        );
    }

    #[test]
    fn test_multi_select_tokens() {
        let value = PropertyValue::MultiSelect {
            multi_select: vec![
                SelectOption { name: "a".to_owned(), color: "red".to_owned() },
                SelectOption { name: "b".to_owned(), color: "blue".to_owned() },
            ],
        };
        assert_eq!(
            render_property(&value, RECORD),
            r#"<span class="token" style="background:red">a</span>, <span class="token" style="background:blue">b</span>"#
        );
    }

    #[test]
    fn test_title_links_to_record_document() {
        let value = PropertyValue::Title {
            title: vec![nex_export::mock::text_run("Task one")],
        };
        assert_eq!(
            render_property(&value, RECORD),
            r#"<a href="rec-1.html">Task one</a>"#
        );
    }

    #[test]
    fn test_relation_links_by_id() {
        let value = PropertyValue::Relation {
            relation: vec![Relation { id: "other-1".to_owned() }],
        };
        assert_eq!(
            render_property(&value, RECORD),
            r#"<a href="other-1.html">other-1</a>"#
        );
    }

    #[test]
    fn test_rollup_array_recurses() {
        let value = PropertyValue::Rollup {
            rollup: RollupValue::Array {
                array: vec![
                    PropertyValue::Number { number: Some(1.0) },
                    PropertyValue::Checkbox { checkbox: false },
                ],
            },
        };
        assert_eq!(render_property(&value, RECORD), "1, false");
    }

    #[test]
    fn test_formula_date_unwraps() {
        let value = PropertyValue::Formula {
            formula: FormulaValue::Date {
                date: Some(DateValue {
                    start: "2024-03-01".to_owned(),
                    end: None,
                    time_zone: None,
                }),
            },
        };
        assert_eq!(render_property(&value, RECORD), "Mar 1, 2024");
    }

    #[test]
    fn test_missing_user_name_renders_blank() {
        let value = PropertyValue::People {
            people: vec![User { id: "u-1".to_owned(), name: None }],
        };
        assert_eq!(render_property(&value, RECORD), "");
    }
}
