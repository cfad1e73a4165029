//! Output formatting utilities
//!
//! Renders a decoded `ActivityResponse` as text or JSON. The text form lists
//! an idea's fields explicitly, in a fixed order, skipping the ones that are
//! empty.

use std::io::{self, Write};

use bored_core::{ActivityResponse, Idea};

use crate::cli::args::OutputFormat;

/// Width the field labels are padded to in text output.
const LABEL_WIDTH: usize = 13;

/// One printable field of an idea.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
    pub is_empty: bool,
}

impl Field {
    fn text(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            is_empty: value.is_empty(),
        }
    }

    fn number(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
            is_empty: false,
        }
    }
}

/// Fields of `idea` in display order. Only text fields can be empty.
pub fn idea_fields(idea: &Idea) -> Vec<Field> {
    vec![
        Field::text("Activity", &idea.activity),
        Field::number("Accessibility", idea.accessibility),
        Field::text("Type", &idea.kind),
        Field::number("Participants", idea.participants),
        Field::number("Price", idea.price),
        Field::text("Link", &idea.link),
        Field::text("Key", &idea.key),
    ]
}

/// Text form of an idea: blank line, one `label = value` line per non-empty
/// field, blank line.
pub fn idea_to_text(idea: &Idea) -> String {
    let mut out = String::from("\n");
    for field in idea_fields(idea).into_iter().filter(|f| !f.is_empty) {
        out.push_str(&format!("{:<LABEL_WIDTH$} = {}\n", field.label, field.value));
    }
    out.push('\n');
    out
}

/// Write `response` to `out` in the selected format.
///
/// `Empty` writes nothing; the caller reports it.
pub fn write_response<W: Write>(
    out: &mut W,
    response: &ActivityResponse,
    format: OutputFormat,
) -> io::Result<()> {
    match (format, response) {
        (_, ActivityResponse::Empty) => {}
        (OutputFormat::Text, ActivityResponse::Idea(idea)) => {
            write!(out, "{}", idea_to_text(idea))?;
        }
        (OutputFormat::Text, ActivityResponse::Rejected(rejected)) => {
            writeln!(out, "{}", rejected.error)?;
        }
        (OutputFormat::Json, ActivityResponse::Idea(idea)) => {
            writeln!(out, "{}", to_json(idea)?)?;
        }
        (OutputFormat::Json, ActivityResponse::Rejected(rejected)) => {
            writeln!(out, "{}", to_json(rejected)?)?;
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
