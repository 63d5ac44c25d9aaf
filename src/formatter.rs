use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::options::FormatOptions;
use crate::repair;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatResult {
    Empty,
    Formatted { text: String },
    ParseError { message: String },
}

impl FormatResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, FormatResult::Empty)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            FormatResult::Formatted { text } => Some(text),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormatResult::ParseError { message } => Some(message),
            _ => None,
        }
    }
}

pub fn format(raw: &str) -> FormatResult {
    format_with_options(raw, &FormatOptions::default())
}

pub fn format_with_options(raw: &str, options: &FormatOptions) -> FormatResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return FormatResult::Empty;
    }

    let candidate = repair::repair(trimmed);
    match serde_json::from_str::<Value>(&candidate).and_then(|value| pretty(&value, options)) {
        Ok(text) => FormatResult::Formatted { text },
        Err(err) => FormatResult::ParseError {
            message: format!("Error parsing JSON: {err}"),
        },
    }
}

fn pretty(value: &Value, options: &FormatOptions) -> serde_json::Result<String> {
    let indent = " ".repeat(options.indent.width());
    let mut out = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}
