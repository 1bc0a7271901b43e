//! Frontmatter block rendering.

use serde_json::Value;
use std::fmt::{self, Write};

/// Line terminator used throughout generated files.
pub const LINE_ENDING: &str = "\r\n";

/// Delimiter opening and closing the frontmatter block.
pub const DELIMITER: &str = "---";

/// The fields of a content file's frontmatter, in emission order.
///
/// Empty optional values are skipped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
    pub lead: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    /// Emitted unquoted, verbatim.
    pub date: String,
    pub tags: Vec<String>,
}

impl Frontmatter {
    /// Renders the block, including both delimiter lines.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(f, DELIMITER)?;
        if let Some(title) = non_empty(&self.title) {
            write_quoted(f, "title", title)?;
        }
        write_quoted(f, "lead", &self.lead)?;
        if let Some(image) = non_empty(&self.image) {
            write_quoted(f, "image", image)?;
        }
        if let Some(image_alt) = non_empty(&self.image_alt) {
            write_quoted(f, "imageAlt", image_alt)?;
        }
        write_line(f, &format!("date: {}", self.date))?;
        if !self.tags.is_empty() {
            let tags = Value::from(self.tags.clone());
            write_line(f, &format!("tags: {tags}"))?;
        }
        write_line(f, DELIMITER)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn write_line(out: &mut impl Write, line: &str) -> fmt::Result {
    out.write_str(line)?;
    out.write_str(LINE_ENDING)
}

fn write_quoted(out: &mut impl Write, key: &str, value: &str) -> fmt::Result {
    write_line(out, &format!("{key}: {}", json_string(value)))
}

/// Encodes `value` as a JSON string literal, quotes included.
pub(crate) fn json_string(value: &str) -> String {
    Value::from(value).to_string()
}
