//! Dump parsed templates as JSON.
//!
//! This is the hand-off format for code generators that do not link against this crate.
//! Each block is an object with a `kind` (`"text"` or `"code"`), a `position` and the `content`.

use crate::Template;

/// Serialize a template as a compact JSON string.
pub fn to_string(template: &Template) -> Result<String, serde_json::Error> {
	serde_json::to_string(template)
}

/// Serialize a template as a pretty-printed JSON string.
pub fn to_string_pretty(template: &Template) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(template)
}

/// Serialize a template as JSON into a writer.
pub fn to_writer<W: std::io::Write>(writer: W, template: &Template) -> Result<(), serde_json::Error> {
	serde_json::to_writer(writer, template)
}

/// Load a template from a JSON dump.
pub fn from_str(data: &str) -> Result<Template, serde_json::Error> {
	serde_json::from_str(data)
}
