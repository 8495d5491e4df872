//! Scanner for got templates.
//!
//! A got template is literal text with embedded code fragments.
//! This crate splits a template into an ordered list of text and code blocks,
//! each tagged with the line where it starts.
//! Turning the blocks into source code is left to a code generator.
//!
//! # Syntax
//!
//! * `<% code %>`: an embedded code block. Surrounding whitespace inside the tags is trimmed.
//! * `<%%`: a literal `<%` in text.
//! * `%%>` inside a code block: a literal `%>` in the code.
//! * Anything else is literal text, copied verbatim.
//!
//! # Features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`Template`], [`Block`] and [`Position`].
//! * `json`: dump templates as JSON with the [`json`] module.
//!
//! # Examples
//!
//! The [`parse_str()`] function parses a template held in memory.
//!
//! ```
//! # fn main() -> Result<(), got::SyntaxError> {
//! use got::Block;
//!
//! let template = got::parse_str("Hello <% name %>!", "hello.got")?;
//! let blocks = template.blocks();
//! assert!(matches!(&blocks[0], Block::Text(b) if b.content == "Hello "));
//! assert!(matches!(&blocks[1], Block::Code(b) if b.content == "name"));
//! assert!(matches!(&blocks[2], Block::Text(b) if b.content == "!"));
//! # Ok(())
//! # }
//! ```
//!
//! Errors report the position where scanning failed.
//!
//! ```
//! let error = got::parse_str("Hello <% name", "hello.got").unwrap_err();
//! assert_eq!(error.to_string(), "Expected close tag, found EOF at hello.got:1");
//! ```
//!
//! Use [`parse_file()`] to read a template from disk, or [`parse()`] for any [`std::io::Read`] source.
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

use std::path::Path;

pub mod error;
pub use error::{ParseError, SyntaxError};

mod block;
pub use block::*;

mod position;
pub use position::Position;

mod scanner;
pub use scanner::Scanner;

mod template;
pub use template::Template;

mod features;
#[allow(unused_imports)] // Might not re-export anything if all features are disabled.
pub use features::*;

/// Parse a template held in memory.
///
/// The `path` is only used to tag block positions and errors.
/// A syntax error aborts the parse; no partial template is returned.
pub fn parse_str(source: &str, path: &str) -> Result<Template, SyntaxError> {
	scan_all(Scanner::new(source, path), path)
}

/// Parse a template from a reader.
///
/// The entire reader is consumed before scanning starts.
/// The `path` is only used to tag block positions and errors: this function never opens it.
pub fn parse(reader: impl std::io::Read, path: &str) -> Result<Template, ParseError> {
	let scanner = Scanner::from_reader(reader, path)?;
	Ok(scan_all(scanner, path)?)
}

/// Parse a template from a file.
///
/// The file is closed before this function returns, also on errors.
/// Errors from opening or reading the file are returned unchanged as [`ParseError::Io`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Template, ParseError> {
	let path = path.as_ref();
	let file = std::fs::File::open(path)?;
	parse(file, &path.to_string_lossy())
}

/// Run the scanner to the end of the input and collect the blocks into a template.
fn scan_all(mut scanner: Scanner, path: &str) -> Result<Template, SyntaxError> {
	tracing::debug!(path, "parsing template");
	let mut blocks = Vec::new();
	loop {
		match scanner.next_block() {
			Ok(Some(block)) => blocks.push(block),
			Ok(None) => break,
			Err(e) => {
				tracing::debug!(path, error = %e, "template has a syntax error");
				return Err(e);
			},
		}
	}

	let template = Template::new(path, blocks);
	tracing::debug!(path, blocks = template.blocks().len(), "parsed template");
	Ok(template)
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::{assert, check, let_assert};

	#[test]
	fn test_parse_str() {
		let_assert!(Ok(template) = parse_str("hello\nworld<% x := 1 %>\n\ngoodbye", "tpl.got"));
		check!(template.path() == "tpl.got");

		let blocks: Vec<_> = template.iter().map(|b| (b.kind(), b.content(), b.position().line)).collect();
		assert!(blocks == [
			("text", "hello\nworld", 1),
			("code", "x := 1", 2),
			("text", "\n\ngoodbye", 3),
		]);
	}

	#[test]
	fn test_parse_str_empty() {
		let_assert!(Ok(template) = parse_str("", "empty.got"));
		check!(template.path() == "empty.got");
		assert!(template.blocks().is_empty());
	}

	#[test]
	fn test_parse_str_syntax_error() {
		let source = "<% if x { %>\n  yes\n<% }";
		let_assert!(Err(e) = parse_str(source, "tpl.got"));
		check!(e.to_string() == "Expected close tag, found EOF at tpl.got:3");
		assert!(e.source_highlighting(source) == concat!(
			"  <% }\n",
			"  ^^\n",
		));
	}

	#[test]
	fn test_parse_reader() {
		let_assert!(Ok(template) = parse(&b"<% a %><%% b %%> c"[..], "tpl.got"));
		let blocks: Vec<_> = template.iter().map(|b| (b.kind(), b.content())).collect();
		assert!(blocks == [
			("code", "a"),
			("text", "<%"),
			("text", " b %%> c"),
		]);
	}

	#[test]
	fn test_parse_reader_syntax_error() {
		let_assert!(Err(ParseError::Syntax(e)) = parse(&b"text <% code"[..], "tpl.got"));
		assert!(e.message == "Expected close tag, found EOF");
	}

	#[test]
	fn test_parse_reader_io_error() {
		struct Broken;

		impl std::io::Read for Broken {
			fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
				Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "broken pipe dream"))
			}
		}

		let_assert!(Err(ParseError::Io(e)) = parse(Broken, "tpl.got"));
		check!(e.kind() == std::io::ErrorKind::ConnectionReset);
		check!(e.to_string() == "broken pipe dream");
	}
}
