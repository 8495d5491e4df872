//! Module containing error details.

use crate::Position;

/// The template contains a syntax error.
///
/// The only syntax error at this time is a code block that is never closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
	/// A human readable description of the error.
	pub message: String,

	/// The position where scanning failed.
	pub position: Position,

	/// The byte offset within the source of the open tag belonging to the failed block.
	///
	/// This is `None` for errors that are not tied to an open tag.
	pub tag_start: Option<usize>,
}

impl SyntaxError {
	/// Create a new syntax error at the given position.
	///
	/// The error is not associated with an open tag, so it has no source highlighting.
	pub fn new(position: Position, message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			position,
			tag_start: None,
		}
	}

	/// Get the range in the source text that contains the error.
	///
	/// This covers the open tag of the failed block,
	/// or is `None` if the error is not tied to an open tag.
	pub fn source_range(&self) -> Option<std::ops::Range<usize>> {
		let start = self.tag_start?;
		Some(start..start + 2)
	}

	/// Get the line of source that contains the error.
	///
	/// Returns `None` if the error is not tied to an open tag.
	///
	/// # Panics
	/// May panic if the source text is not the original source that contains the error.
	pub fn source_line<'a>(&self, source: &'a str) -> Option<&'a str> {
		let position = self.source_range()?.start;
		let start = line_start(source, position);
		let end = line_end(source, position);
		Some(&source[start..end])
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if the error is not tied to an open tag,
	/// or if the source line exceeds 60 characters in width.
	/// For more control over this behaviour, consider using [`Self::source_range()`] and [`Self::source_line()`] instead.
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &str) -> std::fmt::Result {
		use unicode_width::UnicodeWidthStr;

		let (Some(range), Some(line)) = (self.source_range(), self.source_line(source)) else {
			return Ok(());
		};
		if line.width() > 60 {
			return Ok(());
		}
		let line_start = line_start(source, range.start);
		write!(f, "  {}\n  ", line)?;
		write_underline(f, line, range.start - line_start..range.end - line_start)?;
		writeln!(f)
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline, or is empty if there is nothing to highlight.
	pub fn source_highlighting(&self, source: &str) -> String {
		let mut output = String::new();
		self.write_source_highlighting(&mut output, source).unwrap();
		output
	}
}

impl std::error::Error for SyntaxError {}

impl std::fmt::Display for SyntaxError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{} at {}", self.message, self.position)
	}
}

/// An error that can occur while parsing a template from a reader or a file.
#[derive(Debug)]
pub enum ParseError {
	/// Reading the template source failed.
	///
	/// This holds the original I/O error unchanged.
	Io(std::io::Error),

	/// The template contains a syntax error.
	Syntax(SyntaxError),
}

impl From<std::io::Error> for ParseError {
	#[inline]
	fn from(other: std::io::Error) -> Self {
		Self::Io(other)
	}
}

impl From<SyntaxError> for ParseError {
	#[inline]
	fn from(other: SyntaxError) -> Self {
		Self::Syntax(other)
	}
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Io(e) => std::fmt::Display::fmt(e, f),
			Self::Syntax(e) => std::fmt::Display::fmt(e, f),
		}
	}
}

fn line_start(source: &str, position: usize) -> usize {
	match source.as_bytes()[..position].iter().rposition(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => line_end + 1,
		None => 0,
	}
}

fn line_end(source: &str, position: usize) -> usize {
	match source.as_bytes()[position..].iter().position(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => position + line_end,
		None => source.len(),
	}
}

fn write_underline(f: &mut impl std::fmt::Write, line: &str, range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;
	let spaces = line[..range.start].width();
	let carets = line[range].width();
	write!(f, "{}", " ".repeat(spaces))?;
	write!(f, "{}", "^".repeat(carets))?;
	Ok(())
}
