use crate::error::SyntaxError;
use crate::{Block, CodeBlock, Position, TextBlock};

mod cursor;
use cursor::Cursor;

/// The tag that opens a code block.
const OPEN_TAG: &str = "<%";

/// Escape sequence for a literal open tag in text.
const ESCAPED_OPEN_TAG: &str = "<%%";

/// A tokenizer for got templates.
///
/// The scanner buffers the whole input up front and produces one [`Block`] per call to [`Self::next_block()`].
/// It can also be used as an iterator over the blocks.
pub struct Scanner {
	cursor: Cursor,
}

impl std::fmt::Debug for Scanner {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Scanner")
			.field("position", self.cursor.position())
			.field("offset", &self.cursor.offset())
			.finish()
	}
}

impl Scanner {
	/// Create a scanner for a template source.
	///
	/// The `path` is only used to tag block positions and errors.
	pub fn new(source: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			cursor: Cursor::new(source.into(), path.into()),
		}
	}

	/// Create a scanner by reading the entire contents of a reader.
	///
	/// Every byte that is not part of a valid UTF-8 sequence is replaced with one `U+FFFD REPLACEMENT CHARACTER`.
	pub fn from_reader(mut reader: impl std::io::Read, path: impl Into<String>) -> std::io::Result<Self> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		let source = match String::from_utf8(data) {
			Ok(source) => source,
			Err(e) => decode_bytewise(e.as_bytes()),
		};
		Ok(Self::new(source, path))
	}

	/// Get the full source text being scanned.
	pub fn source(&self) -> &str {
		self.cursor.source()
	}

	/// Get the position of the next character to be scanned.
	pub fn position(&self) -> &Position {
		self.cursor.position()
	}

	/// Scan the next block.
	///
	/// Returns `Ok(None)` once the input is exhausted, and keeps doing so on every further call.
	pub fn next_block(&mut self) -> Result<Option<Block>, SyntaxError> {
		if self.cursor.is_eof() {
			return Ok(None);
		}

		// The escaped open tag must be checked before the open tag itself.
		let block = if self.cursor.peek_n(3) == ESCAPED_OPEN_TAG {
			let position = self.cursor.position().clone();
			self.cursor.read_n(3);
			Block::Text(TextBlock {
				position,
				content: OPEN_TAG.into(),
			})
		} else if self.cursor.peek_n(2) == OPEN_TAG {
			Block::Code(self.scan_code_block()?)
		} else {
			Block::Text(self.scan_text_block())
		};

		tracing::trace!(kind = block.kind(), line = block.position().line, "scanned block");
		Ok(Some(block))
	}

	/// Scan literal text up to the next open tag or the end of the input.
	///
	/// The first character is never the start of an open tag, so it is always consumed.
	/// The block position is taken after that first character:
	/// text that starts with a newline is reported on the following line.
	fn scan_text_block(&mut self) -> TextBlock {
		let mut content = self.cursor.read_n(1);
		let position = self.cursor.position().clone();
		content.push_str(self.cursor.read_until(OPEN_TAG));
		TextBlock { position, content }
	}

	/// Scan a code block, starting at the open tag.
	fn scan_code_block(&mut self) -> Result<CodeBlock, SyntaxError> {
		let position = self.cursor.position().clone();
		let tag_start = self.cursor.offset();
		let open = self.cursor.read_n(2);
		debug_assert_eq!(open, OPEN_TAG, "code block dispatched without an open tag");

		let content = self.scan_content(tag_start)?;
		Ok(CodeBlock {
			position,
			content: content.trim().to_owned(),
		})
	}

	/// Scan the raw body of a code block up to and including the close tag.
	///
	/// Returns the body without the close tag, with `%%>` decoded to `%>`.
	fn scan_content(&mut self, tag_start: usize) -> Result<String, SyntaxError> {
		let mut content = String::new();
		loop {
			match self.cursor.read() {
				None => return Err(self.missing_close_tag(tag_start)),
				Some('%') => match self.cursor.read() {
					None => return Err(self.missing_close_tag(tag_start)),
					Some('>') => return Ok(content),
					Some('%') if self.cursor.peek() == Some('>') => {
						self.cursor.read();
						content.push_str("%>");
					},
					Some(c) => {
						content.push('%');
						content.push(c);
					},
				},
				Some(c) => content.push(c),
			}
		}
	}

	fn missing_close_tag(&self, tag_start: usize) -> SyntaxError {
		SyntaxError {
			message: "Expected close tag, found EOF".into(),
			position: self.cursor.position().clone(),
			tag_start: Some(tag_start),
		}
	}
}

/// Decode UTF-8, replacing each invalid byte with `U+FFFD`.
///
/// Unlike [`String::from_utf8_lossy()`], a truncated multi-byte sequence gives one replacement per byte.
fn decode_bytewise(data: &[u8]) -> String {
	let mut output = String::with_capacity(data.len());
	for chunk in data.utf8_chunks() {
		output.push_str(chunk.valid());
		for _ in chunk.invalid() {
			output.push(char::REPLACEMENT_CHARACTER);
		}
	}
	output
}

impl Iterator for Scanner {
	type Item = Result<Block, SyntaxError>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_block().transpose()
	}
}
