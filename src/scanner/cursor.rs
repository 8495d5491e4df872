use crate::Position;

/// A cursor over a fully buffered template source.
///
/// The source is kept as a string and indexed by byte offset,
/// but all reads and peeks operate on whole characters.
/// The running position advances only when a newline is consumed.
pub(super) struct Cursor {
	source: String,
	finger: usize,
	position: Position,
}

impl Cursor {
	pub(super) fn new(source: String, path: String) -> Self {
		Self {
			source,
			finger: 0,
			position: Position::start(path),
		}
	}

	/// The position of the next character to be read.
	pub(super) fn position(&self) -> &Position {
		&self.position
	}

	/// The byte offset of the next character to be read.
	pub(super) fn offset(&self) -> usize {
		self.finger
	}

	/// The full source text.
	pub(super) fn source(&self) -> &str {
		&self.source
	}

	/// The unread part of the source.
	fn rest(&self) -> &str {
		&self.source[self.finger..]
	}

	pub(super) fn is_eof(&self) -> bool {
		self.finger >= self.source.len()
	}

	/// Read the next character and move the cursor forward.
	///
	/// Returns `None` at the end of the input.
	pub(super) fn read(&mut self) -> Option<char> {
		let c = self.rest().chars().next()?;
		self.finger += c.len_utf8();
		if c == '\n' {
			self.position.line += 1;
		}
		Some(c)
	}

	/// Read up to `n` characters, stopping early at the end of the input.
	pub(super) fn read_n(&mut self, n: usize) -> String {
		let mut output = String::with_capacity(n);
		for _ in 0..n {
			match self.read() {
				Some(c) => output.push(c),
				None => break,
			}
		}
		output
	}

	/// Get the next character without moving the cursor.
	pub(super) fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	/// Get up to `n` characters without moving the cursor.
	pub(super) fn peek_n(&self, n: usize) -> &str {
		let rest = self.rest();
		let end = rest.char_indices().nth(n).map_or(rest.len(), |(i, _)| i);
		&rest[..end]
	}

	/// Consume input up to (not including) the first occurrence of `needle`, or to the end.
	///
	/// Behaves as repeated [`Self::read()`] calls: the line number advances once for every newline skipped.
	pub(super) fn read_until(&mut self, needle: &str) -> &str {
		debug_assert!(!needle.is_empty());
		let start = self.finger;
		let first = needle.as_bytes()[0];

		let mut end = self.source.len();
		for candidate in memchr::memchr_iter(first, self.rest().as_bytes()) {
			if self.source[start + candidate..].starts_with(needle) {
				end = start + candidate;
				break;
			}
		}

		let skipped = &self.source[start..end];
		self.position.line += memchr::memchr_iter(b'\n', skipped.as_bytes()).count();
		self.finger = end;
		&self.source[start..end]
	}
}
