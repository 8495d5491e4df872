use crate::Position;

/// One lexical unit of a template.
///
/// The set of variants is closed: consumers should match on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Block {
	/// Literal text to be emitted verbatim.
	Text(TextBlock),

	/// An embedded code fragment to be copied into the generated source.
	Code(CodeBlock),
}

/// Literal text to be emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextBlock {
	/// The position of the first character of the block.
	pub position: Position,

	/// The literal text, exactly as it appears in the source.
	///
	/// The only exception is the `<%%` escape, which produces a block containing `<%`.
	pub content: String,
}

/// An embedded code fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
	/// The position of the opening `<%` tag.
	pub position: Position,

	/// The decoded code between the tags, with surrounding whitespace trimmed.
	///
	/// Escaped close tags (`%%>`) have already been decoded to `%>`.
	pub content: String,
}

impl Block {
	/// Get the position where the block starts in the source.
	pub fn position(&self) -> &Position {
		match self {
			Self::Text(x) => &x.position,
			Self::Code(x) => &x.position,
		}
	}

	/// Get the content of the block.
	pub fn content(&self) -> &str {
		match self {
			Self::Text(x) => &x.content,
			Self::Code(x) => &x.content,
		}
	}

	/// Check if this is a block of literal text.
	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}

	/// Check if this is a block of embedded code.
	pub fn is_code(&self) -> bool {
		matches!(self, Self::Code(_))
	}

	/// A short name for the kind of block, as used in logs and dumps.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Code(_) => "code",
		}
	}
}

impl From<TextBlock> for Block {
	fn from(other: TextBlock) -> Self {
		Self::Text(other)
	}
}

impl From<CodeBlock> for Block {
	fn from(other: CodeBlock) -> Self {
		Self::Code(other)
	}
}
