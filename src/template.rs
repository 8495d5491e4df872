use crate::Block;

/// A parsed got template.
///
/// Holds the path name of the source and the blocks in source order.
/// A template is produced by [`parse()`][crate::parse], [`parse_str()`][crate::parse_str] or [`parse_file()`][crate::parse_file]
/// and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
	path: String,
	blocks: Vec<Block>,
}

impl Template {
	/// Create a template from the blocks produced by a scanner.
	///
	/// The blocks go through the normalization pass, which expects them in source order.
	pub(crate) fn new(path: impl Into<String>, blocks: Vec<Block>) -> Self {
		Self {
			path: path.into(),
			blocks: normalize_blocks(blocks),
		}
	}

	/// Get the path name of the template source.
	#[inline]
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Get the blocks of the template in source order.
	#[inline]
	pub fn blocks(&self) -> &[Block] {
		&self.blocks
	}

	/// Consume the template to get the blocks.
	#[inline]
	pub fn into_blocks(self) -> Vec<Block> {
		self.blocks
	}

	/// Iterate over the blocks of the template.
	#[inline]
	pub fn iter(&self) -> std::slice::Iter<'_, Block> {
		self.blocks.iter()
	}
}

impl<'a> IntoIterator for &'a Template {
	type Item = &'a Block;
	type IntoIter = std::slice::Iter<'a, Block>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Normalize a completed block sequence.
///
/// This is currently the identity transform.
/// It never merges, splits, reorders or drops blocks.
///
/// The blocks must come straight from a scanner: out of order blocks are a scanner bug.
pub(crate) fn normalize_blocks(blocks: Vec<Block>) -> Vec<Block> {
	debug_assert!(
		blocks.windows(2).all(|pair| pair[0].position().line <= pair[1].position().line),
		"blocks are not in source order",
	);
	blocks
}
