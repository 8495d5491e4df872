/// A location in a template source, used for diagnostics.
///
/// Line numbers start at 1 and only advance when a newline is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
	/// The path name of the template source.
	///
	/// This is purely descriptive: it is copied into diagnostics and the generated code,
	/// but never opened by the scanner.
	pub path: String,

	/// The 1-based line number.
	pub line: usize,
}

impl Position {
	/// Create a position at the start of the given source.
	pub fn start(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			line: 1,
		}
	}
}

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}:{}", self.path, self.line)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	#[test]
	fn test_display() {
		assert!(Position::start("tpl.got").to_string() == "tpl.got:1");
		assert!(Position { path: "a/b.got".into(), line: 12 }.to_string() == "a/b.got:12");
	}
}
