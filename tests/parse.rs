use std::io::Write;

use assert2::{assert, check, let_assert};
use got::{Block, ParseError, Position};

const PAGE: &str = r#"<% func page(w io.Writer, title string) { %>
<html>
  <title><% text(w, title) %></title>
  <p>Tags look like <%%= this %%> and end with "%%>".</p>
  <p><% text(w, "100%%>") %></p>
</html>
<% } %>"#;

fn at_line(path: &str, line: usize) -> Position {
	Position { path: path.into(), line }
}

#[test]
fn parse_file_reads_template() {
	let_assert!(Ok(mut file) = tempfile::NamedTempFile::new());
	let_assert!(Ok(()) = file.write_all(PAGE.as_bytes()));
	let path = file.path().to_string_lossy().into_owned();

	let_assert!(Ok(template) = got::parse_file(file.path()));
	check!(template.path() == path);

	let blocks = template.blocks();
	let_assert!([
		Block::Code(open),
		Block::Text(head),
		Block::Code(title),
		Block::Text(middle),
		Block::Text(escaped),
		Block::Text(after_escape),
		Block::Code(percent),
		Block::Text(tail),
		Block::Code(close),
	] = blocks);

	check!(open.content == "func page(w io.Writer, title string) {");
	check!(open.position == at_line(&path, 1));

	check!(head.content == "\n<html>\n  <title>");
	check!(head.position == at_line(&path, 2));

	check!(title.content == "text(w, title)");
	check!(title.position == at_line(&path, 3));

	check!(middle.content == "</title>\n  <p>Tags look like ");
	check!(escaped.content == "<%");
	check!(escaped.position == at_line(&path, 4));
	check!(after_escape.content == "= this %%> and end with \"%%>\".</p>\n  <p>");

	check!(percent.content == "text(w, \"100%>\")");
	check!(percent.position == at_line(&path, 5));

	check!(tail.content == "</p>\n</html>\n");
	check!(close.content == "}");
	check!(close.position == at_line(&path, 7));
}

#[test]
fn parse_file_missing_file_keeps_io_error() {
	let_assert!(Ok(dir) = tempfile::tempdir());
	let path = dir.path().join("missing.got");

	let_assert!(Err(ParseError::Io(e)) = got::parse_file(&path));
	assert!(e.kind() == std::io::ErrorKind::NotFound);
}

#[test]
fn parse_file_syntax_error() {
	let_assert!(Ok(mut file) = tempfile::NamedTempFile::new());
	let_assert!(Ok(()) = file.write_all(b"line one\nline two <% unclosed\n"));
	let path = file.path().to_string_lossy().into_owned();

	let_assert!(Err(ParseError::Syntax(e)) = got::parse_file(file.path()));
	check!(e.position == at_line(&path, 3));
	check!(e.tag_start == Some(18));
	check!(e.to_string() == format!("Expected close tag, found EOF at {path}:3"));
}

#[test]
fn text_without_tags_is_one_block() {
	let sources = [
		"plain",
		"multi\nline\ntext\n",
		"<p>100% sure</p>",
		"%> stray close tag",
		"  \t  ",
	];

	for source in sources {
		let_assert!(Ok(template) = got::parse_str(source, "tpl.got"));
		let_assert!([Block::Text(block)] = template.blocks());
		check!(block.content == source);
		check!(block.position == at_line("tpl.got", 1));
	}
}

#[test]
fn blocks_are_in_source_order() {
	let source = "a\n<% b %>\nc<% d\ne %>f\n\n<%% g";
	let_assert!(Ok(template) = got::parse_str(source, "tpl.got"));

	let lines: Vec<_> = template.iter().map(|b| b.position().line).collect();
	check!(lines.windows(2).all(|pair| pair[0] <= pair[1]));

	let contents: Vec<_> = template.iter().map(Block::content).collect();
	assert!(contents == ["a\n", "b", "\nc", "d\ne", "f\n\n", "<%", " g"]);
}

#[test]
fn owned_scanner_produces_blocks_until_exhausted() {
	let mut scanner = got::Scanner::new("x<% y %>z", "tpl.got");
	let_assert!(Ok(Some(Block::Text(first))) = scanner.next_block());
	check!(first.content == "x");

	let_assert!(Some(Ok(Block::Code(second))) = scanner.next());
	check!(second.content == "y");

	let_assert!(Ok(Some(Block::Text(third))) = scanner.next_block());
	check!(third.content == "z");

	let_assert!(Ok(None) = scanner.next_block());
	let_assert!(Ok(None) = scanner.next_block());
	assert!(scanner.next().is_none());
}

#[test]
fn scanner_is_reusable_as_iterator() {
	let scanner = got::Scanner::new("x<% y %>z", "tpl.got");
	let_assert!(Ok(blocks) = scanner.collect::<Result<Vec<_>, _>>());
	assert!(blocks.len() == 3);
}

#[test]
fn json_dump_round_trip() {
	let_assert!(Ok(template) = got::parse_str(PAGE, "page.got"));
	let_assert!(Ok(dump) = got::json::to_string_pretty(&template));
	check!(dump.contains(r#""kind": "code""#));
	let_assert!(Ok(loaded) = got::json::from_str(&dump));
	assert!(loaded == template);
}
