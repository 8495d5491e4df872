//! Parse a got template and print its blocks.
//!
//! Usage: `cargo run --example dump-blocks -- path/to/template.got [--json]`
//!
//! Set `RUST_LOG=got=trace` to see the scanner at work.

use got::Block;

fn init_tracing() {
	use tracing_subscriber::{fmt, prelude::*, EnvFilter};

	// Only install a subscriber if RUST_LOG is set.
	if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::registry()
			.with(fmt::layer().with_target(true).with_level(true))
			.with(EnvFilter::from_default_env())
			.init();
	}
}

fn main() {
	init_tracing();

	let mut args = std::env::args().skip(1);
	let Some(path) = args.next() else {
		eprintln!("usage: dump-blocks <template> [--json]");
		std::process::exit(2);
	};
	let json = args.any(|arg| arg == "--json");

	let template = match got::parse_file(&path) {
		Ok(template) => template,
		Err(got::ParseError::Syntax(e)) => {
			eprintln!("{e}");
			if let Ok(source) = std::fs::read_to_string(&path) {
				eprint!("{}", e.source_highlighting(&source));
			}
			std::process::exit(1);
		},
		Err(e) => {
			eprintln!("{path}: {e}");
			std::process::exit(1);
		},
	};

	if json {
		match got::json::to_string_pretty(&template) {
			Ok(dump) => println!("{dump}"),
			Err(e) => {
				eprintln!("{e}");
				std::process::exit(1);
			},
		}
		return;
	}

	for block in &template {
		match block {
			Block::Text(text) => println!("{} text {:?}", text.position, text.content),
			Block::Code(code) => println!("{} code {:?}", code.position, code.content),
		}
	}
}
