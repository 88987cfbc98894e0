pub mod check;
pub mod edit;
pub mod get;

use anyhow::{Context, Result, bail};
use jsondoc::{Document, JsonValue, Key};
use jsondoc_core::json::parse_json_reader;
use std::{fs::File, io::BufReader};

/// A document read from the command line.
pub struct Input {
	pub document: Document,
	pub is_array: bool,
}

/// Reads `input` (a file path, or `-` for stdin) into a document.
///
/// Unlike text handed to [`Document::reset`], the input may be an array as well as an object.
pub fn read_document(input: &str) -> Result<Input> {
	let value = if input == "-" {
		parse_json_reader(std::io::stdin().lock()).context("while reading JSON from stdin")?
	} else {
		let file = File::open(input).with_context(|| format!("could not open '{input}'"))?;
		parse_json_reader(BufReader::new(file)).with_context(|| format!("while reading JSON from '{input}'"))?
	};

	if !matches!(value, JsonValue::Object(_) | JsonValue::Array(_)) {
		bail!("'{input}' must hold a JSON object or array, found a {}", value.type_as_str());
	}
	log::debug!("read {} from '{input}'", value.type_as_str());

	let is_array = matches!(value, JsonValue::Array(_));
	let document = Document::new();
	document.reset(value)?;
	Ok(Input { document, is_array })
}

/// Path segments made only of digits index arrays; everything else names a field.
pub fn parse_key(segment: &str) -> Key<'_> {
	match segment.parse::<usize>() {
		Ok(index) if segment.bytes().all(|b| b.is_ascii_digit()) => Key::Index(index),
		_ => Key::Name(segment),
	}
}

/// Parses a command-line value as JSON, falling back to a plain string.
pub fn parse_value(text: &str) -> JsonValue {
	JsonValue::parse_str(text).unwrap_or_else(|_| JsonValue::from(text))
}
