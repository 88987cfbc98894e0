//! The response envelope: one JSON object with `Code`, an optional `Message` and `Result`.
//!
//! ```
//! use jsondoc::Envelope;
//!
//! let mut envelope = Envelope::new();
//! envelope.code(404).message("no tile at 3/4/5");
//! assert_eq!(
//! 	envelope.to_string(),
//! 	r#"{"Code":404,"Message":"no tile at 3/4/5","Result":null}"#
//! );
//! ```

use anyhow::{Context, Result};
use jsondoc_core::json::{JsonObject, JsonValue, parse_json_str};
use std::{
	fmt::{Display, Write as _},
	io::Write,
};

const CODE: &str = "Code";
const MESSAGE: &str = "Message";
const RESULT: &str = "Result";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An output that also carries response headers, such as an HTTP response body.
pub trait ResponseSink: Write {
	fn set_header(&mut self, name: &str, value: &str);
}

/// Builder for the `{"Code":…,"Message":…,"Result":…}` response object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope {
	fields: JsonObject,
}

impl Envelope {
	pub fn new() -> Self {
		Self::default()
	}

	/// Status code; `0` means success and is used when none is set.
	pub fn code(&mut self, code: i64) -> &mut Self {
		self.fields.set(CODE, code);
		self
	}

	/// Human readable message, escaped with [`escape_js`] so it can be embedded in a script.
	pub fn message(&mut self, message: impl Display) -> &mut Self {
		self.fields.set(MESSAGE, escape_js(&message.to_string()));
		self
	}

	/// Replaces the whole result.
	pub fn set_result(&mut self, value: impl Into<JsonValue>) -> &mut Self {
		self.fields.set(RESULT, value.into());
		self
	}

	/// Adds one entry to an object result. Any other result is replaced by a one-entry object.
	pub fn result(&mut self, key: &str, value: impl Into<JsonValue>) -> &mut Self {
		let value: JsonValue = value.into();
		if let Some(JsonValue::Object(result)) = self.fields.get_mut(RESULT) {
			result.set(key, value);
		} else {
			self.fields.set(RESULT, JsonObject::from(vec![(key, value)]));
		}
		self
	}

	/// Uses already serialized JSON as the result.
	pub fn result_raw(&mut self, json: &[u8]) -> Result<&mut Self> {
		let text = std::str::from_utf8(json).context("raw result is not valid UTF-8")?;
		let value = parse_json_str(text).context("raw result is not valid JSON")?;
		self.fields.set(RESULT, value);
		Ok(self)
	}

	/// The object that gets written, with `Code` and `Result` filled in when missing.
	pub fn to_object(&self) -> JsonObject {
		let mut object = self.fields.clone();
		if !object.contains_key(CODE) {
			object.set(CODE, 0);
		}
		if !object.contains_key(RESULT) {
			object.set(RESULT, JsonValue::Null);
		}
		object
	}

	/// Writes the envelope as one line of JSON and returns the number of bytes written.
	pub fn write_to(&self, writer: &mut impl Write) -> Result<usize> {
		let mut text = self.to_string();
		text.push('\n');
		writer.write_all(text.as_bytes()).context("while writing response envelope")?;
		Ok(text.len())
	}

	/// Like [`Envelope::write_to`], after setting a JSON content type on the sink.
	pub fn write_response(&self, sink: &mut impl ResponseSink) -> Result<usize> {
		sink.set_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
		self.write_to(sink)
	}
}

impl Display for Envelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_object().stringify())
	}
}

/// Escapes text for a JavaScript string literal.
///
/// Backslash and both quotes get a backslash; `<`, `>`, `&`, `=` and control characters
/// become `\uXXXX`.
pub fn escape_js(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'\\' => escaped.push_str("\\\\"),
			'\'' => escaped.push_str("\\'"),
			'"' => escaped.push_str("\\\""),
			'<' | '>' | '&' | '=' => write_unicode_escape(&mut escaped, c),
			c if c.is_control() => write_unicode_escape(&mut escaped, c),
			c => escaped.push(c),
		}
	}
	escaped
}

fn write_unicode_escape(out: &mut String, c: char) {
	let mut units = [0u16; 2];
	for unit in c.encode_utf16(&mut units) {
		write!(out, "\\u{unit:04X}").ok();
	}
}
