use jsondoc_core::json::{JsonArray, JsonObject, JsonValue};
use std::{borrow::Cow, fmt::Debug, io::Read};

/// Input a [`Document`](super::Document) can be loaded from.
///
/// `Text`, `Bytes` and `Reader` are decoded as JSON and must hold an object.
/// `Value` is taken by shape: objects and arrays are stored, null empties the
/// document and a string is decoded as JSON text.
pub enum Source<'a> {
	Text(Cow<'a, str>),
	Bytes(Cow<'a, [u8]>),
	Reader(Box<dyn Read + 'a>),
	Value(JsonValue),
}

impl<'a> Source<'a> {
	pub fn reader(reader: impl Read + 'a) -> Self {
		Source::Reader(Box::new(reader))
	}

	pub(crate) fn kind(&self) -> &'static str {
		match self {
			Source::Text(_) => "text",
			Source::Bytes(_) => "bytes",
			Source::Reader(_) => "reader",
			Source::Value(value) => value.type_as_str(),
		}
	}
}

impl Debug for Source<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Source::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Source::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
			Source::Reader(_) => f.write_str("Reader"),
			Source::Value(value) => f.debug_tuple("Value").field(value).finish(),
		}
	}
}

impl<'a> From<&'a str> for Source<'a> {
	fn from(text: &'a str) -> Self {
		Source::Text(Cow::Borrowed(text))
	}
}

impl From<String> for Source<'_> {
	fn from(text: String) -> Self {
		Source::Text(Cow::Owned(text))
	}
}

impl<'a> From<&'a [u8]> for Source<'a> {
	fn from(bytes: &'a [u8]) -> Self {
		Source::Bytes(Cow::Borrowed(bytes))
	}
}

impl From<Vec<u8>> for Source<'_> {
	fn from(bytes: Vec<u8>) -> Self {
		Source::Bytes(Cow::Owned(bytes))
	}
}

impl From<JsonValue> for Source<'_> {
	fn from(value: JsonValue) -> Self {
		Source::Value(value)
	}
}

impl From<JsonObject> for Source<'_> {
	fn from(object: JsonObject) -> Self {
		Source::Value(JsonValue::Object(object))
	}
}

impl From<JsonArray> for Source<'_> {
	fn from(array: JsonArray) -> Self {
		Source::Value(JsonValue::Array(array))
	}
}

impl From<Option<JsonValue>> for Source<'_> {
	fn from(value: Option<JsonValue>) -> Self {
		Source::Value(value.unwrap_or_default())
	}
}
