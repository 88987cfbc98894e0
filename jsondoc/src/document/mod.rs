//! The document accessor: typed, default-valued reads over one untyped JSON value.
//!
//! A [`Document`] holds either an object (`fields`) or an array (`elements`). String keys
//! read the object, integer keys read the array. Getters never fail; a missing or
//! wrong-typed entry falls back to the caller's default chain (see [`zero`]).
//!
//! # Examples
//!
//! ```
//! use jsondoc::Document;
//!
//! let doc: Document = r#"{"name":"tile","zoom":0,"tags":["a","b"]}"#.parse().unwrap();
//! assert_eq!(doc.get_string("name", &[]), "tile");
//! assert_eq!(doc.get_i64("zoom", &[14]), 0);
//! assert_eq!(doc.clone().with_strict_mode(true).get_i64("zoom", &[14]), 14);
//! assert_eq!(doc.narrow_array("tags", &[]).get_string(1, &[]), "b");
//! ```

mod error;
mod getters;
mod key;
mod mutator;
mod narrow;
mod source;
pub mod zero;

pub use error::{DocumentError, Result};
pub use key::Key;
pub use mutator::Mutator;
pub use source::Source;

use jsondoc_core::json::{JsonArray, JsonObject, JsonValue, parse_json_reader, parse_json_str};
use parking_lot::{Mutex, RwLock};
use std::{fmt::Display, io::Read, io::Write, str::FromStr};

#[derive(Clone, Debug, Default)]
struct Containers {
	fields: JsonObject,
	elements: JsonArray,
}

impl Containers {
	fn lookup(&self, key: Key) -> Option<&JsonValue> {
		match key {
			Key::Name(name) => self.fields.get(name),
			Key::Index(index) => self.elements.get(index),
			Key::Negative(_) => None,
		}
	}
}

/// What a successful load puts into the containers.
enum Loaded {
	Fields(JsonObject),
	Elements(JsonArray),
	Empty,
}

/// Read/write wrapper around one JSON object or array.
///
/// Cloning makes a deep copy. Narrowed child documents are deep copies too, so edits never
/// travel between parent and child.
#[derive(Debug, Default)]
pub struct Document {
	containers: RwLock<Containers>,
	strict: bool,
	last_error: Mutex<Option<DocumentError>>,
}

impl Document {
	/// An empty document in lenient mode.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a document and loads `source` into it.
	///
	/// Never fails: a load error leaves the document empty and is kept in [`Document::last_error`].
	pub fn from_source<'a>(source: impl Into<Source<'a>>) -> Self {
		let document = Self::new();
		document.reset(source).ok();
		document
	}

	/// Sets strict mode, in which zero-valued entries count as missing.
	pub fn with_strict_mode(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	pub fn is_strict(&self) -> bool {
		self.strict
	}

	/// The error of the most recent [`Document::reset`] or [`Document::decode_from`], if it failed.
	pub fn last_error(&self) -> Option<DocumentError> {
		self.last_error.lock().clone()
	}

	/// Replaces the content with `source`.
	///
	/// Text, bytes and readers are decoded as a JSON object. A value is stored by shape:
	/// objects replace the fields, arrays replace the elements, null empties both.
	/// A successful load clears the other shape. On failure nothing changes.
	pub fn reset<'a>(&self, source: impl Into<Source<'a>>) -> Result<()> {
		let source = source.into();
		log::trace!("reset document from {}", source.kind());
		let result = load(source).map(|loaded| self.store(loaded));
		self.remember(&result);
		result
	}

	/// Decodes a JSON object from `reader` into the fields and clears the elements.
	pub fn decode_from(&self, reader: impl Read) -> Result<()> {
		let result = decode_object(parse_json_reader(reader)).map(|fields| self.store(Loaded::Fields(fields)));
		self.remember(&result);
		result
	}

	fn store(&self, loaded: Loaded) {
		let mut containers = self.containers.write();
		*containers = match loaded {
			Loaded::Fields(fields) => Containers {
				fields,
				elements: JsonArray::new(),
			},
			Loaded::Elements(elements) => Containers {
				fields: JsonObject::new(),
				elements,
			},
			Loaded::Empty => Containers::default(),
		};
		log::debug!(
			"document loaded: {} fields, {} elements",
			containers.fields.len(),
			containers.elements.len()
		);
	}

	fn remember(&self, result: &Result<()>) {
		if let Err(error) = result {
			log::debug!("document load failed: {error}");
		}
		*self.last_error.lock() = result.as_ref().err().cloned();
	}

	/// Writes the fields as compact JSON. The elements are never written.
	pub fn encode_to(&self, writer: &mut impl Write) -> Result<usize> {
		let bytes = self.to_bytes();
		writer.write_all(&bytes)?;
		Ok(bytes.len())
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		self.stringify().into_bytes()
	}

	/// The fields as compact JSON text.
	pub fn stringify(&self) -> String {
		self.containers.read().fields.stringify()
	}

	/// Snapshot of the object shape.
	pub fn fields(&self) -> JsonObject {
		self.containers.read().fields.clone()
	}

	/// Snapshot of the array shape.
	pub fn elements(&self) -> JsonArray {
		self.containers.read().elements.clone()
	}

	/// True when every key resolves to a stored entry, null included.
	pub fn has<'k, K: Into<Key<'k>>>(&self, keys: impl IntoIterator<Item = K>) -> bool {
		let containers = self.containers.read();
		keys.into_iter().all(|key| containers.lookup(key.into()).is_some())
	}

	/// True when every key is either missing or holds null.
	pub fn is_nil<'k, K: Into<Key<'k>>>(&self, keys: impl IntoIterator<Item = K>) -> bool {
		let containers = self.containers.read();
		keys
			.into_iter()
			.all(|key| containers.lookup(key.into()).is_none_or(JsonValue::is_null))
	}

	/// Copies `elements[start..end]`, with `end` clamped to the length.
	///
	/// Out-of-range or inverted bounds give an empty array.
	pub fn slice(&self, start: usize, end: usize) -> JsonArray {
		let containers = self.containers.read();
		let elements = &containers.elements;
		if start > elements.len() || end <= start {
			return JsonArray::new();
		}
		elements[start..end.min(elements.len())].iter().cloned().collect()
	}

	fn lookup_with<T>(&self, key: Key, coerce: impl FnOnce(&JsonValue) -> Option<T>) -> Option<T> {
		self.containers.read().lookup(key).and_then(coerce)
	}
}

fn load(source: Source) -> Result<Loaded> {
	match source {
		Source::Text(text) => decode_object(parse_json_str(&text)).map(Loaded::Fields),
		Source::Bytes(bytes) => decode_object(parse_json_reader(bytes.as_ref())).map(Loaded::Fields),
		Source::Reader(reader) => decode_object(parse_json_reader(reader)).map(Loaded::Fields),
		Source::Value(value) => match value {
			JsonValue::String(text) => decode_object(parse_json_str(&text)).map(Loaded::Fields),
			JsonValue::Null => Ok(Loaded::Empty),
			JsonValue::Object(fields) => Ok(Loaded::Fields(fields)),
			JsonValue::Array(elements) => Ok(Loaded::Elements(elements)),
			other => Err(DocumentError::TypeConversion {
				found: other.type_as_str(),
			}),
		},
	}
}

fn decode_object(parsed: anyhow::Result<JsonValue>) -> Result<JsonObject> {
	match parsed.map_err(|error| DocumentError::decode(&error))? {
		JsonValue::Object(fields) => Ok(fields),
		other => Err(DocumentError::Decode(format!(
			"expected a JSON object at the root, found {}",
			other.type_as_str()
		))),
	}
}

impl Clone for Document {
	fn clone(&self) -> Self {
		Document {
			containers: RwLock::new(self.containers.read().clone()),
			strict: self.strict,
			last_error: Mutex::new(self.last_error()),
		}
	}
}

impl FromStr for Document {
	type Err = DocumentError;

	fn from_str(text: &str) -> Result<Self> {
		let document = Document::new();
		document.reset(text)?;
		Ok(document)
	}
}

impl Display for Document {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl From<&Document> for JsonValue {
	fn from(document: &Document) -> Self {
		JsonValue::Object(document.fields())
	}
}
