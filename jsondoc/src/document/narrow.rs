//! Child documents over nested values.
//!
//! Each `narrow_*` resolves its value exactly like the matching getter and loads the result
//! into a fresh document with the parent's strict flag. The child owns a deep copy.

use super::{Document, Key, Source};
use jsondoc_core::json::{JsonArray, JsonObject, JsonValue};

impl Document {
	fn child<'a>(&self, source: impl Into<Source<'a>>) -> Document {
		Document::from_source(source).with_strict_mode(self.strict)
	}

	/// Wraps whatever is stored at `key`. Scalars leave the child empty with a
	/// [`TypeConversion`](super::DocumentError::TypeConversion) error.
	pub fn narrow_any<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonValue]) -> Document {
		self.child(self.get_any(key, defaults))
	}

	/// Decodes the string at `key` as embedded JSON object text.
	pub fn narrow_string<'k>(&self, key: impl Into<Key<'k>>, defaults: &[&str]) -> Document {
		self.child(self.get_string(key, defaults))
	}

	pub fn narrow_array<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonArray]) -> Document {
		self.child(self.get_array(key, defaults))
	}

	pub fn narrow_object<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonObject]) -> Document {
		self.child(self.get_object(key, defaults))
	}

	/// A child over [`Document::slice`].
	pub fn narrow_slice(&self, start: usize, end: usize) -> Document {
		self.child(self.slice(start, end))
	}
}
