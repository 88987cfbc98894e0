//! Typed getters and the equality helpers built on them.
//!
//! Every getter takes a key and an ordered chain of defaults. Missing entries, entries of
//! another type and (in strict mode) zero-valued entries fall back to the first non-zero
//! default; see [`resolve`].

use super::{Document, Key, zero::resolve};
use jsondoc_core::json::{JsonArray, JsonObject, JsonValue};

impl Document {
	/// Reads a string. Other types are not converted.
	pub fn get_string<'k>(&self, key: impl Into<Key<'k>>, defaults: &[&str]) -> String {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::String(text) => Some(text.clone()),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	pub fn get_bool<'k>(&self, key: impl Into<Key<'k>>, defaults: &[bool]) -> bool {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::Boolean(b) => Some(*b),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	pub fn get_f64<'k>(&self, key: impl Into<Key<'k>>, defaults: &[f64]) -> f64 {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::Number(n) => Some(*n),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	/// Reads a number truncated toward zero. Values beyond the `i64` range saturate.
	pub fn get_i64<'k>(&self, key: impl Into<Key<'k>>, defaults: &[i64]) -> i64 {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::Number(n) => Some(*n as i64),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	/// Reads any value. A missing entry reads as null.
	pub fn get_any<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonValue]) -> JsonValue {
		let found = self.lookup_with(key.into(), |value| Some(value.clone()));
		resolve(found, self.strict, defaults)
	}

	pub fn get_array<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonArray]) -> JsonArray {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::Array(array) => Some(array.clone()),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	pub fn get_object<'k>(&self, key: impl Into<Key<'k>>, defaults: &[JsonObject]) -> JsonObject {
		let found = self.lookup_with(key.into(), |value| match value {
			JsonValue::Object(object) => Some(object.clone()),
			_ => None,
		});
		resolve(found, self.strict, defaults)
	}

	/// True if the string read at any of `keys` equals `target`.
	pub fn string_any_equal<'k, K: Into<Key<'k>>>(&self, target: &str, keys: impl IntoIterator<Item = K>) -> bool {
		keys.into_iter().any(|key| self.get_string(key, &[]) == target)
	}

	pub fn bool_any_equal<'k, K: Into<Key<'k>>>(&self, target: bool, keys: impl IntoIterator<Item = K>) -> bool {
		keys.into_iter().any(|key| self.get_bool(key, &[]) == target)
	}

	pub fn f64_any_equal<'k, K: Into<Key<'k>>>(&self, target: f64, keys: impl IntoIterator<Item = K>) -> bool {
		keys.into_iter().any(|key| self.get_f64(key, &[]) == target)
	}

	pub fn i64_any_equal<'k, K: Into<Key<'k>>>(&self, target: i64, keys: impl IntoIterator<Item = K>) -> bool {
		keys.into_iter().any(|key| self.get_i64(key, &[]) == target)
	}

	/// True if the raw value at any of `keys` deep-equals `target`; missing keys compare as null.
	pub fn any_equal<'k, K: Into<Key<'k>>>(&self, target: &JsonValue, keys: impl IntoIterator<Item = K>) -> bool {
		keys.into_iter().any(|key| self.get_any(key, &[]) == *target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	const DATA: &str = r#"{"username":"yourname","empty":"","yes":true,"no":false,"zero":0,"pi":3.7,"neg":-2.9,"a":[1,2.1,"3"],"o":{"k":"v"},"none":null}"#;

	fn lenient() -> Document {
		Document::from_source(DATA)
	}

	fn strict() -> Document {
		lenient().with_strict_mode(true)
	}

	#[rstest]
	#[case("username", &[], "yourname")]
	#[case("missing", &["", "fallback"], "fallback")]
	#[case("missing", &[""], "")]
	#[case("yes", &["x"], "x")]
	#[case("a", &["123"], "123")]
	#[case("empty", &["x"], "")]
	fn strings(#[case] key: &str, #[case] defaults: &[&str], #[case] expected: &str) {
		assert_eq!(lenient().get_string(key, defaults), expected);
	}

	#[test]
	fn strict_strings() {
		assert_eq!(strict().get_string("empty", &["", "x"]), "x");
		assert_eq!(strict().get_string("empty", &[]), "");
		assert_eq!(strict().get_string("username", &["x"]), "yourname");
	}

	#[rstest]
	#[case("zero", false, &[1], 0)]
	#[case("zero", true, &[1], 1)]
	#[case("zero", true, &[0, 0, 7], 7)]
	#[case("pi", false, &[], 3)]
	#[case("neg", false, &[], -2)]
	#[case("username", false, &[5], 5)]
	#[case("missing", false, &[0], 0)]
	fn integers(#[case] key: &str, #[case] strict: bool, #[case] defaults: &[i64], #[case] expected: i64) {
		let doc = lenient().with_strict_mode(strict);
		assert_eq!(doc.get_i64(key, defaults), expected);
	}

	#[rstest]
	#[case("pi", &[], 3.7)]
	#[case("zero", &[1.5], 0.0)]
	#[case("yes", &[1.5], 1.5)]
	#[case("missing", &[0.0, -1.0], -1.0)]
	fn floats(#[case] key: &str, #[case] defaults: &[f64], #[case] expected: f64) {
		assert_eq!(lenient().get_f64(key, defaults), expected);
	}

	#[test]
	fn booleans() {
		let doc = lenient();
		assert!(doc.get_bool("yes", &[]));
		assert!(!doc.get_bool("no", &[true]));
		assert!(doc.get_bool("missing", &[false, true]));
		assert!(!doc.get_bool("zero", &[]));
		assert!(strict().get_bool("no", &[true]));
	}

	#[test]
	fn any_values() {
		let doc = lenient();
		assert_eq!(doc.get_any("pi", &[]), JsonValue::from(3.7));
		assert_eq!(doc.get_any("none", &[JsonValue::from(1)]), JsonValue::Null);
		assert_eq!(doc.get_any("missing", &[]), JsonValue::Null);
		assert_eq!(doc.get_any("missing", &[JsonValue::Null, JsonValue::from("c")]), JsonValue::from("c"));
		assert_eq!(strict().get_any("none", &[JsonValue::from(1)]), JsonValue::from(1));
		assert_eq!(strict().get_any("zero", &[JsonValue::from(1)]), JsonValue::from(0));
	}

	#[test]
	fn containers() {
		let doc = lenient();
		let fallback = JsonArray::from(vec![7, 8, 9, 0]);
		assert_eq!(doc.get_array("a", &[fallback.clone()]).stringify(), r#"[1,2.1,"3"]"#);
		assert_eq!(doc.get_array("o", &[fallback.clone()]), fallback);
		assert_eq!(doc.get_array("missing", &[JsonArray::new(), fallback.clone()]), fallback);
		assert!(doc.get_array("missing", &[]).is_empty());

		assert_eq!(doc.get_object("o", &[]).stringify(), r#"{"k":"v"}"#);
		assert!(doc.get_object("a", &[]).is_empty());
	}

	#[test]
	fn indexed_reads() {
		let doc = Document::from_source(JsonArray::from(vec![
			JsonValue::from(1),
			JsonValue::from(2.1),
			JsonValue::from("3"),
			JsonValue::from(vec![7, 8]),
		]));
		assert_eq!(doc.get_f64(0, &[]), 1.0);
		assert_eq!(doc.get_f64(1, &[]), 2.1);
		assert_eq!(doc.get_string(2, &[]), "3");
		assert_eq!(doc.get_string(1, &["11"]), "11");
		assert_eq!(doc.get_i64(1, &[]), 2);
		assert_eq!(doc.get_array(3, &[]), JsonArray::from(vec![7, 8]));
		assert_eq!(doc.get_any(8, &[JsonValue::from(22)]), JsonValue::from(22));
		assert_eq!(doc.get_i64(-1, &[5]), 5);
		assert_eq!(doc.get_string("a", &["by name"]), "by name");
	}

	#[test]
	fn equality() {
		let doc = lenient();
		assert!(doc.string_any_equal("yourname", ["empty", "username"]));
		assert!(!doc.string_any_equal("x", ["username"]));
		assert!(doc.string_any_equal("", ["missing"]));
		assert!(doc.bool_any_equal(true, ["yes"]));
		assert!(doc.bool_any_equal(false, ["missing"]));
		assert!(doc.f64_any_equal(3.7, ["pi"]));
		assert!(doc.i64_any_equal(3, ["zero", "pi"]));
		assert!(!doc.i64_any_equal(3, Vec::<&str>::new()));
		assert!(doc.any_equal(&JsonValue::from(vec![("k", "v")]), ["o"]));
		assert!(doc.any_equal(&JsonValue::Null, ["missing"]));
		assert!(!doc.any_equal(&JsonValue::from(0), ["none"]));
	}
}
