//! JSON object backed by a sorted map.
use crate::json::{stringify::write_object, *};
use anyhow::Result;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::{Debug, Display},
};

/// A JSON object. Keys are unique and kept in sorted order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		self.0.get_mut(key)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Inserts or replaces `key`, converting the value into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let mut out = String::new();
		write_object(&mut out, self);
		out
	}

	/// Parses JSON text that must hold an object.
	pub fn parse_str(json: &str) -> Result<JsonObject> {
		JsonValue::parse_str(json)?.into_object()
	}

	/// Entries in key order.
	pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<'a> IntoIterator for &'a JsonObject {
	type Item = (&'a String, &'a JsonValue);
	type IntoIter = btree_map::Iter<'a, String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
		JsonObject(iter.into_iter().collect())
	}
}

impl From<BTreeMap<String, JsonValue>> for JsonObject {
	fn from(map: BTreeMap<String, JsonValue>) -> Self {
		JsonObject(map)
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		input
			.into_iter()
			.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_get_remove() {
		let mut obj = JsonObject::new();
		obj.set("key1", 42);
		obj.set("key2", "x");

		assert_eq!(obj.len(), 2);
		assert_eq!(obj.get("key1"), Some(&JsonValue::from(42)));
		assert!(obj.contains_key("key2"));
		assert!(!obj.contains_key("key3"));

		*obj.get_mut("key1").unwrap() = JsonValue::Null;
		assert_eq!(obj.remove("key1"), Some(JsonValue::Null));
		assert_eq!(obj.remove("key1"), None);
		assert!(!obj.is_empty());
	}

	#[test]
	fn stringify_and_parse() {
		let obj = JsonObject::from(vec![
			("key1", JsonValue::from("value1")),
			("key2", JsonValue::from(42)),
			("key3", JsonValue::from(vec![1, 2])),
		]);
		let text = r#"{"key1":"value1","key2":42,"key3":[1,2]}"#;

		assert_eq!(obj.stringify(), text);
		assert_eq!(obj.to_string(), text);
		assert_eq!(JsonObject::parse_str(text).unwrap(), obj);
		assert!(JsonObject::parse_str("[1]").is_err());
	}

	#[test]
	fn iterates_in_key_order() {
		let obj = JsonObject::from(vec![("z", "w"), ("x", "y")]);
		let keys: Vec<&String> = obj.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["x", "z"]);
	}

	#[test]
	fn debug_shows_the_map() {
		let obj = JsonObject::from(vec![("k", 1)]);
		assert_eq!(format!("{obj:?}"), r#"{"k": Number(1.0)}"#);
	}
}
