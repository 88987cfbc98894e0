//! The closed JSON value union.

use crate::json::*;
use anyhow::{Result, bail};
use std::fmt::Display;

/// Any JSON value: arrays, objects, numbers, strings, booleans and null.
///
/// Numbers are held as `f64`, whether the text had a fraction or not.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	#[default]
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parses JSON text.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Lowercase name of the variant (`"array"`, `"object"`, ...), used in error messages.
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	pub fn into_array(self) -> Result<JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn into_object(self) -> Result<JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	pub fn as_bool(&self) -> Result<bool> {
		match self {
			JsonValue::Boolean(b) => Ok(*b),
			_ => bail!("expected a boolean, found a {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(n) => Ok(*n),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}
}

impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.clone())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(String::from("hello")), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::Number(42.0));
		assert_eq!(JsonValue::from(None::<bool>), JsonValue::Null);
		assert_eq!(JsonValue::from(Some("x")), JsonValue::from("x"));
		assert_eq!(
			JsonValue::from(vec!["a", "b"]),
			JsonValue::Array(JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]))
		);
	}

	#[test]
	fn type_names() {
		assert_eq!(JsonValue::from("value").type_as_str(), "string");
		assert_eq!(JsonValue::from(42).type_as_str(), "number");
		assert_eq!(JsonValue::from(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::Array(JsonArray::new()).type_as_str(), "array");
		assert_eq!(JsonValue::Object(JsonObject::new()).type_as_str(), "object");
	}

	#[test]
	fn typed_access() {
		let text = JsonValue::from("value");
		assert_eq!(text.as_str().unwrap(), "value");
		assert_eq!(text.as_string().unwrap(), "value");
		assert_eq!(
			text.as_number().unwrap_err().to_string(),
			"expected a number, found a string"
		);
		assert!(text.as_bool().is_err());
		assert!(text.as_array().is_err());
		assert!(text.as_object().is_err());

		assert_eq!(JsonValue::from(1.5).as_number().unwrap(), 1.5);
		assert!(JsonValue::from(false).as_bool().is_ok());
		assert!(JsonValue::Array(JsonArray::new()).into_array().is_ok());
		assert!(JsonValue::Object(JsonObject::new()).into_object().is_ok());
		assert_eq!(
			JsonValue::Null.into_object().unwrap_err().to_string(),
			"expected an object, found a null"
		);
	}

	#[test]
	fn display_is_compact_json() {
		let value = JsonValue::from(vec![("key", JsonValue::from(vec![1, 2]))]);
		assert_eq!(value.to_string(), r#"{"key":[1,2]}"#);
		assert!(JsonValue::default().is_null());
	}
}
