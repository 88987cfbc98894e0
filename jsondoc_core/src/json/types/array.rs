//! JSON array backed by a vector.
use crate::json::{stringify::write_array, *};
use std::{
	fmt::{Debug, Display},
	ops::{Deref, DerefMut},
};

/// A JSON array. `Deref`s to the inner `Vec` for indexing, slicing and iteration.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let mut out = String::new();
		write_array(&mut out, self);
		out
	}
}

impl Deref for JsonArray {
	type Target = Vec<JsonValue>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for JsonArray {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		input.into_iter().map(JsonValue::from).collect()
	}
}

impl<T> From<&[T]> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &[T]) -> Self {
		input.iter().cloned().map(JsonValue::from).collect()
	}
}
