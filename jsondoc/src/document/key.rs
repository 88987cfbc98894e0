use std::fmt::Display;

/// Addresses one entry of a document: a field name or an element index.
///
/// Names only ever look into the object shape and indices only into the array shape.
/// Negative indices are accepted so that callers can pass signed integers straight through;
/// they never resolve to a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
	Name(&'a str),
	Index(usize),
	Negative(i64),
}

impl<'a> From<&'a str> for Key<'a> {
	fn from(name: &'a str) -> Self {
		Key::Name(name)
	}
}

impl<'a> From<&'a String> for Key<'a> {
	fn from(name: &'a String) -> Self {
		Key::Name(name)
	}
}

impl From<usize> for Key<'_> {
	fn from(index: usize) -> Self {
		Key::Index(index)
	}
}

impl From<i64> for Key<'_> {
	fn from(index: i64) -> Self {
		usize::try_from(index).map_or(Key::Negative(index), Key::Index)
	}
}

impl From<i32> for Key<'_> {
	fn from(index: i32) -> Self {
		Key::from(i64::from(index))
	}
}

impl Display for Key<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Key::Name(name) => write!(f, "\"{name}\""),
			Key::Index(index) => write!(f, "[{index}]"),
			Key::Negative(index) => write!(f, "[{index}]"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Key::from("a"), Key::Name("a"), "\"a\"")]
	#[case(Key::from(3usize), Key::Index(3), "[3]")]
	#[case(Key::from(2), Key::Index(2), "[2]")]
	#[case(Key::from(-1), Key::Negative(-1), "[-1]")]
	#[case(Key::from(7i64), Key::Index(7), "[7]")]
	fn conversions(#[case] key: Key, #[case] expected: Key, #[case] display: &str) {
		assert_eq!(key, expected);
		assert_eq!(key.to_string(), display);
	}

	#[test]
	fn borrowed_string() {
		let name = String::from("b");
		assert_eq!(Key::from(&name), Key::Name("b"));
	}
}
