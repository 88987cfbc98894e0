//! Zero values and the default chain shared by every typed getter.

use jsondoc_core::json::{JsonArray, JsonObject, JsonValue};

/// The "empty" value of a type: `""`, `false`, `0`, null or an empty container.
pub trait ZeroValue {
	fn is_zero_value(&self) -> bool;
}

impl ZeroValue for String {
	fn is_zero_value(&self) -> bool {
		self.is_empty()
	}
}

impl ZeroValue for &str {
	fn is_zero_value(&self) -> bool {
		self.is_empty()
	}
}

impl ZeroValue for bool {
	fn is_zero_value(&self) -> bool {
		!*self
	}
}

impl ZeroValue for f64 {
	fn is_zero_value(&self) -> bool {
		*self == 0.0
	}
}

impl ZeroValue for i64 {
	fn is_zero_value(&self) -> bool {
		*self == 0
	}
}

impl ZeroValue for JsonValue {
	fn is_zero_value(&self) -> bool {
		self.is_null()
	}
}

impl ZeroValue for JsonArray {
	fn is_zero_value(&self) -> bool {
		self.is_empty()
	}
}

impl ZeroValue for JsonObject {
	fn is_zero_value(&self) -> bool {
		self.is_empty()
	}
}

/// Picks the value a getter returns.
///
/// A found value wins unless `strict` is set and it is zero-valued. Otherwise the first
/// non-zero default is used, and failing that the type's zero value. Zero-valued defaults
/// are always skipped, strict or not.
pub(crate) fn resolve<T, D>(found: Option<T>, strict: bool, defaults: &[D]) -> T
where
	T: ZeroValue + Default,
	D: ZeroValue + Clone + Into<T>,
{
	match found {
		Some(value) if !(strict && value.is_zero_value()) => value,
		_ => defaults
			.iter()
			.find(|default| !default.is_zero_value())
			.cloned()
			.map_or_else(T::default, Into::into),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, false, &[], 0)]
	#[case(None, false, &[0, 0, 3], 3)]
	#[case(Some(0), false, &[1], 0)]
	#[case(Some(0), true, &[1], 1)]
	#[case(Some(0), true, &[0], 0)]
	#[case(Some(5), true, &[1], 5)]
	fn integers(#[case] found: Option<i64>, #[case] strict: bool, #[case] defaults: &[i64], #[case] expected: i64) {
		assert_eq!(resolve(found, strict, defaults), expected);
	}

	#[test]
	fn empty_string_defaults_are_skipped() {
		assert_eq!(resolve::<String, &str>(None, false, &["", "fallback"]), "fallback");
		assert_eq!(resolve::<String, &str>(None, false, &[""]), "");
	}

	#[test]
	fn false_is_never_a_default() {
		assert!(!resolve::<bool, bool>(None, false, &[false, false]));
		assert!(resolve(Some(false), true, &[false, true]));
	}

	#[test]
	fn empty_containers_are_zero() {
		assert!(JsonArray::new().is_zero_value());
		assert!(JsonObject::new().is_zero_value());
		assert!(JsonValue::Null.is_zero_value());
		assert!(!JsonValue::from(0).is_zero_value());

		let fallback = JsonArray::from(vec![1]);
		let defaults = [JsonArray::new(), fallback.clone()];
		assert_eq!(resolve::<JsonArray, _>(None, false, &defaults), fallback);
	}
}
