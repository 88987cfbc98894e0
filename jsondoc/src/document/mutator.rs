use super::{Document, Key};
use jsondoc_core::json::JsonValue;

/// In-place editor bound to one [`Document`].
///
/// Edits go straight into the document's containers and are visible to its getters at once.
/// Every call holds the write lock for its own duration only. The returned `bool` tells
/// whether anything changed; a no-op is never an error.
#[derive(Debug)]
pub struct Mutator<'a> {
	document: &'a Document,
}

impl Document {
	pub fn mutator(&self) -> Mutator<'_> {
		Mutator { document: self }
	}
}

impl Mutator<'_> {
	/// Overwrites an existing field or element. Missing keys are left alone.
	pub fn update<'k>(&self, key: impl Into<Key<'k>>, value: impl Into<JsonValue>) -> bool {
		let key = key.into();
		let mut containers = self.document.containers.write();
		let slot = match key {
			Key::Name(name) => containers.fields.get_mut(name),
			Key::Index(index) => containers.elements.get_mut(index),
			Key::Negative(_) => None,
		};
		let changed = if let Some(slot) = slot {
			*slot = value.into();
			true
		} else {
			false
		};
		log::trace!("update {key}: {}", if changed { "written" } else { "missing" });
		changed
	}

	/// Writes a field, or an element after padding the array with nulls up to `index`.
	///
	/// An index the array cannot grow to (the length overflows or the allocation fails) is a no-op.
	pub fn set<'k>(&self, key: impl Into<Key<'k>>, value: impl Into<JsonValue>) -> bool {
		let key = key.into();
		let value: JsonValue = value.into();
		let mut containers = self.document.containers.write();
		match key {
			Key::Name(name) => containers.fields.set(name, value),
			Key::Index(index) => {
				let elements = &mut containers.elements;
				let current = elements.len();
				if index >= current {
					let grown = index
						.checked_add(1)
						.filter(|&length| elements.try_reserve(length - current).is_ok());
					let Some(length) = grown else {
						log::warn!("skipped set of {key}: the array cannot grow that far");
						return false;
					};
					elements.resize(length, JsonValue::Null);
				}
				elements[index] = value;
			}
			Key::Negative(_) => return false,
		}
		log::trace!("set {key}");
		true
	}

	/// Removes a field, or an element while shifting the following ones down.
	pub fn delete<'k>(&self, key: impl Into<Key<'k>>) -> bool {
		let key = key.into();
		let mut containers = self.document.containers.write();
		let changed = match key {
			Key::Name(name) => containers.fields.remove(name).is_some(),
			Key::Index(index) if index < containers.elements.len() => {
				containers.elements.remove(index);
				true
			}
			_ => false,
		};
		log::trace!("delete {key}: {}", if changed { "removed" } else { "missing" });
		changed
	}
}
