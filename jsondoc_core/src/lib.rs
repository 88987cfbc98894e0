//! JSON value model and text codec used by the `jsondoc` document accessor.
//!
//! The parser reads standard JSON from strings or any `std::io::Read` source into the closed
//! [`json::JsonValue`] union; the serializer writes compact or indented JSON text back out.

pub mod byte_iterator;

pub mod json;
