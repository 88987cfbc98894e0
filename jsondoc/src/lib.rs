//! Typed, default-valued access to untyped JSON documents.
//!
//! [`Document`] wraps one JSON object or array and reads it through getters that never fail:
//! a missing or mistyped entry resolves through a chain of caller-supplied defaults. A
//! [`Mutator`] edits the document in place, and [`Envelope`] writes the
//! `{"Code":…,"Message":…,"Result":…}` response format.
//!
//! The JSON value model and codec live in [`jsondoc_core`] and are re-exported here.

pub mod document;
pub mod envelope;

pub use document::{Document, DocumentError, Key, Mutator, Source};
pub use envelope::{Envelope, ResponseSink};
pub use jsondoc_core::json::{JsonArray, JsonObject, JsonValue};
