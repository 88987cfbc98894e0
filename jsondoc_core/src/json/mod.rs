//! The untyped JSON value model, its parser and its serializer.

mod parse;
mod stringify;
mod types;

pub use parse::{MAX_DEPTH, parse_json_iter, parse_json_reader, parse_json_str};
pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
