use super::{JsonArray, JsonObject, JsonValue};
use std::fmt::Write;

/// Serializes a value as compact JSON text.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	let mut out = String::new();
	write_compact(&mut out, json);
	out
}

/// Serializes a value as JSON text indented by two spaces per level.
///
/// Empty arrays and objects stay on one line (`[]`, `{}`).
#[must_use]
pub fn stringify_pretty(json: &JsonValue) -> String {
	let mut out = String::new();
	write_pretty(&mut out, json, 0);
	out
}

fn write_number(out: &mut String, n: f64) {
	if n.is_finite() {
		write!(out, "{n}").ok();
	} else {
		out.push_str("null");
	}
}

fn write_string(out: &mut String, s: &str) {
	out.push('"');
	out.push_str(&escape_json_string(s));
	out.push('"');
}

pub(super) fn write_array(out: &mut String, array: &JsonArray) {
	out.push('[');
	for (index, value) in array.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}
		write_compact(out, value);
	}
	out.push(']');
}

pub(super) fn write_object(out: &mut String, object: &JsonObject) {
	out.push('{');
	for (index, (key, value)) in object.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}
		write_string(out, key);
		out.push(':');
		write_compact(out, value);
	}
	out.push('}');
}

fn write_compact(out: &mut String, json: &JsonValue) {
	match json {
		JsonValue::Array(array) => write_array(out, array),
		JsonValue::Object(object) => write_object(out, object),
		JsonValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
		JsonValue::Null => out.push_str("null"),
		JsonValue::Number(n) => write_number(out, *n),
		JsonValue::String(s) => write_string(out, s),
	}
}

fn write_pretty(out: &mut String, json: &JsonValue, depth: usize) {
	let indent = "  ".repeat(depth + 1);
	match json {
		JsonValue::Array(array) if !array.is_empty() => {
			out.push_str("[\n");
			for (index, value) in array.iter().enumerate() {
				if index > 0 {
					out.push_str(",\n");
				}
				out.push_str(&indent);
				write_pretty(out, value, depth + 1);
			}
			out.push('\n');
			out.push_str(&indent[2..]);
			out.push(']');
		}
		JsonValue::Object(object) if !object.is_empty() => {
			out.push_str("{\n");
			for (index, (key, value)) in object.iter().enumerate() {
				if index > 0 {
					out.push_str(",\n");
				}
				out.push_str(&indent);
				write_string(out, key);
				out.push_str(": ");
				write_pretty(out, value, depth + 1);
			}
			out.push('\n');
			out.push_str(&indent[2..]);
			out.push('}');
		}
		_ => write_compact(out, json),
	}
}

/// Escapes a string for use between double quotes in JSON text.
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut escaped = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'\u{08}' => escaped.push_str("\\b"),
			'\u{0c}' => escaped.push_str("\\f"),
			c if c.is_control() => {
				write!(escaped, "\\u{:04x}", c as u32).ok();
			}
			c => escaped.push(c),
		}
	}
	escaped
}
