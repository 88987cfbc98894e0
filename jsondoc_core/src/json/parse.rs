use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, io::Read};

const MAX_QUOTED_INPUT: usize = 64;

/// Deepest nesting of arrays and objects the parser descends into.
pub const MAX_DEPTH: usize = 128;

/// Parses one JSON document held in memory. Trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(json.as_bytes(), true);
	parse_document(&mut iter).with_context(|| {
		if json.len() <= MAX_QUOTED_INPUT {
			format!("while parsing JSON '{json}'")
		} else {
			format!("while parsing JSON of {} bytes", json.len())
		}
	})
}

/// Parses one JSON document streamed from `reader`. Trailing non-whitespace is an error.
pub fn parse_json_reader(reader: impl Read) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_reader(reader, false);
	parse_document(&mut iter).context("while parsing JSON stream")
}

fn parse_document(iter: &mut ByteIterator) -> Result<JsonValue> {
	let value = parse_json_iter(iter)?;
	iter.expect_end()?;
	Ok(value)
}

/// Parses the JSON value starting at the iterator and stops right after it.
///
/// Arrays and objects nested deeper than [`MAX_DEPTH`] are an error.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_DEPTH => Err(iter.format_error("maximum nesting depth exceeded")),
		b'[' => parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1))
			.map(|values| JsonValue::Array(JsonArray(values))),
		b'{' => parse_json_object(iter, depth),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		b'-' | b'0'..=b'9' => parse_number(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut map = BTreeMap::new();
	// duplicate keys: the last one wins
	parse_object_entries(iter, |key, iter2| {
		map.insert(key, parse_value(iter2, depth + 1)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(JsonObject(map)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	fn root_cause(json: &str) -> String {
		parse_json_str(json).unwrap_err().chain().last().unwrap().to_string()
	}

	#[test]
	fn nested_document() {
		let data = r#"{"user":{"name":"yourname","email":"yourname@yourdomain.com"},"a":[1,2.1,"3"],"ok":true,"none":null}"#;
		assert_eq!(
			parse_json_str(data).unwrap(),
			v(vec![
				("user", v(vec![("name", "yourname"), ("email", "yourname@yourdomain.com")])),
				("a", v(vec![v(1), v(2.1), v("3")])),
				("ok", v(true)),
				("none", JsonValue::Null),
			])
		);
	}

	#[rstest]
	#[case("")]
	#[case(" ")]
	#[case("\t")]
	#[case("\n")]
	#[case("\r\n")]
	fn whitespace_between_tokens(#[case] gap: &str) {
		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_}_]_}_"#.replace('_', gap);
		assert_eq!(
			parse_json_str(&data).unwrap(),
			v(vec![(
				"a",
				v(vec![
					v(vec![("b", v(7)), ("c", v(true))]),
					v(vec![("d", v(false)), ("e", JsonValue::Null)]),
				])
			)])
		);
	}

	#[test]
	fn scalars_at_the_root() {
		assert_eq!(parse_json_str("42").unwrap(), v(42));
		assert_eq!(parse_json_str("-0.5").unwrap(), v(-0.5));
		assert_eq!(parse_json_str(r#""x""#).unwrap(), v("x"));
		assert_eq!(parse_json_str("null").unwrap(), JsonValue::Null);
		assert_eq!(parse_json_str("[]").unwrap(), JsonValue::Array(JsonArray::new()));
		assert_eq!(parse_json_str("{}").unwrap(), JsonValue::Object(JsonObject::new()));
	}

	fn nested(depth: usize) -> String {
		format!("{{\"a\":{}{}}}", "[".repeat(depth - 1), "]".repeat(depth - 1))
	}

	#[test]
	fn nesting_up_to_the_limit() {
		assert!(parse_json_str(&nested(MAX_DEPTH)).is_ok());
		assert!(parse_json_reader(nested(MAX_DEPTH).as_bytes()).is_ok());
	}

	#[rstest]
	#[case(MAX_DEPTH + 1)]
	#[case(10_000)]
	#[case(100_000)]
	fn nesting_beyond_the_limit(#[case] depth: usize) {
		assert!(root_cause(&nested(depth)).starts_with("maximum nesting depth exceeded at position"));

		let error = parse_json_reader(nested(depth).as_bytes()).unwrap_err();
		assert_eq!(
			error.chain().last().unwrap().to_string(),
			format!("maximum nesting depth exceeded at position {}", MAX_DEPTH + 4)
		);
	}

	#[test]
	fn deep_objects_are_limited_too() {
		let json = format!("{}1{}", r#"{"a":"#.repeat(MAX_DEPTH + 1), "}".repeat(MAX_DEPTH + 1));
		assert!(root_cause(&json).starts_with("maximum nesting depth exceeded"));
	}

	#[test]
	fn duplicate_keys_keep_the_last_value() {
		assert_eq!(parse_json_str(r#"{"a":1,"a":2}"#).unwrap(), v(vec![("a", 2)]));
	}

	#[rstest]
	#[case(r#"{"city":"Nantes","country","France"}"#, "expected ':' at position 27: tes\",\"country\",")]
	#[case(r#"{"key": "value""#, "unexpected end at position 15: {\"key\": \"value\"<EOF>")]
	#[case(r#"["key", "value""#, "unexpected end at position 15: [\"key\", \"value\"<EOF>")]
	#[case(r#"{"a":1} x"#, "unexpected trailing characters at position 8: {\"a\":1} ")]
	#[case(r#"{"a":1,}"#, "parsing object, expected '\"' at position 7: {\"a\":1,")]
	#[case("[1,2,]", "unexpected character ']' at position 5: [1,2,")]
	#[case("// comment", "unexpected character '/' at position 0: ")]
	fn syntax_errors(#[case] json: &str, #[case] message: &str) {
		assert_eq!(root_cause(json), message);
	}

	#[test]
	fn errors_quote_the_input() {
		let error = parse_json_str("{x}").unwrap_err();
		assert_eq!(error.to_string(), "while parsing JSON '{x}'");

		let long = format!("[{}", "1,".repeat(100));
		let error = parse_json_str(&long).unwrap_err();
		assert_eq!(error.to_string(), "while parsing JSON of 201 bytes");
	}

	#[test]
	fn reads_from_a_stream() {
		let reader = std::io::Cursor::new(br#" {"a": [1, {"b": null}]} "#.to_vec());
		assert_eq!(
			parse_json_reader(reader).unwrap(),
			v(vec![("a", v(vec![v(1), v(vec![("b", JsonValue::Null)])]))])
		);

		let error = parse_json_reader(&b"[1, 2"[..]).unwrap_err();
		assert_eq!(error.to_string(), "while parsing JSON stream");
		assert_eq!(error.chain().last().unwrap().to_string(), "unexpected end at position 5");
	}
}
