//! Token-level JSON parsing helpers built on top of [`ByteIterator`].
//!
//! Every helper consumes exactly its token and leaves the iterator on the byte that follows it
//! (after a closing quote, bracket or brace, or on the first byte that is not part of a number).

use super::iterator::ByteIterator;
use anyhow::Result;

/// Matches a fixed ASCII tag such as `true` or `null`.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut code = 0u16;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid hex digit in unicode escape")),
		};
		code = (code << 4) | u16::from(digit);
	}
	Ok(code)
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let first = parse_hex4(iter)?;
	let code_point = match first {
		0xD800..=0xDBFF => {
			if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
				return Err(iter.format_error("unpaired high surrogate"));
			}
			let second = parse_hex4(iter)?;
			if !(0xDC00..=0xDFFF).contains(&second) {
				return Err(iter.format_error("invalid low surrogate"));
			}
			0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
		}
		0xDC00..=0xDFFF => return Err(iter.format_error("unpaired low surrogate")),
		_ => u32::from(first),
	};
	char::from_u32(code_point).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Parses a quoted JSON string literal, resolving all escapes.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut utf8 = [0u8; 4];
					bytes.extend_from_slice(parse_unicode_escape(iter)?.encode_utf8(&mut utf8).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c if c < 0x20 => return Err(iter.format_error("unescaped control character in string")),
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("invalid UTF-8 in string"))
}

fn push_digits(iter: &mut ByteIterator, number: &mut Vec<u8>) -> usize {
	let mut count = 0;
	while let Some(digit @ b'0'..=b'9') = iter.peek() {
		number.push(digit);
		iter.advance();
		count += 1;
	}
	count
}

/// Reads the textual form of a JSON number: `-`, integer part without leading zeros,
/// optional fraction, optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'-') = iter.peek() {
		number.push(b'-');
		iter.advance();
	}

	match iter.peek() {
		Some(b'0') => {
			number.push(b'0');
			iter.advance();
			if let Some(b'0'..=b'9') = iter.peek() {
				return Err(iter.format_error("leading zeros are not allowed"));
			}
		}
		Some(b'1'..=b'9') => {
			push_digits(iter, &mut number);
		}
		_ => return Err(iter.format_error("expected digits in number")),
	}

	if let Some(b'.') = iter.peek() {
		number.push(b'.');
		iter.advance();
		if push_digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(exponent @ (b'e' | b'E')) = iter.peek() {
		number.push(exponent);
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(sign);
			iter.advance();
		}
		if push_digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	// only ASCII was pushed
	Ok(number.into_iter().map(char::from).collect())
}

/// Reads a JSON number as `f64`. Numbers beyond the `f64` range are an error.
pub fn parse_number(iter: &mut ByteIterator) -> Result<f64> {
	let number = parse_number_as_string(iter)?
		.parse::<f64>()
		.map_err(|_| iter.format_error("invalid number"))?;
	if number.is_finite() {
		Ok(number)
	} else {
		Err(iter.format_error("number out of range"))
	}
}

/// Walks `{ "key": value, ... }`, handing every key to `parse_value` with the iterator
/// positioned on the value.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if let Some(b'}') = iter.peek() {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
}

/// Walks `[ value, ... ]`, collecting what `parse_value` returns for every element.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();
	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}
