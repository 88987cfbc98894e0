//! Buffered byte cursor over any `std::io::Read` source.
//!
//! `ByteIterator` keeps exactly one byte of lookahead, counts the absolute position and,
//! in debug mode, remembers the last few bytes so that parse errors can show where they happened.

use anyhow::{Error, Result, anyhow};
use std::io::{ErrorKind, Read};

const SNAPSHOT_SIZE: usize = 16;
const BUFFER_SIZE: usize = 4096;

/// A peekable byte cursor over a reader.
pub struct ByteIterator<'a> {
	buffer: Box<[u8; BUFFER_SIZE]>,
	buffer_len: usize,
	buffer_pos: usize,
	source: Box<dyn Read + 'a>,
	peeked_byte: Option<u8>,
	position: usize,
	read_error: Option<String>,
	snapshot: Option<[u8; SNAPSHOT_SIZE]>,
}

impl<'a> ByteIterator<'a> {
	/// Creates a cursor positioned on the first byte of `reader`.
	///
	/// With `debug` enabled, errors include a snapshot of the recently read bytes.
	pub fn from_reader(reader: impl Read + 'a, debug: bool) -> Self {
		let mut instance = ByteIterator {
			buffer: Box::new([0; BUFFER_SIZE]),
			buffer_len: 0,
			buffer_pos: 0,
			source: Box::new(reader),
			peeked_byte: None,
			position: 0,
			read_error: None,
			snapshot: debug.then_some([0; SNAPSHOT_SIZE]),
		};
		instance.fill_buffer();
		instance.advance();
		instance
	}

	fn fill_buffer(&mut self) {
		self.buffer_pos = 0;
		self.buffer_len = 0;
		if self.read_error.is_some() {
			return;
		}
		loop {
			match self.source.read(&mut self.buffer[..]) {
				Ok(len) => {
					self.buffer_len = len;
					return;
				}
				Err(e) if e.kind() == ErrorKind::Interrupted => {}
				Err(e) => {
					log::warn!("stopped reading JSON input at byte {}: {e}", self.position);
					self.read_error = Some(e.to_string());
					return;
				}
			}
		}
	}

	#[inline]
	fn next_byte(&mut self) -> Option<u8> {
		if self.buffer_pos >= self.buffer_len {
			self.fill_buffer();
			if self.buffer_len == 0 {
				return None;
			}
		}
		let byte = self.buffer[self.buffer_pos];
		self.buffer_pos += 1;
		Some(byte)
	}

	/// Builds an error for the byte that is currently peeked.
	///
	/// The message names the zero-based position, a read failure if one ended the input early,
	/// and in debug mode the last bytes read (`<EOF>` marks the end of input).
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let position = self.position.saturating_sub(1);
		let mut text = format!("{msg} at position {position}");

		if let Some(snapshot) = &self.snapshot {
			let length = position.min(SNAPSHOT_SIZE - 1);
			let start = (position + SNAPSHOT_SIZE - length) % SNAPSHOT_SIZE;
			let bytes: Vec<u8> = snapshot.iter().cycle().skip(start).take(length).copied().collect();
			text.push_str(": ");
			text.push_str(&String::from_utf8_lossy(&bytes));
			if self.peeked_byte.is_none() {
				text.push_str("<EOF>");
			}
		}

		if let Some(read_error) = &self.read_error {
			text.push_str(&format!(" (input ended by read error: {read_error})"));
		}

		anyhow!(text)
	}

	/// Absolute number of bytes advanced so far, including the peeked byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.peeked_byte
	}

	/// Drops the peeked byte and loads the next one.
	#[inline]
	pub fn advance(&mut self) {
		self.peeked_byte = self.next_byte();
		if let (Some(snapshot), Some(byte)) = (self.snapshot.as_mut(), self.peeked_byte) {
			snapshot[self.position % SNAPSHOT_SIZE] = byte;
		}
		self.position += 1;
	}

	/// Returns the peeked byte and advances.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peeked_byte;
		self.advance();
		current_byte
	}

	/// Like [`consume`](Self::consume), but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		let byte = self.expect_peeked_byte()?;
		self.advance();
		Ok(byte)
	}

	/// Like [`peek`](Self::peek), but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peeked_byte.ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips JSON whitespace (space, tab, line feed, carriage return).
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.advance();
		}
	}

	/// Fails unless only whitespace is left.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			None => Ok(()),
			Some(_) => Err(self.format_error("unexpected trailing characters")),
		}
	}
}
