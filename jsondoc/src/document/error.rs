use std::sync::Arc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Errors produced while loading a [`Document`](super::Document) or writing it out.
///
/// Reading never fails: getters fall back to defaults instead.
#[derive(Clone, Debug, Error)]
pub enum DocumentError {
	/// Malformed JSON text, or JSON text whose root is not an object.
	#[error("decode: {0}")]
	Decode(String),
	/// A value that is neither an object, an array, text nor null.
	#[error("cannot load a {found} into a document, expected an object or an array")]
	TypeConversion {
		/// Type name of the rejected value.
		found: &'static str,
	},
	/// Writing the encoded document failed.
	#[error("io: {0}")]
	Io(Arc<std::io::Error>),
}

impl DocumentError {
	/// Keeps the full context chain of a codec error.
	pub(crate) fn decode(error: &anyhow::Error) -> Self {
		DocumentError::Decode(format!("{error:#}"))
	}
}

impl From<std::io::Error> for DocumentError {
	fn from(error: std::io::Error) -> Self {
		DocumentError::Io(Arc::new(error))
	}
}
