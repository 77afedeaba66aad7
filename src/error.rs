//! Crate-level error types for parsing and encoding OAuth error responses.
//!
//! These describe failures of this crate's own operations. OAuth protocol failures are
//! represented by [`OAuthError`](crate::condition::OAuthError) values instead.

// self
use crate::{_prelude::*, taxonomy::CustomCodeError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The `error` member is not one of the registered codes.
	#[error("Error code `{code}` is not registered.")]
	UnrecognizedCode {
		/// Code as received.
		code: String,
	},
	/// A caller-defined code failed validation.
	#[error(transparent)]
	InvalidCustomCode(#[from] CustomCodeError),
	/// The payload is not a well-formed error response.
	#[error("Error response is malformed.")]
	MalformedResponse {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The response could not be encoded as JSON.
	#[error("Error response could not be encoded.")]
	Encode(#[source] serde_json::Error),
}
