//! OAuth error conditions raised by endpoint logic.
//!
//! An [`OAuthError`] is an immutable value pairing an [`ErrorKind`] with a human-readable
//! message and an optional reference URI. Server code builds one the moment a failure is
//! detected, then either propagates it with `?` or turns it into an
//! [`ErrorResponse`](crate::response::ErrorResponse) at the boundary.

// self
use crate::{
	_prelude::*,
	response::ErrorResponse,
	taxonomy::{CustomCode, ErrorCode, ErrorKind},
};

macro_rules! def_constructors {
	($(($fn_name:ident, $variant:ident),)+) => {
		impl OAuthError {
			$(
				#[doc = concat!("Builds an [`ErrorCode::", stringify!($variant), "`] condition.")]
				pub fn $fn_name(message: impl Into<String>) -> Self {
					Self::new(ErrorCode::$variant, message)
				}
			)+
		}
	};
}

/// OAuth error condition with a code, a message, and an optional reference URI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
#[serde(into = "ErrorResponse")]
#[error("{kind}: {message}")]
pub struct OAuthError {
	kind: ErrorKind,
	message: String,
	uri: Option<String>,
}
impl OAuthError {
	/// Creates a condition of the given kind without a reference URI.
	pub fn new(kind: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
		Self { kind: kind.into(), message: message.into(), uri: None }
	}

	/// Creates a condition carrying a caller-defined code.
	///
	/// Only empty codes are rejected. A code that spells a registered one is kept as custom.
	pub fn custom(code: impl Into<String>, message: impl Into<String>) -> Result<Self> {
		let code = CustomCode::new(code)?;

		Ok(Self::new(code, message))
	}

	/// Attaches a reference URI.
	pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());

		self
	}

	/// Returns the wire code.
	pub fn code(&self) -> &str {
		self.kind.as_str()
	}

	/// Returns the kind of the condition.
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	/// Returns the human-readable message.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Returns the reference URI, if one was supplied.
	pub fn uri(&self) -> Option<&str> {
		self.uri.as_deref()
	}

	/// Returns true if the condition carries a registered code.
	pub fn is_standard(&self) -> bool {
		self.kind.standard().is_some()
	}

	/// Returns the registered code, if any.
	pub fn standard_code(&self) -> Option<ErrorCode> {
		self.kind.standard()
	}

	/// Splits the condition into its kind, message, and URI.
	pub fn into_parts(self) -> (ErrorKind, String, Option<String>) {
		(self.kind, self.message, self.uri)
	}
}

def_constructors! {
	(invalid_request, InvalidRequest),
	(invalid_client, InvalidClient),
	(invalid_grant, InvalidGrant),
	(unauthorized_client, UnauthorizedClient),
	(unsupported_grant_type, UnsupportedGrantType),
	(invalid_scope, InvalidScope),
	(access_denied, AccessDenied),
	(server_error, ServerError),
	(temporarily_unavailable, TemporarilyUnavailable),
	(unsupported_response_type, UnsupportedResponseType),
	(unsupported_token_type, UnsupportedTokenType),
	(invalid_token, InvalidToken),
	(method_not_allowed, MethodNotAllowed),
	(too_many_requests, TooManyRequests),
	(invalid_client_metadata, InvalidClientMetadata),
	(insufficient_scope, InsufficientScope),
}
