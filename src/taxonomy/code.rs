//! The sixteen registered OAuth error codes.

// self
use crate::{_prelude::*, condition::OAuthError, registry::Registry};

macro_rules! def_codes {
	($(($variant:ident, $code:literal, $origin:ident, $doc:literal),)+) => {
		/// Registered OAuth error code.
		///
		/// Each variant is bound to exactly one wire string; see [`ErrorCode::as_str`].
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub enum ErrorCode {
			$(
				#[doc = $doc]
				#[serde(rename = $code)]
				$variant,
			)+
		}
		impl ErrorCode {
			/// Every registered code, in registration order.
			pub const ALL: [ErrorCode; 16] = [$(ErrorCode::$variant,)+];

			/// Returns the wire string for the code.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(ErrorCode::$variant => $code,)+
				}
			}

			/// Returns the document that registers the code.
			pub const fn origin(self) -> CodeOrigin {
				match self {
					$(ErrorCode::$variant => CodeOrigin::$origin,)+
				}
			}

			/// Returns a one-line summary of when the code applies.
			pub const fn description(self) -> &'static str {
				match self {
					$(ErrorCode::$variant => $doc,)+
				}
			}
		}
	};
}

def_codes! {
	(InvalidRequest, "invalid_request", Rfc6749, "The request is missing a parameter, repeats one, or carries an invalid value."),
	(InvalidClient, "invalid_client", Rfc6749, "Client authentication failed or the client is unknown."),
	(InvalidGrant, "invalid_grant", Rfc6749, "The grant or refresh token is invalid, expired, revoked, or mismatched."),
	(UnauthorizedClient, "unauthorized_client", Rfc6749, "The client may not use the requested grant type."),
	(UnsupportedGrantType, "unsupported_grant_type", Rfc6749, "The grant type is not supported by the server."),
	(InvalidScope, "invalid_scope", Rfc6749, "The requested scope is invalid, unknown, malformed, or exceeds the granted scope."),
	(AccessDenied, "access_denied", Rfc6749, "The resource owner or server denied the request."),
	(ServerError, "server_error", Rfc6749, "The server hit an unexpected condition."),
	(TemporarilyUnavailable, "temporarily_unavailable", Rfc6749, "The server is temporarily overloaded or under maintenance."),
	(UnsupportedResponseType, "unsupported_response_type", Rfc6749, "The server does not support this method of obtaining an authorization code."),
	(UnsupportedTokenType, "unsupported_token_type", Rfc7009, "The requested token type is not supported."),
	(InvalidToken, "invalid_token", Rfc6750, "The access token is expired, revoked, malformed, or otherwise invalid."),
	(MethodNotAllowed, "method_not_allowed", NonStandard, "The HTTP method is not allowed on this endpoint."),
	(TooManyRequests, "too_many_requests", NonStandard, "The client exceeded its rate limit."),
	(InvalidClientMetadata, "invalid_client_metadata", Rfc7591, "The client registration metadata is invalid."),
	(InsufficientScope, "insufficient_scope", Rfc6750, "The access token lacks the privileges the request needs."),
}

impl ErrorCode {
	/// Builds a condition carrying this code.
	pub fn build(self, message: impl Into<String>, uri: Option<String>) -> OAuthError {
		let error = OAuthError::new(self, message);

		match uri {
			Some(uri) => error.with_uri(uri),
			None => error,
		}
	}
}
impl Display for ErrorCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ErrorCode {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Registry::global().lookup(s).ok_or_else(|| Error::UnrecognizedCode { code: s.to_owned() })
	}
}
impl AsRef<str> for ErrorCode {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

/// Document that registers an [`ErrorCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeOrigin {
	/// OAuth 2.0 core, token and authorization endpoints.
	Rfc6749,
	/// Bearer token usage.
	Rfc6750,
	/// Token revocation.
	Rfc7009,
	/// Dynamic client registration.
	Rfc7591,
	/// Not registered with IANA; widely used by deployments anyway.
	NonStandard,
}
impl CodeOrigin {
	/// Returns a stable label for the origin.
	pub const fn as_str(self) -> &'static str {
		match self {
			CodeOrigin::Rfc6749 => "rfc6749",
			CodeOrigin::Rfc6750 => "rfc6750",
			CodeOrigin::Rfc7009 => "rfc7009",
			CodeOrigin::Rfc7591 => "rfc7591",
			CodeOrigin::NonStandard => "non_standard",
		}
	}
}
impl Display for CodeOrigin {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
