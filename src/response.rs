//! RFC 6749 §5.2 wire responses and the conversions between them and [`OAuthError`].
//!
//! Serializing is infallible: every condition maps to a well-formed [`ErrorResponse`].
//! Parsing goes through the [`Registry`]; an unregistered `error` member never panics and is
//! surfaced as [`Error::UnrecognizedCode`] unless the caller opts into
//! [`OAuthError::from_response_or_custom`].

// self
use crate::{
	_prelude::*,
	condition::OAuthError,
	obs::{self, ParseOutcome},
	registry::Registry,
	taxonomy::ErrorKind,
};

/// Wire-format OAuth error object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Registered or custom error code.
	pub error: String,
	/// Human-readable description; never machine-interpreted.
	#[serde(default)]
	pub error_description: String,
	/// Reference link, omitted from the wire when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_uri: Option<String>,
}
impl ErrorResponse {
	/// Creates a response without a reference URI.
	pub fn new(error: impl Into<String>, error_description: impl Into<String>) -> Self {
		Self { error: error.into(), error_description: error_description.into(), error_uri: None }
	}

	/// Attaches a reference URI.
	pub fn with_error_uri(mut self, uri: impl Into<String>) -> Self {
		self.error_uri = Some(uri.into());

		self
	}

	/// Encodes the response as JSON text.
	pub fn to_json(&self) -> Result<String> {
		serde_json::to_string(self).map_err(Error::Encode)
	}

	/// Decodes a response from JSON text, reporting the path of the first malformed field.
	pub fn from_json(json: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(json);

		serde_path_to_error::deserialize(&mut de).map_err(|source| {
			obs::observe_parse(ParseOutcome::Malformed, None);

			Error::MalformedResponse { source }
		})
	}
}
impl From<OAuthError> for ErrorResponse {
	fn from(value: OAuthError) -> Self {
		let (kind, message, uri) = value.into_parts();
		let error = match kind {
			ErrorKind::Standard(code) => code.as_str().to_owned(),
			ErrorKind::Custom(code) => code.into(),
		};

		Self { error, error_description: message, error_uri: uri }
	}
}
impl From<&OAuthError> for ErrorResponse {
	fn from(value: &OAuthError) -> Self {
		value.to_response()
	}
}
impl TryFrom<ErrorResponse> for OAuthError {
	type Error = Error;

	/// Rebuilds the registered condition named by `error`.
	///
	/// Unregistered codes yield [`Error::UnrecognizedCode`]; callers choose the fallback.
	fn try_from(value: ErrorResponse) -> Result<Self, Self::Error> {
		match Registry::global().reconstruct(&value) {
			Some(error) => {
				obs::observe_parse(ParseOutcome::Recognized, Some(&value.error));

				Ok(error)
			},
			None => {
				obs::observe_parse(ParseOutcome::Unrecognized, Some(&value.error));

				Err(Error::UnrecognizedCode { code: value.error })
			},
		}
	}
}

impl OAuthError {
	/// Serializes the condition into its wire response.
	///
	/// `error_uri` is present iff a URI was supplied at construction.
	pub fn to_response(&self) -> ErrorResponse {
		ErrorResponse {
			error: self.code().to_owned(),
			error_description: self.message().to_owned(),
			error_uri: self.uri().map(ToOwned::to_owned),
		}
	}

	/// Rebuilds a condition from a wire response, keeping unregistered codes as custom ones.
	///
	/// Fails only when `error` is empty.
	pub fn from_response_or_custom(response: ErrorResponse) -> Result<Self> {
		if let Some(error) = Registry::global().reconstruct(&response) {
			obs::observe_parse(ParseOutcome::Recognized, Some(&response.error));

			return Ok(error);
		}

		obs::observe_parse(ParseOutcome::Unrecognized, Some(&response.error));

		let ErrorResponse { error, error_description, error_uri } = response;
		let error = Self::custom(error, error_description)?;

		Ok(match error_uri {
			Some(uri) => error.with_uri(uri),
			None => error,
		})
	}
}
