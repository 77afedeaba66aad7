//! Bridge to the [`oauth2`] crate's error response types.
//!
//! Clients built on [`oauth2`] receive a [`StandardErrorResponse`] when a token request fails.
//! Converting it into an [`ErrorResponse`] lets the [`Registry`](crate::registry::Registry)
//! rebuild the typed condition, including codes the [`oauth2`] crate only models as
//! [`BasicErrorResponseType::Extension`].

pub use oauth2;

// crates.io
use oauth2::{
	ErrorResponseType, StandardErrorResponse,
	basic::{BasicErrorResponse, BasicErrorResponseType},
};
// self
use crate::{condition::OAuthError, response::ErrorResponse, taxonomy::ErrorCode};

impl<T> From<&StandardErrorResponse<T>> for ErrorResponse
where
	T: ErrorResponseType + AsRef<str>,
{
	fn from(value: &StandardErrorResponse<T>) -> Self {
		Self {
			error: value.error().as_ref().to_owned(),
			error_description: value.error_description().cloned().unwrap_or_default(),
			error_uri: value.error_uri().cloned(),
		}
	}
}

impl OAuthError {
	/// Converts the condition into the [`oauth2`] crate's basic error response.
	///
	/// The six codes [`BasicErrorResponseType`] models natively keep their variant; every other
	/// code, custom ones included, becomes [`BasicErrorResponseType::Extension`].
	pub fn to_basic_response(&self) -> BasicErrorResponse {
		let error = match self.standard_code() {
			Some(ErrorCode::InvalidRequest) => BasicErrorResponseType::InvalidRequest,
			Some(ErrorCode::InvalidClient) => BasicErrorResponseType::InvalidClient,
			Some(ErrorCode::InvalidGrant) => BasicErrorResponseType::InvalidGrant,
			Some(ErrorCode::UnauthorizedClient) => BasicErrorResponseType::UnauthorizedClient,
			Some(ErrorCode::UnsupportedGrantType) => BasicErrorResponseType::UnsupportedGrantType,
			Some(ErrorCode::InvalidScope) => BasicErrorResponseType::InvalidScope,
			_ => BasicErrorResponseType::Extension(self.code().to_owned()),
		};

		StandardErrorResponse::new(
			error,
			Some(self.message().to_owned()),
			self.uri().map(ToOwned::to_owned),
		)
	}
}
