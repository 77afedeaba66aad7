// self
use oauth2_taxonomy::{
	condition::OAuthError,
	error::Error,
	oauth::oauth2::basic::{BasicErrorResponse, BasicErrorResponseType},
	registry::Registry,
	response::ErrorResponse,
	taxonomy::ErrorCode,
};

#[test]
fn invalid_grant_survives_a_round_trip() {
	let original = OAuthError::invalid_grant("refresh token expired");
	let wire = original.to_response();

	assert_eq!(wire, ErrorResponse::new("invalid_grant", "refresh token expired"));

	let code = Registry::global().lookup(&wire.error).expect("invalid_grant should be registered.");
	let rebuilt = code.build(wire.error_description.clone(), wire.error_uri.clone());

	assert_eq!(rebuilt.to_response(), wire);
	assert_eq!(rebuilt, original);
}

#[test]
fn unknown_codes_are_wrapped_by_the_caller() {
	let json = r#"{"error":"foo_bar","error_description":"vendor specific failure"}"#;
	let wire = ErrorResponse::from_json(json).expect("Well-formed response should decode.");

	assert!(Registry::global().lookup("foo_bar").is_none());

	let error = match OAuthError::try_from(wire.clone()) {
		Ok(error) => error,
		Err(Error::UnrecognizedCode { code }) =>
			OAuthError::custom(code, wire.error_description.clone())
				.expect("Unknown code should become a custom condition."),
		Err(e) => panic!("Unexpected error: {e:?}."),
	};

	assert_eq!(error.to_response(), wire);
	assert_eq!(error.to_response().to_json().expect("Response should encode."), json);
}

#[test]
fn json_text_round_trips_for_every_registered_code() {
	for code in ErrorCode::ALL {
		let original =
			code.build("described", Some(format!("https://example.com/errors/{code}")));
		let json = original.to_response().to_json().expect("Response should encode.");
		let decoded = ErrorResponse::from_json(&json).expect("Encoded response should decode.");
		let rebuilt = OAuthError::try_from(decoded).expect("Registered code should rebuild.");

		assert_eq!(rebuilt, original);
	}
}

#[test]
fn custom_fallback_is_opt_in() {
	let wire = ErrorResponse::new("authorization_pending", "keep polling");

	assert!(OAuthError::try_from(wire.clone()).is_err());

	let error =
		OAuthError::from_response_or_custom(wire.clone()).expect("Fallback should accept the code.");

	assert_eq!(error.code(), "authorization_pending");
	assert_eq!(error.to_response(), wire);
}

#[test]
fn oauth2_crate_responses_map_into_the_taxonomy() {
	let received: BasicErrorResponse = serde_json::from_str(
		r#"{"error":"invalid_token","error_description":"token revoked","error_uri":"https://example.com/t"}"#,
	)
	.expect("oauth2 error response should deserialize.");

	assert_eq!(*received.error(), BasicErrorResponseType::Extension("invalid_token".into()));

	let error = OAuthError::try_from(ErrorResponse::from(&received))
		.expect("invalid_token should be registered.");

	assert_eq!(error.standard_code(), Some(ErrorCode::InvalidToken));
	assert_eq!(error.message(), "token revoked");
	assert_eq!(error.uri(), Some("https://example.com/t"));
}
