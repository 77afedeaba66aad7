//! Caller-defined error codes outside the registered set.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Error returned when a custom code fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum CustomCodeError {
	/// The code was empty.
	#[error("Custom error code cannot be empty.")]
	Empty,
}

/// Non-empty error code supplied by the caller.
///
/// The value is kept verbatim. It may coincide with a registered code; prefer the matching
/// [`ErrorCode`](crate::taxonomy::ErrorCode) in that case.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomCode(String);
impl CustomCode {
	/// Creates a new custom code after validation.
	pub fn new(value: impl Into<String>) -> Result<Self, CustomCodeError> {
		let value = value.into();

		validate_view(&value)?;

		Ok(Self(value))
	}

	/// Returns the code as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for CustomCode {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for CustomCode {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for CustomCode {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<CustomCode> for String {
	fn from(value: CustomCode) -> Self {
		value.0
	}
}
impl TryFrom<String> for CustomCode {
	type Error = CustomCodeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl TryFrom<&str> for CustomCode {
	type Error = CustomCodeError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for CustomCode {
	type Err = CustomCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for CustomCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "CustomCode({})", self.0)
	}
}
impl Display for CustomCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn validate_view(view: &str) -> Result<(), CustomCodeError> {
	if view.is_empty() {
		return Err(CustomCodeError::Empty);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn custom_codes_are_kept_verbatim() {
		let code = CustomCode::new("x_custom").expect("Custom code fixture should be valid.");

		assert_eq!(code.as_str(), "x_custom");
		assert_eq!(code.to_string(), "x_custom");
		assert_eq!(
			CustomCode::new(" Mixed Case ").expect("Only emptiness is rejected.").as_str(),
			" Mixed Case "
		);
		assert_eq!(CustomCode::new(""), Err(CustomCodeError::Empty));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let code: CustomCode =
			serde_json::from_str("\"slow_down\"").expect("Custom code should deserialize.");

		assert_eq!(&*code, "slow_down");
		assert_eq!(
			serde_json::to_string(&code).expect("Custom code should serialize."),
			"\"slow_down\""
		);
		assert!(serde_json::from_str::<CustomCode>("\"\"").is_err());
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<CustomCode, u8> = HashMap::from_iter([(
			CustomCode::new("slow_down").expect("Custom code used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("slow_down"), Some(&7));
	}
}
