//! The kind of an OAuth error condition.

// self
use crate::{
	_prelude::*,
	taxonomy::{CustomCode, ErrorCode},
};

/// Identity of an OAuth error condition: a registered code or a caller-defined one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// One of the sixteen registered codes.
	Standard(ErrorCode),
	/// Caller-defined code outside the registered set.
	Custom(CustomCode),
}
impl ErrorKind {
	/// Returns the wire string for the kind.
	pub fn as_str(&self) -> &str {
		match self {
			ErrorKind::Standard(code) => code.as_str(),
			ErrorKind::Custom(code) => code.as_str(),
		}
	}

	/// Returns the registered code, if any.
	///
	/// A custom code that happens to spell a registered code still returns `None`.
	pub fn standard(&self) -> Option<ErrorCode> {
		match self {
			ErrorKind::Standard(code) => Some(*code),
			ErrorKind::Custom(_) => None,
		}
	}
}
impl From<ErrorCode> for ErrorKind {
	fn from(value: ErrorCode) -> Self {
		Self::Standard(value)
	}
}
impl From<CustomCode> for ErrorKind {
	fn from(value: CustomCode) -> Self {
		Self::Custom(value)
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn aliasing_custom_codes_stay_custom() {
		let alias = ErrorKind::from(
			CustomCode::new("invalid_grant").expect("Aliasing custom codes are permitted."),
		);

		assert_eq!(alias.as_str(), "invalid_grant");
		assert_eq!(alias.standard(), None);
		assert_ne!(alias, ErrorKind::Standard(ErrorCode::InvalidGrant));
		assert_eq!(
			ErrorKind::from(ErrorCode::InvalidGrant).standard(),
			Some(ErrorCode::InvalidGrant)
		);
	}
}
