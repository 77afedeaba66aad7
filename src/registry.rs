//! Read-only mapping from registered code strings to their [`ErrorCode`].
//!
//! The process-wide instance is assembled once from [`ErrorCode::ALL`] on first use and never
//! mutated afterwards, so concurrent readers need no synchronization. The registry only reports
//! presence or absence; deciding what to do with an unregistered code is left to the caller.

// std
use std::sync::LazyLock;
// self
use crate::{_prelude::*, condition::OAuthError, response::ErrorResponse, taxonomy::ErrorCode};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Lookup table covering exactly the registered codes.
#[derive(Clone, Debug)]
pub struct Registry {
	entries: HashMap<&'static str, ErrorCode>,
}
impl Registry {
	fn new() -> Self {
		Self { entries: ErrorCode::ALL.into_iter().map(|code| (code.as_str(), code)).collect() }
	}

	/// Returns the process-wide registry.
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	/// Returns the registered code spelled exactly as `code`, if any.
	pub fn lookup(&self, code: &str) -> Option<ErrorCode> {
		self.entries.get(code).copied()
	}

	/// Returns true if `code` is registered.
	pub fn contains(&self, code: &str) -> bool {
		self.entries.contains_key(code)
	}

	/// Rebuilds the registered condition named by the response's `error` member.
	///
	/// Returns `None` for unregistered codes.
	pub fn reconstruct(&self, response: &ErrorResponse) -> Option<OAuthError> {
		self.lookup(&response.error)
			.map(|code| code.build(response.error_description.clone(), response.error_uri.clone()))
	}

	/// Number of registered codes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no codes are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterator over registered codes, in registration order.
	pub fn codes(&self) -> impl Iterator<Item = ErrorCode> {
		ErrorCode::ALL.into_iter()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::thread;
	// self
	use super::*;

	#[test]
	fn registry_is_bijective_over_registered_codes() {
		let registry = Registry::global();

		assert_eq!(registry.len(), ErrorCode::ALL.len());

		for code in registry.codes() {
			assert_eq!(registry.lookup(code.as_str()), Some(code));
		}
	}

	#[test]
	fn lookup_misses_are_reported_not_raised() {
		let registry = Registry::global();

		for code in ["", "foo_bar", "Invalid_Grant", "invalid_grant ", "slow_down"] {
			assert_eq!(registry.lookup(code), None, "`{code}` must not be registered.");
			assert!(!registry.contains(code));
		}
	}

	#[test]
	fn reconstruct_keeps_description_and_uri() {
		let response = ErrorResponse::new("insufficient_scope", "needs `write`")
			.with_error_uri("https://example.com/scopes");
		let error =
			Registry::global().reconstruct(&response).expect("Registered code should rebuild.");

		assert_eq!(error.standard_code(), Some(ErrorCode::InsufficientScope));
		assert_eq!(error.to_response(), response);
		assert!(Registry::global().reconstruct(&ErrorResponse::new("foo_bar", "x")).is_none());
	}

	#[test]
	fn concurrent_readers_share_one_instance() {
		let handles = (0..4)
			.map(|_| {
				thread::spawn(|| {
					let registry = Registry::global();

					(registry as *const Registry as usize, registry.lookup("server_error"))
				})
			})
			.collect::<Vec<_>>();
		let results = handles
			.into_iter()
			.map(|handle| handle.join().expect("Registry reader thread should not panic."))
			.collect::<Vec<_>>();

		assert!(results.windows(2).all(|pair| pair[0].0 == pair[1].0));
		assert!(results.iter().all(|(_, code)| *code == Some(ErrorCode::ServerError)));
	}
}
