//! Optional observability hooks for response parsing.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit a debug event on target `oauth2_taxonomy.parse` with the `outcome`
//!   and `code` fields.
//! - Enable `metrics` to increment the `oauth2_taxonomy_parse_total` counter for every parse,
//!   labeled by `outcome`.
//!
//! Building conditions and serializing them never reports anything.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded when turning wire data into conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseOutcome {
	/// The `error` member named a registered code.
	Recognized,
	/// The `error` member was not registered.
	Unrecognized,
	/// The payload was not a well-formed error response.
	Malformed,
}
impl ParseOutcome {
	/// Returns a stable label suitable for event or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ParseOutcome::Recognized => "recognized",
			ParseOutcome::Unrecognized => "unrecognized",
			ParseOutcome::Malformed => "malformed",
		}
	}
}
impl Display for ParseOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

pub(crate) fn observe_parse(outcome: ParseOutcome, code: Option<&str>) {
	trace_parse_outcome(outcome, code);
	record_parse_outcome(outcome);
}
