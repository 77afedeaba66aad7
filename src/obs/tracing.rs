// self
use crate::obs::ParseOutcome;

/// Emits a parse event (when tracing is enabled).
///
/// Registered codes are reported at `trace`; misses and malformed payloads at `debug`.
pub fn trace_parse_outcome(outcome: ParseOutcome, code: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		let code = code.unwrap_or_default();

		match outcome {
			ParseOutcome::Recognized =>
				tracing::trace!(target: "oauth2_taxonomy.parse", outcome = outcome.as_str(), code),
			ParseOutcome::Unrecognized | ParseOutcome::Malformed => tracing::debug!(
				target: "oauth2_taxonomy.parse",
				outcome = outcome.as_str(),
				code,
				"error response did not map to a registered code"
			),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (outcome, code);
	}
}
