// self
use crate::obs::ParseOutcome;

/// Records a parse outcome via the global metrics recorder (when enabled).
pub fn record_parse_outcome(outcome: ParseOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth2_taxonomy_parse_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
