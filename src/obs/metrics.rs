// self
use crate::{
	obs::{RequestOutcome, RequestStage},
	request::Verb,
};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(stage: RequestStage, verb: Verb, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			stage.metric_name(),
			"verb" => verb.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, verb, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_request_outcome_noop_without_metrics() {
		record_request_outcome(RequestStage::Sign, Verb::Post, RequestOutcome::Failure);
	}
}
