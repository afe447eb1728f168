// self
use crate::{_prelude::*, obs::OperationOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(operation: &'static str, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"buzzy_api_operation_total",
			"operation" => operation,
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records how long an admitted call waited in the dispatch queue (when enabled).
pub fn record_dispatch_wait(operation: &'static str, wait: Duration) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!("buzzy_api_dispatch_wait_seconds", "operation" => operation)
			.record(wait.as_secs_f64());
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, wait);
	}
}
