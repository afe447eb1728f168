// self
use crate::{_prelude::*, operation::FailurePolicy};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(operation: &'static str, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("buzzy_api.operation", operation, stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a transport failure that a swallowing operation replaced with its empty default.
pub fn log_swallowed(operation: &'static str, policy: FailurePolicy, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			operation,
			%policy,
			error = %error,
			"operation failed; returning empty result"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (operation, policy, error);
	}
}

/// Logs a login attempt that produced no credential.
pub fn log_login_rejected(reason: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(operation = "login", reason = %reason, "login error");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = reason;
	}
}

/// Logs a call admitted by the dispatcher.
pub fn log_admitted(operation: &'static str, wait: Duration) {
	#[cfg(feature = "tracing")]
	{
		let wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);

		tracing::debug!(operation, wait_ms, "dispatcher admitted call");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (operation, wait);
	}
}

/// Logs a dispatched job that ended without delivering a result.
pub fn log_job_lost(operation: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::error!(operation, "dispatched call ended without producing a result");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = operation;
	}
}
