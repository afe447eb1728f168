//! Optional observability helpers for operations and the dispatcher.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to emit structured spans named `buzzy_api.operation` with the
//!   `operation` and `stage` fields, dispatcher admission events, and `warn` events for
//!   swallowed failures.
//! - Enable `metrics` to increment the `buzzy_api_operation_total` counter for every
//!   attempt/success/failure/swallowed outcome, labeled by `operation` + `outcome`, and to
//!   record queue waits in the `buzzy_api_dispatch_wait_seconds` histogram.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each operation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
	/// Failure replaced with the operation's empty default.
	Swallowed,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
			OperationOutcome::Swallowed => "swallowed",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
