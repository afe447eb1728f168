//! Process-wide admission control for outbound calls.
//!
//! A [`Dispatcher`] owns one FIFO queue shared by every operation bound to it. Calls are
//! admitted strictly in the order they were submitted, one at a time, and consecutive call
//! *starts* are at least [`ThrottleConfig::min_spacing`] apart. A single worker task owns the
//! queue receiver and the last-start marker, so checking for a free slot and claiming it can
//! never interleave between two callers.
//!
//! Submission is synchronous: [`Dispatcher::submit`] enqueues immediately and hands back a
//! [`Dispatched`] future that resolves with the operation's own output once it has run.
//! The dispatcher never looks inside that output. There is no cancellation: dropping a
//! [`Dispatched`] handle leaves the call in the queue, and it still runs when its turn comes.

pub mod clock;

pub use clock::*;

// std
use std::task::{Context, Poll};
// crates.io
use tokio::{
	runtime::Handle,
	sync::{mpsc, oneshot},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, DispatchError},
	obs,
};

/// Maximum number of calls executing at any instant, across all operations.
pub const MAX_CONCURRENT: usize = 1;

type Job = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Pacing options for a [`Dispatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottleConfig {
	/// Minimum gap between the start of one call and the start of the next.
	pub min_spacing: Duration,
}
impl ThrottleConfig {
	/// Default spacing between call starts.
	pub const DEFAULT_MIN_SPACING: Duration = Duration::from_millis(150);

	/// Overrides the minimum start-to-start spacing.
	pub fn with_min_spacing(mut self, spacing: Duration) -> Self {
		self.min_spacing = spacing;

		self
	}

	/// Earliest instant the next call may start, given the previous start.
	pub fn earliest_start(&self, last_start: Option<Instant>) -> Option<Instant> {
		last_start.map(|start| start + self.min_spacing)
	}
}
impl Default for ThrottleConfig {
	fn default() -> Self {
		Self { min_spacing: Self::DEFAULT_MIN_SPACING }
	}
}

/// Admitted call waiting for (or holding) the execution slot.
struct QueueEntry {
	operation: &'static str,
	job: Job,
	enqueued_at: Instant,
}

/// Shared FIFO admission queue enforcing one-at-a-time, spaced call starts.
///
/// Cloning is cheap and every clone feeds the same queue; construct one per process and
/// hand clones to every client that should share the budget.
#[derive(Clone)]
pub struct Dispatcher {
	queue: mpsc::UnboundedSender<QueueEntry>,
	clock: Arc<dyn Clock>,
	config: ThrottleConfig,
}
impl Dispatcher {
	/// Creates a dispatcher paced by the Tokio timer.
	///
	/// Must be called from within a Tokio runtime, which hosts the queue worker.
	pub fn new(config: ThrottleConfig) -> Result<Self, ConfigError> {
		Self::with_clock(config, Arc::new(TokioClock))
	}

	/// Creates a dispatcher paced by a caller-provided [`Clock`].
	pub fn with_clock(config: ThrottleConfig, clock: Arc<dyn Clock>) -> Result<Self, ConfigError> {
		let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
		let (queue, inbox) = mpsc::unbounded_channel();

		runtime.spawn(drive(inbox, config, Arc::clone(&clock)));

		Ok(Self { queue, clock, config })
	}

	/// Returns the pacing options this dispatcher enforces.
	pub fn config(&self) -> ThrottleConfig {
		self.config
	}

	/// Enqueues `fut` and returns a handle resolving to its output once it has run.
	///
	/// `fut` is not polled until the dispatcher admits it.
	pub fn submit<Fut>(&self, operation: &'static str, fut: Fut) -> Dispatched<Fut::Output>
	where
		Fut: 'static + Send + Future,
		Fut::Output: 'static + Send,
	{
		let (deliver, result) = oneshot::channel();
		let job = Box::pin(async move {
			let _ = deliver.send(fut.await);
		});
		let entry = QueueEntry { operation, job, enqueued_at: self.clock.now() };

		// A closed queue drops the entry together with `deliver`, which resolves the handle
		// to `DispatchError::Dropped`.
		let _ = self.queue.send(entry);

		Dispatched { operation, result }
	}

	/// Wraps `operation_fn` so every invocation goes through this dispatcher.
	pub fn wrap<F>(&self, operation: &'static str, operation_fn: F) -> Throttled<F> {
		Throttled { dispatcher: self.clone(), operation, operation_fn }
	}
}
impl Debug for Dispatcher {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Dispatcher")
			.field("config", &self.config)
			.field("max_concurrent", &MAX_CONCURRENT)
			.field("closed", &self.queue.is_closed())
			.finish()
	}
}

/// Pending result of a dispatched call.
#[derive(Debug)]
pub struct Dispatched<T> {
	operation: &'static str,
	result: oneshot::Receiver<T>,
}
impl<T> Future for Dispatched<T> {
	type Output = Result<T, DispatchError>;

	fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let operation = self.operation;

		Pin::new(&mut self.result).poll(cx).map_err(|_| DispatchError::Dropped { operation })
	}
}

/// Function bound to a [`Dispatcher`]; see [`Dispatcher::wrap`].
#[derive(Clone)]
pub struct Throttled<F> {
	dispatcher: Dispatcher,
	operation: &'static str,
	operation_fn: F,
}
impl<F> Throttled<F> {
	/// Enqueues one invocation with `args`.
	pub fn call<A, Fut>(&self, args: A) -> Dispatched<Fut::Output>
	where
		F: Fn(A) -> Fut,
		Fut: 'static + Send + Future,
		Fut::Output: 'static + Send,
	{
		self.dispatcher.submit(self.operation, (self.operation_fn)(args))
	}

	/// Returns the dispatcher this function is bound to.
	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}
}
impl<F> Debug for Throttled<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Throttled")
			.field("operation", &self.operation)
			.field("dispatcher", &self.dispatcher)
			.finish()
	}
}

async fn drive(
	mut inbox: mpsc::UnboundedReceiver<QueueEntry>,
	config: ThrottleConfig,
	clock: Arc<dyn Clock>,
) {
	let mut last_start = None;

	while let Some(QueueEntry { operation, job, enqueued_at }) = inbox.recv().await {
		if let Some(earliest) =
			config.earliest_start(last_start).filter(|earliest| clock.now() < *earliest)
		{
			clock.sleep_until(earliest).await;
		}

		let started = clock.now();
		let wait = started.saturating_duration_since(enqueued_at);

		last_start = Some(started);

		obs::log_admitted(operation, wait);
		obs::record_dispatch_wait(operation, wait);

		// A panicking job surfaces here as a join error; the worker keeps draining.
		if tokio::spawn(job).await.is_err() {
			obs::log_job_lost(operation);
		}
	}
}
