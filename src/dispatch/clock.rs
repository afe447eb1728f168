//! Time sources the dispatcher paces against.

// self
use crate::_prelude::*;

/// Boxed future returned by [`Clock::sleep_until`].
pub type ClockFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Monotonic time source used to space out call starts.
pub trait Clock
where
	Self: Send + Sync,
{
	/// Returns the current instant.
	fn now(&self) -> Instant;

	/// Resolves once `deadline` has been reached.
	fn sleep_until(&self, deadline: Instant) -> ClockFuture;
}

/// Wall-clock time via the Tokio timer; honors `tokio::time::pause` in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;
impl Clock for TokioClock {
	fn now(&self) -> Instant {
		Instant::now()
	}

	fn sleep_until(&self, deadline: Instant) -> ClockFuture {
		Box::pin(tokio::time::sleep_until(deadline))
	}
}

/// Virtual clock whose sleeps complete immediately by jumping time forward.
///
/// Time only moves through [`ManualClock::advance`] or a [`Clock::sleep_until`] call, so
/// schedules driven by it are fully deterministic.
#[derive(Clone, Debug)]
pub struct ManualClock {
	origin: Instant,
	elapsed: Arc<Mutex<Duration>>,
}
impl ManualClock {
	/// Creates a clock anchored at the current instant.
	pub fn new() -> Self {
		Self { origin: Instant::now(), elapsed: Default::default() }
	}

	/// Moves time forward by `by`.
	pub fn advance(&self, by: Duration) {
		*self.elapsed.lock() += by;
	}

	/// Returns the virtual time elapsed since construction.
	pub fn elapsed(&self) -> Duration {
		*self.elapsed.lock()
	}

	/// Returns the instant the clock was anchored at.
	pub fn origin(&self) -> Instant {
		self.origin
	}
}
impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}
impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.origin + self.elapsed()
	}

	fn sleep_until(&self, deadline: Instant) -> ClockFuture {
		let target = deadline.saturating_duration_since(self.origin);
		let mut elapsed = self.elapsed.lock();

		if target > *elapsed {
			*elapsed = target;
		}

		Box::pin(std::future::ready(()))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn manual_clock_jumps_to_deadline() {
		let clock = ManualClock::new();
		let deadline = clock.now() + Duration::from_millis(150);

		clock.sleep_until(deadline).await;

		assert_eq!(clock.now(), deadline);
		assert_eq!(clock.elapsed(), Duration::from_millis(150));
	}

	#[tokio::test]
	async fn manual_clock_never_moves_backwards() {
		let clock = ManualClock::new();

		clock.advance(Duration::from_millis(500));
		clock.sleep_until(clock.origin() + Duration::from_millis(100)).await;

		assert_eq!(clock.elapsed(), Duration::from_millis(500));
	}

	#[tokio::test(start_paused = true)]
	async fn tokio_clock_follows_paused_time() {
		let clock = TokioClock;
		let start = clock.now();

		clock.sleep_until(start + Duration::from_millis(150)).await;

		assert!(clock.now() - start >= Duration::from_millis(150));
	}
}
