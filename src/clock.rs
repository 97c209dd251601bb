use std::time::{SystemTime, UNIX_EPOCH};

use crate::TimestampError;

/// A point in wall-clock time: seconds since the Unix epoch plus nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
	pub secs: i64,
	pub nanos: u32 // Always < 1_000_000_000
}

impl Instant {
	pub fn new(secs: i64, nanos: u32) -> Self {
		Instant {
			secs: secs.saturating_add(i64::from(nanos / 1_000_000_000)),
			nanos: nanos % 1_000_000_000
		}
	}
}

/// Source of the current time used when rendering timestamps
pub trait Clock {
	fn now(&self) -> Result<Instant, TimestampError>;
}

/// The host's wall clock, read at nanosecond resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Result<Instant, TimestampError> {
		let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)
			.map_err(|e| TimestampError::Clock(e.to_string()))?;
		let secs = i64::try_from(since_epoch.as_secs())
			.map_err(|e| TimestampError::Clock(e.to_string()))?;
		Ok(Instant::new(secs, since_epoch.subsec_nanos()))
	}
}

/// A clock stopped at a single instant.
/// Makes rendering deterministic, mostly useful in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
	fn now(&self) -> Result<Instant, TimestampError> {
		Ok(self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn system_clock_is_after_2024() {
		let now = SystemClock.now().unwrap();
		assert!(now.secs > 1_704_067_200);
		assert!(now.nanos < 1_000_000_000);
	}

	#[test]
	fn instant_normalizes_nanos() {
		assert_eq!(Instant::new(10, 1_500_000_000), Instant { secs: 11, nanos: 500_000_000 });
	}

	#[test]
	fn instant_saturates_at_max_seconds() {
		assert_eq!(Instant::new(i64::MAX, 1_500_000_000), Instant { secs: i64::MAX, nanos: 500_000_000 });
	}

	#[test]
	fn fixed_clock_does_not_move() {
		let clock = FixedClock(Instant::new(42, 7));
		assert_eq!(clock.now().unwrap(), clock.now().unwrap());
	}
}
