use std::{cell::Cell, time::Instant};

use time::OffsetDateTime;
use time_tz::{OffsetDateTimeExt, Tz, timezones};

use crate::ClockTime;

pub trait Clock {
	fn now(&self) -> ClockTime;
}

/// Wall clock in a fixed timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
	tz: &'static Tz,
}

impl Default for SystemClock {
	fn default() -> Self {
		SystemClock::new(timezones::db::europe::BERLIN)
	}
}

impl SystemClock {
	pub fn new(tz: &'static Tz) -> Self {
		SystemClock { tz }
	}

	/// Looks up an IANA timezone name, e.g. `Europe/Berlin`.
	pub fn by_name(name: &str) -> Option<Self> {
		timezones::get_by_name(name).map(Self::new)
	}
}

impl Clock for SystemClock {
	fn now(&self) -> ClockTime {
		OffsetDateTime::now_utc().to_timezone(self.tz).into()
	}
}

/// Starts at a given time and runs at real speed from there.
#[derive(Debug, Clone, Copy)]
pub struct RunningClock {
	start: ClockTime,
	origin: Instant,
}

impl RunningClock {
	pub fn new(start: ClockTime) -> Self {
		RunningClock {
			start,
			origin: Instant::now(),
		}
	}
}

impl Clock for RunningClock {
	fn now(&self) -> ClockTime {
		self.start.plus_seconds(self.origin.elapsed().as_secs() as u32)
	}
}

/// Only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
	time: Cell<ClockTime>,
}

impl FixedClock {
	pub fn new(time: ClockTime) -> Self {
		FixedClock { time: Cell::new(time) }
	}

	pub fn advance(&self, secs: u32) {
		self.time.set(self.time.get().plus_seconds(secs));
	}
}

impl Clock for FixedClock {
	fn now(&self) -> ClockTime {
		self.time.get()
	}
}
