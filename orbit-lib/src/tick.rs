use log::debug;

use crate::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
	Second,
	Minute,
	Hour,
}

/// Set of clock fields that changed between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeUnits(u8);

impl TimeUnits {
	pub const SECOND: TimeUnits = TimeUnits(1);
	pub const MINUTE: TimeUnits = TimeUnits(2);
	pub const HOUR: TimeUnits = TimeUnits(4);

	/// A change in a coarser unit counts as a change in every finer one.
	pub fn between(prev: ClockTime, now: ClockTime) -> Self {
		if prev.hour() != now.hour() {
			TimeUnits(Self::HOUR.0 | Self::MINUTE.0 | Self::SECOND.0)
		} else if prev.minute() != now.minute() {
			TimeUnits(Self::MINUTE.0 | Self::SECOND.0)
		} else if prev.second() != now.second() {
			Self::SECOND
		} else {
			TimeUnits::default()
		}
	}

	pub fn contains(&self, other: TimeUnits) -> bool {
		self.0 & other.0 == other.0
	}

	pub fn is_empty(&self) -> bool {
		self.0 == 0
	}
}

impl From<TimeUnit> for TimeUnits {
	fn from(unit: TimeUnit) -> Self {
		match unit {
			TimeUnit::Second => TimeUnits::SECOND,
			TimeUnit::Minute => TimeUnits::MINUTE,
			TimeUnit::Hour => TimeUnits::HOUR,
		}
	}
}

/// Turns a polled clock into discrete tick notifications.
#[derive(Debug, Clone, Default)]
pub struct TickService {
	unit: Option<TimeUnit>,
	last: Option<ClockTime>,
}

impl TickService {
	pub fn new() -> Self {
		Self::default()
	}

	/// Ticks fire for every change of `unit` after `now`.
	pub fn subscribe(&mut self, unit: TimeUnit, now: ClockTime) {
		debug!("tick subscription: {unit:?}");
		self.unit = Some(unit);
		self.last = Some(now);
	}

	pub fn unsubscribe(&mut self) {
		if self.unit.take().is_some() {
			debug!("tick subscription removed");
		}
		self.last = None;
	}

	pub fn is_subscribed(&self) -> bool {
		self.unit.is_some()
	}

	/// Returns the changed units if a tick is due.
	pub fn poll(&mut self, now: ClockTime) -> Option<TimeUnits> {
		let unit = self.unit?;
		let last = self.last.replace(now)?;
		let changed = TimeUnits::between(last, now);
		if changed.contains(unit.into()) {
			Some(changed)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn t(h: u8, m: u8, s: u8) -> ClockTime {
		ClockTime::new(h, m, s).unwrap()
	}

	#[test]
	fn unsubscribed_never_fires() {
		let mut ticks = TickService::new();
		assert_eq!(ticks.poll(t(1, 2, 3)), None);
		assert_eq!(ticks.poll(t(1, 2, 4)), None);
	}

	#[test]
	fn second_ticks_once_per_second() {
		let mut ticks = TickService::new();
		ticks.subscribe(TimeUnit::Second, t(1, 2, 3));
		assert_eq!(ticks.poll(t(1, 2, 3)), None);
		assert_eq!(ticks.poll(t(1, 2, 4)), Some(TimeUnits::SECOND));
		assert_eq!(ticks.poll(t(1, 2, 4)), None);
		let rollover = ticks.poll(t(1, 3, 0)).unwrap();
		assert!(rollover.contains(TimeUnits::SECOND));
		assert!(rollover.contains(TimeUnits::MINUTE));
		assert!(!rollover.contains(TimeUnits::HOUR));
	}

	#[test]
	fn second_tick_survives_whole_minute_gap() {
		let mut ticks = TickService::new();
		ticks.subscribe(TimeUnit::Second, t(1, 2, 3));
		let units = ticks.poll(t(1, 3, 3)).unwrap();
		assert!(units.contains(TimeUnits::SECOND));
		assert!(units.contains(TimeUnits::MINUTE));

		ticks.subscribe(TimeUnit::Minute, t(1, 2, 3));
		let units = ticks.poll(t(2, 2, 3)).unwrap();
		assert!(units.contains(TimeUnits::HOUR));
		assert!(units.contains(TimeUnits::MINUTE));
		assert!(units.contains(TimeUnits::SECOND));
	}

	#[test]
	fn minute_subscription_ignores_seconds() {
		let mut ticks = TickService::new();
		ticks.subscribe(TimeUnit::Minute, t(1, 2, 3));
		assert_eq!(ticks.poll(t(1, 2, 30)), None);
		assert!(ticks.poll(t(1, 3, 0)).is_some());
	}

	#[test]
	fn unsubscribe_stops_ticks() {
		let mut ticks = TickService::new();
		ticks.subscribe(TimeUnit::Second, t(1, 2, 3));
		ticks.unsubscribe();
		assert!(!ticks.is_subscribed());
		assert_eq!(ticks.poll(t(1, 2, 9)), None);
	}

	#[test]
	fn same_time_is_empty() {
		assert!(TimeUnits::between(t(5, 5, 5), t(5, 5, 5)).is_empty());
		assert!(TimeUnits::between(t(5, 5, 5), t(6, 5, 5)).contains(TimeUnits::HOUR));
	}
}
