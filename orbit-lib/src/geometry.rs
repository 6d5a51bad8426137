use std::f64::consts::TAU;

use embedded_graphics::{prelude::Point, primitives::Rectangle};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Fixed-point angle of one full turn. Angle 0 points up, angles grow clockwise.
pub const FULL_TURN: i32 = 0x10000;

/// Wall-clock time as shown on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
	hour: u8,
	minute: u8,
	second: u8,
}

impl ClockTime {
	pub const MIDNIGHT: ClockTime = ClockTime {
		hour: 0,
		minute: 0,
		second: 0,
	};

	pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return None;
		}
		Some(ClockTime { hour, minute, second })
	}

	/// Parses `HH:MM:SS` or `HH:MM`.
	pub fn parse(s: &str) -> Option<Self> {
		let mut parts = s.trim().split(':').map(|x| x.parse::<u8>().ok());
		let hour = parts.next()??;
		let minute = parts.next()??;
		let second = match parts.next() {
			Some(x) => x?,
			None => 0,
		};
		if parts.next().is_some() {
			return None;
		}
		Self::new(hour, minute, second)
	}

	pub fn hour(&self) -> u8 {
		self.hour
	}

	pub fn minute(&self) -> u8 {
		self.minute
	}

	pub fn second(&self) -> u8 {
		self.second
	}

	pub fn seconds_of_day(&self) -> u32 {
		self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
	}

	/// Time `secs` seconds later, wrapping at midnight.
	pub fn plus_seconds(&self, secs: u32) -> Self {
		let total = (self.seconds_of_day() + secs % 86400) % 86400;
		ClockTime {
			hour: (total / 3600) as u8,
			minute: (total / 60 % 60) as u8,
			second: (total % 60) as u8,
		}
	}
}

impl From<OffsetDateTime> for ClockTime {
	fn from(t: OffsetDateTime) -> Self {
		ClockTime {
			hour: t.hour(),
			minute: t.minute(),
			second: t.second(),
		}
	}
}

impl From<PrimitiveDateTime> for ClockTime {
	fn from(t: PrimitiveDateTime) -> Self {
		ClockTime {
			hour: t.hour(),
			minute: t.minute(),
			second: t.second(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAngles {
	pub hour: i32,
	pub minute: i32,
	pub second: i32,
	pub moon: i32,
}

impl HandAngles {
	pub fn at(time: ClockTime) -> Self {
		let (h, m, s) = (time.hour as i32, time.minute as i32, time.second as i32);
		let second = FULL_TURN * s / 60;
		// minute and hour creep with the smaller unit
		let minute = FULL_TURN * m / 60 + second / 60;
		let hour = FULL_TURN * (h % 12) / 12 + minute / 12;
		// three orbits per minute
		let moon = FULL_TURN * ((s * 3) % 60) / 60;
		HandAngles {
			hour,
			minute,
			second,
			moon,
		}
	}
}

/// Radius unit for a surface of the given bounds.
pub fn spacing(bounds: &Rectangle) -> i32 {
	bounds.size.width as i32 / 7
}

/// Geometric center, rounding towards the top left corner.
pub fn centre(bounds: &Rectangle) -> Point {
	bounds.top_left + Point::new(bounds.size.width as i32 / 2, bounds.size.height as i32 / 2)
}

/// Projects `angle` at distance `radius`, truncating toward zero.
pub fn offset(angle: i32, radius: f64) -> Point {
	let a = angle as f64 * TAU / FULL_TURN as f64;
	Point::new((a.sin() * radius) as i32, (-a.cos() * radius) as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPositions {
	pub hour: Point,
	pub minute: Point,
	pub second: Point,
	/// Anchored on `hour`, not on the face centre.
	pub moon: Point,
}

impl HandPositions {
	pub fn compute(time: ClockTime, bounds: &Rectangle) -> Self {
		Self::from_angles(HandAngles::at(time), bounds)
	}

	pub fn from_angles(angles: HandAngles, bounds: &Rectangle) -> Self {
		let c = centre(bounds);
		let unit = spacing(bounds) as f64;
		let hour = c + offset(angles.hour, unit * 3.0);
		HandPositions {
			hour,
			minute: c + offset(angles.minute, unit * 2.0),
			second: c + offset(angles.second, unit),
			moon: hour + offset(angles.moon, unit * 0.5),
		}
	}
}
