use std::{fs, path::PathBuf};

use orbit_lib::{ClockTime, StarField, SystemClock};
use serde::Deserialize;

use crate::error::Error;

/// Settings for one run, merged from defaults, an optional JSON file and
/// command line flags, in that order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub width: u32,
	pub height: u32,
	/// Window pixels per face pixel.
	pub scale: u32,
	pub timezone: String,
	/// Start time instead of the wall clock, `HH:MM:SS`.
	pub time: Option<String>,
	pub stars: usize,
	pub star_seed: i64,
	/// Render this many frames to PNG instead of opening a window.
	pub frames: Option<u32>,
	pub out: PathBuf,
	pub frame_interval_ms: u64,
}

impl Default for Config {
	fn default() -> Self {
		let stars = StarField::default();
		Config {
			width: 144,
			height: 168,
			scale: 2,
			timezone: "Europe/Berlin".to_owned(),
			time: None,
			stars: stars.count,
			star_seed: stars.seed,
			frames: None,
			out: PathBuf::from("/tmp"),
			frame_interval_ms: 66,
		}
	}
}

/// Largest window side in physical pixels.
const MAX_WINDOW_SIDE: u32 = 16384;

fn parse<T: std::str::FromStr>(key: &str, val: &str) -> Result<T, Error> {
	val.parse().map_err(|_| Error::InvalidValue {
		key: key.to_owned(),
		value: val.to_owned(),
	})
}

impl Config {
	/// Builds the config from `--key value` pairs (program name excluded).
	pub fn from_args(args: &[String]) -> Result<Self, Error> {
		if args.len() % 2 != 0 {
			return Err(Error::MissingValue(args[args.len() - 1].clone()));
		}
		let mut config = match args.chunks(2).find(|pair| pair[0] == "--config") {
			Some(pair) => Config::from_file(&pair[1])?,
			None => Config::default(),
		};
		for pair in args.chunks_exact(2) {
			let (key, val) = (&pair[0], &pair[1]);
			match key.as_str() {
				"--config" => {},
				"--width" => config.width = parse(key, val)?,
				"--height" => config.height = parse(key, val)?,
				"--scale" => config.scale = parse(key, val)?,
				"--tz" => config.timezone = val.clone(),
				"--time" => config.time = Some(val.clone()),
				"--stars" => config.stars = parse(key, val)?,
				"--star-seed" => config.star_seed = parse(key, val)?,
				"--frames" => config.frames = Some(parse(key, val)?),
				"--out" => config.out = PathBuf::from(val),
				"--interval" => config.frame_interval_ms = parse(key, val)?,
				_ => return Err(Error::UnknownFlag(key.clone())),
			}
		}
		config.validate()?;
		Ok(config)
	}

	pub fn from_file(path: &str) -> Result<Self, Error> {
		let text = fs::read_to_string(path)?;
		Ok(serde_json::from_str(&text)?)
	}

	fn validate(&self) -> Result<(), Error> {
		if self.width == 0 || self.height == 0 {
			return Err(Error::InvalidValue {
				key: "size".to_owned(),
				value: format!("{}x{}", self.width, self.height),
			});
		}
		if self.scale == 0 {
			return Err(Error::InvalidValue {
				key: "scale".to_owned(),
				value: "0".to_owned(),
			});
		}
		self.window_size()?;
		if self.star_seed <= 0 {
			return Err(Error::InvalidValue {
				key: "star_seed".to_owned(),
				value: self.star_seed.to_string(),
			});
		}
		self.clock()?;
		self.start_time()?;
		Ok(())
	}

	/// Window size in physical pixels, `size * scale` on each side.
	pub fn window_size(&self) -> Result<(u32, u32), Error> {
		let side = |key: &str, len: u32| {
			len.checked_mul(self.scale)
				.filter(|&x| x <= MAX_WINDOW_SIDE)
				.ok_or_else(|| Error::InvalidValue {
					key: key.to_owned(),
					value: format!("{len} at scale {}", self.scale),
				})
		};
		Ok((side("width", self.width)?, side("height", self.height)?))
	}

	pub fn clock(&self) -> Result<SystemClock, Error> {
		SystemClock::by_name(&self.timezone).ok_or_else(|| Error::UnknownTimezone(self.timezone.clone()))
	}

	pub fn start_time(&self) -> Result<Option<ClockTime>, Error> {
		self.time
			.as_deref()
			.map(|s| ClockTime::parse(s).ok_or_else(|| Error::InvalidTime(s.to_owned())))
			.transpose()
	}

	pub fn star_field(&self) -> StarField {
		StarField {
			count: self.stars,
			seed: self.star_seed,
		}
	}
}
