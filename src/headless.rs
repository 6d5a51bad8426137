use std::{fs, path::PathBuf};

use frame_output::FrameOutput;
use log::debug;
use orbit_lib::{App, Clock, ClockTime, FixedClock, OrbitFace};

use crate::{config::Config, error::Result};

/// Renders `frames` consecutive seconds starting at `start` into PNG files
/// under the configured output directory.
pub fn render_frames(config: &Config, start: ClockTime, frames: u32) -> Result<Vec<PathBuf>> {
	fs::create_dir_all(&config.out)?;
	let clock = FixedClock::new(start);
	let mut disp = FrameOutput::new(config.width, config.height);
	let mut app = App::new(OrbitFace::new(config.star_field()));
	app.start(clock.now());

	let mut written = Vec::with_capacity(frames as usize);
	for i in 0..frames {
		if i > 0 {
			clock.advance(1);
			app.update(clock.now());
		}
		let Ok(painted) = app.paint(&mut disp);
		let now = clock.now();
		let path = config
			.out
			.join(format!("orbit-{:02}{:02}{:02}.png", now.hour(), now.minute(), now.second()));
		debug!("frame {i} painted={painted} -> {}", path.display());
		disp.save_png(&path)?;
		written.push(path);
	}
	app.stop();
	Ok(written)
}
