use std::{env, process::ExitCode};

use config::Config;
use error::Result;
use log::{error, info};
use orbit_lib::Clock;

mod config;
mod error;
mod headless;
#[cfg(feature = "pc")]
mod simulator;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args: Vec<_> = env::args().skip(1).collect();
	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{e}");
			ExitCode::FAILURE
		},
	}
}

fn run(args: &[String]) -> Result<()> {
	let config = Config::from_args(args)?;
	info!(
		"face {}x{} in {}, {} stars",
		config.width, config.height, config.timezone, config.stars
	);

	if let Some(frames) = config.frames {
		let start = match config.start_time()? {
			Some(start) => start,
			None => config.clock()?.now(),
		};
		let written = headless::render_frames(&config, start, frames)?;
		info!("wrote {} frames to {}", written.len(), config.out.display());
		return Ok(());
	}
	pc_main(config)
}

#[cfg(not(feature = "pc"))]
fn pc_main(_config: Config) -> Result<()> {
	Err(error::Error::NoDisplay)
}

#[cfg(feature = "pc")]
fn pc_main(config: Config) -> Result<()> {
	simulator::run(config)
}
