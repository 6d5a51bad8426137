use std::{
	num::NonZeroU32,
	time::{Duration, Instant},
};

use frame_output::FrameOutput;
use log::{info, warn};
use orbit_lib::{App, Clock, RunningClock};
use softbuffer::Surface;
use winit::{
	dpi::PhysicalSize,
	event::{Event, WindowEvent},
	event_loop::EventLoop,
	window::WindowBuilder,
};

use crate::{
	config::Config,
	error::{Error, Result},
};

fn non_zero(key: &str, value: u32) -> Result<NonZeroU32> {
	NonZeroU32::new(value).ok_or_else(|| Error::InvalidValue {
		key: key.to_owned(),
		value: value.to_string(),
	})
}

/// Paints pending changes and copies the frame into the window.
fn present(
	surface: &mut Surface,
	app: &mut App<FrameOutput>,
	disp: &mut FrameOutput,
	(width, height): (u32, u32),
	scale: u32,
) -> Result<()> {
	let Ok(_) = app.paint(disp);
	surface.resize(non_zero("width", width)?, non_zero("height", height)?)?;
	let mut buffer = surface.buffer_mut()?;
	disp.blit_xrgb(&mut buffer, scale);
	buffer.present()?;
	Ok(())
}

/// Runs the face in a desktop window until it is closed.
pub fn run(config: Config) -> Result<()> {
	let clock: Box<dyn Clock> = match config.start_time()? {
		Some(start) => Box::new(RunningClock::new(start)),
		None => Box::new(config.clock()?),
	};
	let scale = config.scale;
	let (width, height) = config.window_size()?;
	let interval = Duration::from_millis(config.frame_interval_ms);

	let event_loop = EventLoop::new();
	let window = WindowBuilder::new()
		.with_title("orbit")
		.with_inner_size(PhysicalSize::new(width, height))
		.with_resizable(false)
		.build(&event_loop)?;
	let context = unsafe { softbuffer::Context::new(&window) }?;
	let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;

	let mut disp = FrameOutput::new(config.width, config.height);
	let mut app = App::new(orbit_lib::OrbitFace::new(config.star_field()));
	app.start(clock.now());

	event_loop.run(move |event, _, control_flow| {
		control_flow.set_wait_until(Instant::now() + interval);

		match event {
			Event::WindowEvent {
				event: WindowEvent::CloseRequested,
				..
			} => {
				info!("close requested");
				app.stop();
				control_flow.set_exit();
			},
			Event::MainEventsCleared => {
				if app.update(clock.now()) {
					window.request_redraw();
				}
			},
			Event::RedrawRequested(window_id) if window_id == window.id() => {
				if let Err(e) = present(&mut surface, &mut app, &mut disp, (width, height), scale) {
					warn!("failed to present frame: {e}");
					app.stop();
					control_flow.set_exit();
				}
			},
			_ => (),
		}
	});
}
