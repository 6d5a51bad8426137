use std::rc::Rc;

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
use log::{info, trace};

use crate::{
	ClockTime, Face,
	context::{BackgroundProc, HandsProc, PaintContext},
	tick::{TickService, TimeUnit, TimeUnits},
	window::{Layer, Window, WindowHandlers},
};

pub const BACKGROUND_LAYER: &str = "background";
pub const HANDS_LAYER: &str = "hands";

struct FaceLayers<F> {
	face: Rc<F>,
}

impl<D, F> WindowHandlers<D> for FaceLayers<F>
where
	D: DrawTarget<Color = Rgb565>,
	F: Face<D> + 'static,
{
	fn load(&mut self, window: &mut Window<D>) {
		window.add_layer(Layer::new(BACKGROUND_LAYER, Box::new(BackgroundProc(self.face.clone()))));
		window.add_layer(Layer::new(HANDS_LAYER, Box::new(HandsProc(self.face.clone()))));
	}

	fn unload(&mut self, window: &mut Window<D>) {
		window.clear_layers();
	}
}

/// Watchface application: one window, two layers, redrawn on second ticks.
pub struct App<D: DrawTarget<Color = Rgb565>> {
	window: Window<D>,
	ticks: TickService,
	ctx: PaintContext,
}

impl<D: DrawTarget<Color = Rgb565>> App<D> {
	pub fn new<F: Face<D> + 'static>(face: F) -> Self {
		let mut window = Window::new();
		window.set_handlers(Box::new(FaceLayers { face: Rc::new(face) }));
		App {
			window,
			ticks: TickService::new(),
			ctx: PaintContext::new(ClockTime::MIDNIGHT),
		}
	}

	pub fn start(&mut self, now: ClockTime) {
		self.window.load();
		self.ticks.subscribe(TimeUnit::Second, now);
		self.ctx.time = now;
		info!("watchface started at {:02}:{:02}:{:02}", now.hour(), now.minute(), now.second());
	}

	pub fn stop(&mut self) {
		self.ticks.unsubscribe();
		self.window.unload();
		info!("watchface stopped");
	}

	pub fn is_running(&self) -> bool {
		self.window.is_loaded()
	}

	/// Feeds the clock to the tick service. Returns whether a tick fired.
	pub fn update(&mut self, now: ClockTime) -> bool {
		match self.ticks.poll(now) {
			Some(units) => {
				self.handle_tick(now, units);
				true
			},
			None => false,
		}
	}

	fn handle_tick(&mut self, now: ClockTime, units: TimeUnits) {
		trace!("tick {now:?} {units:?}");
		self.ctx.time = now;
		self.window.mark_dirty();
	}

	/// Paints the window if a redraw is pending.
	pub fn paint(&mut self, disp: &mut D) -> Result<bool, D::Error> {
		self.window.render(disp, &mut self.ctx)
	}

	pub fn window(&self) -> &Window<D> {
		&self.window
	}
}

#[cfg(test)]
mod tests {
	use embedded_graphics::mock_display::MockDisplay;

	use super::*;
	use crate::OrbitFace;

	type Disp = MockDisplay<Rgb565>;

	fn t(h: u8, m: u8, s: u8) -> ClockTime {
		ClockTime::new(h, m, s).unwrap()
	}

	fn disp() -> Disp {
		let mut disp = Disp::new();
		disp.set_allow_overdraw(true);
		disp
	}

	#[test]
	fn start_creates_layers_and_paints() {
		let mut app = App::new(OrbitFace::default());
		assert!(!app.is_running());
		app.start(t(12, 0, 0));
		assert_eq!(app.window().layer_ids(), [BACKGROUND_LAYER, HANDS_LAYER]);
		let mut d = disp();
		assert!(app.paint(&mut d).unwrap());
		assert!(!app.paint(&mut d).unwrap());
	}

	#[test]
	fn redraw_once_per_second() {
		let mut app = App::new(OrbitFace::default());
		app.start(t(12, 0, 0));
		let mut d = disp();
		app.paint(&mut d).unwrap();
		assert!(!app.update(t(12, 0, 0)));
		assert!(!app.paint(&mut d).unwrap());
		assert!(app.update(t(12, 0, 1)));
		assert!(app.paint(&mut d).unwrap());
	}

	#[test]
	fn late_poll_still_redraws() {
		let mut app = App::new(OrbitFace::default());
		app.start(t(12, 0, 0));
		app.paint(&mut disp()).unwrap();
		assert!(!app.window().is_dirty());
		assert!(app.update(t(12, 1, 0)));
		assert!(app.window().is_dirty());
	}

	#[test]
	fn stop_tears_down() {
		let mut app = App::new(OrbitFace::default());
		app.start(t(12, 0, 0));
		app.stop();
		assert!(!app.is_running());
		assert!(app.window().layer_ids().is_empty());
		assert!(!app.update(t(12, 0, 5)));
		assert!(!app.paint(&mut disp()).unwrap());
	}
}
