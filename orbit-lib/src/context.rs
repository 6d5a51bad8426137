use std::rc::Rc;

use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

use crate::{ClockTime, Face, ScatterRng};

/// State handed to every layer paint routine during one render pass.
#[derive(Debug, Clone)]
pub struct PaintContext {
	pub rng: ScatterRng,
	pub time: ClockTime,
}

impl PaintContext {
	pub fn new(time: ClockTime) -> Self {
		PaintContext {
			rng: ScatterRng::new(),
			time,
		}
	}
}

/// Paint routine of a layer.
pub trait Draw<D: DrawTarget<Color = Rgb565>> {
	fn draw(&self, disp: &mut D, ctx: &mut PaintContext) -> Result<(), D::Error>;
}

pub struct BackgroundProc<F>(pub Rc<F>);

impl<D: DrawTarget<Color = Rgb565>, F: Face<D>> Draw<D> for BackgroundProc<F> {
	fn draw(&self, disp: &mut D, ctx: &mut PaintContext) -> Result<(), D::Error> {
		self.0.render_background(disp, &mut ctx.rng)
	}
}

pub struct HandsProc<F>(pub Rc<F>);

impl<D: DrawTarget<Color = Rgb565>, F: Face<D>> Draw<D> for HandsProc<F> {
	fn draw(&self, disp: &mut D, ctx: &mut PaintContext) -> Result<(), D::Error> {
		self.0.render_hands(disp, ctx.time)
	}
}
