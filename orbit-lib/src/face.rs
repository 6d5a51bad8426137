use embedded_graphics::{
	Drawable, Pixel,
	pixelcolor::Rgb565,
	prelude::{Dimensions, DrawTarget, Point, Primitive},
	primitives::{Circle, PrimitiveStyle},
};
use log::trace;

use crate::{
	ScatterRng,
	geometry::{ClockTime, HandPositions, centre},
};

// host palette colors, truncated to 5/6/5 bits
pub static BLACK: Rgb565 = Rgb565::new(0, 0, 0);
pub static DARK_GRAY: Rgb565 = Rgb565::new(0b01_010, 0b010_101, 0b01_010);
pub static LIGHT_GRAY: Rgb565 = Rgb565::new(0b10_101, 0b101_010, 0b10_101);
pub static YELLOW: Rgb565 = Rgb565::new(0b11_111, 0b111_111, 0);
pub static PICTON_BLUE: Rgb565 = Rgb565::new(0b01_010, 0b101_010, 0b11_111);
pub static RAJAH: Rgb565 = Rgb565::new(0b11_111, 0b101_010, 0b01_010);
pub static CHROME_YELLOW: Rgb565 = Rgb565::new(0b11_111, 0b101_010, 0);

/// Rendering capability of a watchface.
pub trait Face<D: DrawTarget<Color = Rgb565>> {
	fn render_background(&self, disp: &mut D, rng: &mut ScatterRng) -> Result<(), D::Error>;
	fn render_hands(&self, disp: &mut D, time: ClockTime) -> Result<(), D::Error>;
}

/// A filled disc of `radius` pixels around its centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
	pub color: Rgb565,
	pub radius: u32,
}

impl Dot {
	pub const fn new(color: Rgb565, radius: u32) -> Self {
		Dot { color, radius }
	}

	pub fn draw_at<D: DrawTarget<Color = Rgb565>>(&self, disp: &mut D, centre: Point) -> Result<(), D::Error> {
		Circle::with_center(centre, 2 * self.radius + 1)
			.into_styled(PrimitiveStyle::with_fill(self.color))
			.draw(disp)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub background: Rgb565,
	pub stars: Rgb565,
	pub hub: Dot,
	pub hour: Dot,
	pub minute: Dot,
	pub second: Dot,
	pub moon: Dot,
}

impl Default for Palette {
	fn default() -> Self {
		Palette {
			background: BLACK,
			stars: DARK_GRAY,
			hub: Dot::new(YELLOW, 9),
			hour: Dot::new(PICTON_BLUE, 5),
			minute: Dot::new(RAJAH, 4),
			second: Dot::new(CHROME_YELLOW, 2),
			moon: Dot::new(LIGHT_GRAY, 1),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarField {
	pub count: usize,
	/// Reseed applied before every redraw, must be positive.
	pub seed: i64,
}

impl Default for StarField {
	fn default() -> Self {
		StarField { count: 100, seed: 256 }
	}
}

#[derive(Debug, Clone, Default)]
pub struct OrbitFace {
	pub palette: Palette,
	pub stars: StarField,
}

impl OrbitFace {
	pub fn new(stars: StarField) -> Self {
		OrbitFace {
			palette: Palette::default(),
			stars,
		}
	}
}

impl<D: DrawTarget<Color = Rgb565>> Face<D> for OrbitFace {
	fn render_background(&self, disp: &mut D, rng: &mut ScatterRng) -> Result<(), D::Error> {
		let bounds = disp.bounding_box();
		disp.fill_solid(&bounds, self.palette.background)?;

		rng.next(self.stars.seed);
		let stars = rng.scatter(&bounds, self.stars.count);
		disp.draw_iter(stars.into_iter().map(|p| Pixel(p, self.palette.stars)))?;

		self.palette.hub.draw_at(disp, centre(&bounds))
	}

	fn render_hands(&self, disp: &mut D, time: ClockTime) -> Result<(), D::Error> {
		let bounds = disp.bounding_box();
		self.palette.hub.draw_at(disp, centre(&bounds))?;

		let pos = HandPositions::compute(time, &bounds);
		trace!("hands at {time:?}: {pos:?}");
		// largest first so the small dots stay visible
		self.palette.hour.draw_at(disp, pos.hour)?;
		self.palette.minute.draw_at(disp, pos.minute)?;
		self.palette.second.draw_at(disp, pos.second)?;
		self.palette.moon.draw_at(disp, pos.moon)
	}
}
