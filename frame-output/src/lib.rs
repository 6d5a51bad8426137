use std::path::Path;

use embedded_graphics::{
	Pixel,
	pixelcolor::Rgb565,
	prelude::{Dimensions, DrawTarget, Point, RgbColor},
	primitives::Rectangle,
};
use image::{ImageBuffer, ImageResult, Rgba};

/// In-memory frame used by the desktop simulator and the headless renderer.
pub struct FrameOutput {
	pub buffer: ImageBuffer<Rgba<u8>, Vec<u8>>,
}

fn to_rgba(color: Rgb565) -> Rgba<u8> {
	// replicate the high bits so full intensity maps to 0xff
	let r = color.r() << 3 | color.r() >> 2;
	let g = color.g() << 2 | color.g() >> 4;
	let b = color.b() << 3 | color.b() >> 2;
	Rgba([r, g, b, 0xff])
}

impl FrameOutput {
	pub fn new(width: u32, height: u32) -> Self {
		FrameOutput {
			buffer: ImageBuffer::new(width, height),
		}
	}

	pub fn width(&self) -> u32 {
		self.buffer.width()
	}

	pub fn height(&self) -> u32 {
		self.buffer.height()
	}

	fn index(&self, p: Point) -> Option<(u32, u32)> {
		if p.x < 0 || p.y < 0 || p.x as u32 >= self.buffer.width() || p.y as u32 >= self.buffer.height() {
			return None;
		}
		Some((p.x as u32, p.y as u32))
	}

	/// Color at `p`, or `None` outside the frame.
	pub fn pixel(&self, p: Point) -> Option<Rgb565> {
		let (x, y) = self.index(p)?;
		let px = self.buffer.get_pixel(x, y).0;
		Some(Rgb565::new(px[0] >> 3, px[1] >> 2, px[2] >> 3))
	}

	/// Writes the frame as `0x00RRGGBB` words, each pixel repeated `scale`
	/// times in both directions. `out` must hold `width * height * scale²` words.
	pub fn blit_xrgb(&self, out: &mut [u32], scale: u32) {
		let scale = scale.max(1);
		let out_width = self.buffer.width() * scale;
		for (index, word) in out.iter_mut().enumerate() {
			let x = (index as u32 % out_width) / scale;
			let y = (index as u32 / out_width) / scale;
			if y >= self.buffer.height() {
				break;
			}
			let px = self.buffer.get_pixel(x, y).0;
			*word = px[2] as u32 | (px[1] as u32) << 8 | (px[0] as u32) << 16;
		}
	}

	pub fn save_png(&self, path: impl AsRef<Path>) -> ImageResult<()> {
		self.buffer.save(path)
	}
}

impl DrawTarget for FrameOutput {
	type Color = Rgb565;

	type Error = core::convert::Infallible;

	fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
	where
		I: IntoIterator<Item = Pixel<Self::Color>>,
	{
		for Pixel(p, color) in pixels {
			if let Some((x, y)) = self.index(p) {
				self.buffer.put_pixel(x, y, to_rgba(color));
			}
		}
		Ok(())
	}

	fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
		let area = area.intersection(&self.bounding_box());
		let Some(bottom_right) = area.bottom_right() else {
			return Ok(());
		};
		let rgba = to_rgba(color);
		for y in area.top_left.y..=bottom_right.y {
			for x in area.top_left.x..=bottom_right.x {
				self.buffer.put_pixel(x as u32, y as u32, rgba);
			}
		}
		Ok(())
	}
}

impl Dimensions for FrameOutput {
	fn bounding_box(&self) -> Rectangle {
		Rectangle::new(Point::zero(), (self.buffer.width(), self.buffer.height()).into())
	}
}
