use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
use log::{debug, info};

use crate::context::{Draw, PaintContext};

pub struct Layer<D: DrawTarget<Color = Rgb565>> {
	id: &'static str,
	paint: Box<dyn Draw<D>>,
}

impl<D: DrawTarget<Color = Rgb565>> Layer<D> {
	pub fn new(id: &'static str, paint: Box<dyn Draw<D>>) -> Self {
		Layer { id, paint }
	}

	pub fn id(&self) -> &'static str {
		self.id
	}
}

/// Callbacks run when a window is shown or hidden.
pub trait WindowHandlers<D: DrawTarget<Color = Rgb565>> {
	fn load(&mut self, window: &mut Window<D>);
	fn unload(&mut self, window: &mut Window<D>);
}

/// Stack of layers painted bottom to top whenever the window is dirty.
pub struct Window<D: DrawTarget<Color = Rgb565>> {
	layers: Vec<Layer<D>>,
	handlers: Option<Box<dyn WindowHandlers<D>>>,
	dirty: bool,
	loaded: bool,
}

impl<D: DrawTarget<Color = Rgb565>> Default for Window<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: DrawTarget<Color = Rgb565>> Window<D> {
	pub fn new() -> Self {
		Window {
			layers: vec![],
			handlers: None,
			dirty: false,
			loaded: false,
		}
	}

	pub fn set_handlers(&mut self, handlers: Box<dyn WindowHandlers<D>>) {
		self.handlers = Some(handlers);
	}

	pub fn add_layer(&mut self, layer: Layer<D>) {
		debug!("layer added: {}", layer.id);
		self.layers.push(layer);
		self.dirty = true;
	}

	/// Releases all layers, returning how many there were.
	pub fn clear_layers(&mut self) -> usize {
		let count = self.layers.len();
		self.layers.clear();
		count
	}

	pub fn layer_ids(&self) -> Vec<&'static str> {
		self.layers.iter().map(Layer::id).collect()
	}

	pub fn mark_dirty(&mut self) {
		self.dirty = true;
	}

	pub fn is_dirty(&self) -> bool {
		self.dirty
	}

	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	pub fn load(&mut self) {
		if self.loaded {
			return;
		}
		if let Some(mut handlers) = self.handlers.take() {
			handlers.load(self);
			self.handlers = Some(handlers);
		}
		self.loaded = true;
		self.dirty = true;
		info!("window loaded with {} layers", self.layers.len());
	}

	pub fn unload(&mut self) {
		if !self.loaded {
			return;
		}
		if let Some(mut handlers) = self.handlers.take() {
			handlers.unload(self);
			self.handlers = Some(handlers);
		}
		self.loaded = false;
		self.dirty = false;
		info!("window unloaded");
	}

	/// Paints every layer in order if the window is dirty.
	/// Returns whether anything was painted.
	pub fn render(&mut self, disp: &mut D, ctx: &mut PaintContext) -> Result<bool, D::Error> {
		if !self.dirty || !self.loaded {
			return Ok(false);
		}
		for layer in &self.layers {
			layer.paint.draw(disp, ctx)?;
		}
		self.dirty = false;
		Ok(true)
	}
}
