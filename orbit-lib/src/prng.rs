use embedded_graphics::{prelude::Point, primitives::Rectangle};

/// State the generator starts from before the first reseed.
pub const DEFAULT_STATE: i64 = 100;

/// Small linear congruential generator used to scatter background stars.
///
/// The output is low quality but fully reproducible: reseeding with the same
/// value always yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterRng {
	state: i64,
}

impl Default for ScatterRng {
	fn default() -> Self {
		Self::new()
	}
}

impl ScatterRng {
	pub const fn new() -> Self {
		ScatterRng { state: DEFAULT_STATE }
	}

	pub const fn with_seed(seed: i64) -> Self {
		ScatterRng { state: seed }
	}

	pub fn state(&self) -> i64 {
		self.state
	}

	/// Returns a value in `0..1000`.
	/// A positive `reseed` replaces the state before stepping.
	pub fn next(&mut self, reseed: i64) -> u16 {
		if reseed > 0 {
			self.state = reseed;
		}
		let mixed = self.state.wrapping_mul(214013).wrapping_add(2531011);
		// logical shift, then keep 15 bits
		self.state = ((mixed as u64 >> 16) & 32767) as i64;
		(self.state % 1000) as u16
	}

	pub fn advance(&mut self) -> u16 {
		self.next(0)
	}

	/// Draws `count` points inside `bounds`, x before y for each point.
	pub fn scatter(&mut self, bounds: &Rectangle, count: usize) -> Vec<Point> {
		let (w, h) = (bounds.size.width, bounds.size.height);
		if w == 0 || h == 0 {
			return vec![];
		}
		(0..count)
			.map(|_| {
				let x = self.advance() as u32 % w;
				let y = self.advance() as u32 % h;
				bounds.top_left + Point::new(x as i32, y as i32)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use embedded_graphics::prelude::Size;
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn reseed_256_sequence() {
		let mut rng = ScatterRng::new();
		assert_eq!(rng.next(256), 874);
		let rest: Vec<_> = (0..5).map(|_| rng.advance()).collect();
		assert_eq!(rest, [892, 482, 2, 974, 750]);
	}

	#[test]
	fn default_state_sequence() {
		let mut rng = ScatterRng::new();
		assert_eq!(rng.state(), DEFAULT_STATE);
		assert_eq!([rng.advance(), rng.advance(), rng.advance()], [365, 230, 55]);
	}

	#[test]
	fn reseed_restarts_sequence() {
		let mut rng = ScatterRng::new();
		let first: Vec<_> = std::iter::once(rng.next(256)).chain((0..3).map(|_| rng.advance())).collect();
		for _ in 0..17 {
			rng.advance();
		}
		let second: Vec<_> = std::iter::once(rng.next(256)).chain((0..3).map(|_| rng.advance())).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn negative_argument_does_not_reseed() {
		let mut a = ScatterRng::with_seed(42);
		let mut b = ScatterRng::with_seed(42);
		assert_eq!(a.next(-5), b.next(0));
		assert_eq!(a, b);
	}

	#[test]
	fn scatter_stays_in_bounds() {
		let mut rng = ScatterRng::new();
		rng.next(256);
		let bounds = Rectangle::new(Point::new(10, 20), Size::new(144, 168));
		let points = rng.scatter(&bounds, 100);
		assert_eq!(points.len(), 100);
		assert!(points.iter().all(|p| bounds.contains(*p)));
	}

	#[test]
	fn scatter_empty_bounds() {
		let mut rng = ScatterRng::new();
		let before = rng.clone();
		assert!(rng.scatter(&Rectangle::new(Point::zero(), Size::new(0, 50)), 100).is_empty());
		assert_eq!(rng, before);
	}

	proptest! {
		#[test]
		fn output_below_1000(seed in any::<i64>(), steps in 0usize..64) {
			let mut rng = ScatterRng::new();
			prop_assert!(rng.next(seed) < 1000);
			for _ in 0..steps {
				prop_assert!(rng.advance() < 1000);
			}
		}

		#[test]
		fn state_is_15_bits(seed in any::<i64>()) {
			let mut rng = ScatterRng::new();
			rng.next(seed);
			prop_assert!((0..=32767).contains(&rng.state()));
		}
	}
}
