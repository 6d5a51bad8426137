use embedded_graphics::{pixelcolor::Rgb565, prelude::Point};
use frame_output::FrameOutput;
use orbit_lib::{
	App, Clock, ClockTime, Face, FixedClock, HandPositions, OrbitFace, ScatterRng,
	face::{CHROME_YELLOW, DARK_GRAY, LIGHT_GRAY, PICTON_BLUE, RAJAH, YELLOW},
};

fn t(h: u8, m: u8, s: u8) -> ClockTime {
	ClockTime::new(h, m, s).unwrap()
}

#[test]
fn quarter_past_three_on_180_square() {
	let mut frame = FrameOutput::new(180, 180);
	let face = OrbitFace::default();
	let mut rng = ScatterRng::new();
	face.render_background(&mut frame, &mut rng).unwrap();
	face.render_hands(&mut frame, t(3, 15, 30)).unwrap();

	assert_eq!(frame.pixel(Point::new(90, 90)), Some(YELLOW));
	assert_eq!(frame.pixel(Point::new(164, 100)), Some(PICTON_BLUE));
	assert_eq!(frame.pixel(Point::new(139, 92)), Some(RAJAH));
	assert_eq!(frame.pixel(Point::new(90, 115)), Some(CHROME_YELLOW));
	assert_eq!(frame.pixel(Point::new(164, 112)), Some(LIGHT_GRAY));
}

#[test]
fn starfield_is_reproducible() {
	let face = OrbitFace::default();
	let mut a = FrameOutput::new(144, 168);
	let mut b = FrameOutput::new(144, 168);
	face.render_background(&mut a, &mut ScatterRng::new()).unwrap();
	// a generator that has already been used must give the same sky
	let mut used = ScatterRng::with_seed(9999);
	for _ in 0..10 {
		used.advance();
	}
	face.render_background(&mut b, &mut used).unwrap();
	assert_eq!(a.buffer, b.buffer);

	let stars = a.buffer.pixels().filter(|p| {
		let px = p.0;
		Rgb565::new(px[0] >> 3, px[1] >> 2, px[2] >> 3) == DARK_GRAY
	});
	assert!(stars.count() > 50);
}

#[test]
fn first_star_lands_where_the_sequence_says() {
	let mut frame = FrameOutput::new(144, 168);
	OrbitFace::default()
		.render_background(&mut frame, &mut ScatterRng::new())
		.unwrap();
	// reseed 256 -> 874, then 892 % 144 and 482 % 168
	assert_eq!(frame.pixel(Point::new(892 % 144, 482 % 168)), Some(DARK_GRAY));
}

#[test]
fn app_redraws_each_second() {
	let clock = FixedClock::new(t(9, 59, 58));
	let mut frame = FrameOutput::new(144, 168);
	let mut app = App::new(OrbitFace::default());
	app.start(clock.now());
	assert!(app.paint(&mut frame).unwrap());

	for _ in 0..3 {
		clock.advance(1);
		assert!(app.update(clock.now()));
		assert!(app.paint(&mut frame).unwrap());
		let bounds = embedded_graphics::primitives::Rectangle::new(Point::zero(), (144, 168).into());
		let pos = HandPositions::compute(clock.now(), &bounds);
		assert_eq!(frame.pixel(pos.moon), Some(LIGHT_GRAY));
	}
	app.stop();
	clock.advance(1);
	assert!(!app.update(clock.now()));
}
