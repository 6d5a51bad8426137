//! Orbit watchface: a starfield with four orbiting dots telling the time.
//!
//! Everything renders through [`embedded_graphics::draw_target::DrawTarget`],
//! so the same face runs on a framebuffer, a mock display or real hardware.

pub use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};

pub mod app;
pub mod clock;
mod context;
pub mod face;
pub mod geometry;
mod prng;
pub mod tick;
pub mod window;

pub use app::App;
pub use clock::{Clock, FixedClock, RunningClock, SystemClock};
pub use context::{BackgroundProc, Draw, HandsProc, PaintContext};
pub use face::{Face, OrbitFace, Palette, StarField};
pub use geometry::{ClockTime, FULL_TURN, HandAngles, HandPositions};
pub use prng::ScatterRng;
