use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("missing value for {0}")]
	MissingValue(String),
	#[error("unknown flag {0}")]
	UnknownFlag(String),
	#[error("invalid value for {key}: {value}")]
	InvalidValue { key: String, value: String },
	#[error("unknown timezone {0}")]
	UnknownTimezone(String),
	#[error("invalid time {0}, expected HH:MM:SS")]
	InvalidTime(String),
	#[error("config file: {0}")]
	Io(#[from] std::io::Error),
	#[error("config file: {0}")]
	Json(#[from] serde_json::Error),
	#[error("writing frame: {0}")]
	Image(#[from] image::ImageError),
	#[cfg(feature = "pc")]
	#[error("creating window: {0}")]
	Window(#[from] winit::error::OsError),
	#[cfg(feature = "pc")]
	#[error("window surface: {0}")]
	Surface(#[from] softbuffer::SoftBufferError),
	#[cfg(not(feature = "pc"))]
	#[error("no display available, build with the pc feature or pass --frames")]
	NoDisplay,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
