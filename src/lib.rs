use std::io;

pub mod colour;
pub mod controller;
pub mod gamma;
pub mod order;

pub use colour::Colour;
pub use controller::SerialDotStar;
pub use gamma::{Gamma, GammaFn, GAMMA_TABLE};
pub use order::ChannelOrder;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("io error: {0}")]
	Io(#[from] io::Error),
	#[error("serial port error: {0}")]
	Serial(#[from] serialport::Error),
	#[error("only {written} of {expected} frame bytes were written")]
	IncompleteWrite { written: usize, expected: usize },
	#[error("channel order \"{0}\" must contain r, g and b")]
	MissingChannels(String),
	#[error("channel order \"{0}\" has characters other than r, g and b")]
	InvalidOrder(String),
	#[error("led count must be greater than zero")]
	InvalidLedCount,
	#[error("invalid hex colour \"{0}\" (expected #RRGGBB or #RRGGBBLL)")]
	InvalidColour(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(feature = "timings")]
pub type WriteResult = std::time::Duration;
#[cfg(not(feature = "timings"))]
pub type WriteResult = ();

/// Strip configuration, fixed once a controller is created.
///
/// The `with_*` steps can be chained; a later step overrides an earlier one.
#[derive(Debug, Clone, Copy)]
pub struct Config {
	pub leds:  usize,
	pub order: ChannelOrder,
	pub gamma: Gamma,
}

impl Config {
	/// Config for `leds` LEDs in bgr order with 2.8 gamma correction.
	pub fn new(leds: usize) -> Self {
		Self {
			leds,
			order: ChannelOrder::default(),
			gamma: Gamma::default(),
		}
	}

	/// Sets the channel order from a string like `"rgb"`.
	pub fn with_order(self, order: &str) -> Result<Self> {
		Ok(self.with_channel_order(order.parse()?))
	}

	pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
		self.order = order;
		self
	}

	pub fn with_gamma(mut self, gamma: Gamma) -> Self {
		self.gamma = gamma;
		self
	}

	/// Replaces the built-in gamma curve with `gamma`.
	pub fn with_gamma_fn(self, gamma: GammaFn) -> Self {
		self.with_gamma(Gamma::Custom(gamma))
	}

	pub fn without_gamma(self) -> Self {
		self.with_gamma(Gamma::Disabled)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::new(30);
		assert_eq!(config.leds, 30);
		assert_eq!(config.order, ChannelOrder::BGR);
		assert!(matches!(config.gamma, Gamma::Table));
	}

	#[test]
	fn last_step_wins() {
		let config = Config::new(8)
			.with_order("rgb")
			.unwrap()
			.without_gamma()
			.with_order("GRB")
			.unwrap();
		assert_eq!(config.order.to_string(), "grb");
		assert!(matches!(config.gamma, Gamma::Disabled));

		let config = Config::new(8).without_gamma().with_gamma(Gamma::Table);
		assert!(matches!(config.gamma, Gamma::Table));
	}

	#[test]
	fn bad_order_is_rejected() {
		assert!(matches!(Config::new(8).with_order("rgbx"), Err(Error::InvalidOrder(_))));
		assert!(matches!(Config::new(8).with_order("xyz"), Err(Error::MissingChannels(_))));
	}
}
