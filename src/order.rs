use std::{fmt, str::FromStr};

use serial_dotstar_shared::BYTES_PER_LED;

use crate::{Error, Result};

/// Where red, green and blue go inside an LED record.
///
/// Offsets are relative to the start of the record, offset 0 is the brightness byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelOrder {
	r: usize,
	g: usize,
	b: usize,
}

impl ChannelOrder {
	/// Blue, green, red: what most DotStar strips expect.
	pub const BGR: ChannelOrder = ChannelOrder { r: 3, g: 2, b: 1 };
	pub const RGB: ChannelOrder = ChannelOrder { r: 1, g: 2, b: 3 };

	/// Parses a permutation of `r`, `g` and `b`, in any case.
	pub fn parse(order: &str) -> Result<Self> {
		let lower = order.to_ascii_lowercase();
		let position = |channel: char| lower.find(channel);

		let (Some(r), Some(g), Some(b)) = (position('r'), position('g'), position('b')) else {
			return Err(Error::MissingChannels(order.to_string()));
		};

		if order.len() != BYTES_PER_LED - 1 {
			return Err(Error::InvalidOrder(order.to_string()));
		}

		// +1 to skip the brightness byte
		Ok(Self { r: r + 1, g: g + 1, b: b + 1 })
	}

	pub fn red(&self) -> usize {
		self.r
	}

	pub fn green(&self) -> usize {
		self.g
	}

	pub fn blue(&self) -> usize {
		self.b
	}
}

impl Default for ChannelOrder {
	fn default() -> Self {
		Self::BGR
	}
}

impl FromStr for ChannelOrder {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}

impl fmt::Display for ChannelOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut letters = ['?'; 3];
		letters[self.r - 1] = 'r';
		letters[self.g - 1] = 'g';
		letters[self.b - 1] = 'b';
		letters.iter().try_for_each(|c| write!(f, "{c}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_bgr() {
		let order = ChannelOrder::default();
		assert_eq!((order.blue(), order.green(), order.red()), (1, 2, 3));
		assert_eq!(order, ChannelOrder::parse("bgr").unwrap());
	}

	#[test]
	fn parses_any_case() {
		assert_eq!(ChannelOrder::parse("RGB").unwrap(), ChannelOrder::RGB);
		let grb: ChannelOrder = "gRb".parse().unwrap();
		assert_eq!((grb.green(), grb.red(), grb.blue()), (1, 2, 3));
	}

	#[test]
	fn missing_letters() {
		assert!(matches!(ChannelOrder::parse("rg"), Err(Error::MissingChannels(_))));
		assert!(matches!(ChannelOrder::parse("rrg"), Err(Error::MissingChannels(_))));
		assert!(matches!(ChannelOrder::parse(""), Err(Error::MissingChannels(_))));
	}

	#[test]
	fn extra_characters() {
		assert!(matches!(ChannelOrder::parse("rgbw"), Err(Error::InvalidOrder(_))));
		assert!(matches!(ChannelOrder::parse(" rgb"), Err(Error::InvalidOrder(_))));
		assert!(matches!(ChannelOrder::parse("bbgr"), Err(Error::InvalidOrder(_))));
	}

	#[test]
	fn displays_canonical_letters() {
		assert_eq!(ChannelOrder::default().to_string(), "bgr");
		assert_eq!("GbR".parse::<ChannelOrder>().unwrap().to_string(), "gbr");
	}
}
