use std::{convert::Infallible, fmt, str::FromStr};

use crate::{Error, Result};

/// Colour and luminosity (brightness) of a single LED.
///
/// Luminosity only has 32 levels on the wire, so steps smaller than 8 are invisible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub l: u8,
}

impl Colour {
	/// An unlit LED.
	pub const OFF: Colour = Colour::new(0, 0, 0, 0);
	pub const RED: Colour = Colour::new(255, 0, 0, 255);
	pub const GREEN: Colour = Colour::new(0, 255, 0, 255);
	pub const BLUE: Colour = Colour::new(0, 0, 255, 255);
	pub const WHITE: Colour = Colour::new(255, 255, 255, 255);

	pub const fn new(r: u8, g: u8, b: u8, l: u8) -> Self {
		Self { r, g, b, l }
	}

	/// Parses `#RRGGBB` or `#RRGGBBLL`, never failing.
	///
	/// Any other length gives black at full luminosity. Hex pairs are read left to right
	/// and reading stops at the first pair that isn't valid hex, so the remaining
	/// channels keep their defaults (0, and 255 for luminosity).
	pub fn from_hex(hex: &str) -> Self {
		let mut colour = Self::new(0, 0, 0, 255);

		let pairs = match hex.len() {
			7 => 3,
			9 => 4,
			_ => return colour,
		};

		let bytes = hex.as_bytes();
		if bytes[0] != b'#' {
			return colour;
		}

		for (i, chunk) in bytes[1..].chunks_exact(2).take(pairs).enumerate() {
			let Some(value) = hex_pair(chunk) else {
				break;
			};
			match i {
				0 => colour.r = value,
				1 => colour.g = value,
				2 => colour.b = value,
				_ => colour.l = value,
			}
		}

		colour
	}

	/// Like [`Colour::from_hex`], but rejects anything that isn't well formed.
	pub fn try_from_hex(hex: &str) -> Result<Self> {
		let valid = matches!(hex.len(), 7 | 9)
			&& hex.starts_with('#')
			&& hex[1..].bytes().all(|b| b.is_ascii_hexdigit());

		if !valid {
			return Err(Error::InvalidColour(hex.to_string()));
		}

		Ok(Self::from_hex(hex))
	}

	/// Returns the colour `ratio` of the way from `self` to `target`.
	///
	/// Ratios at or below 0 (and NaN) return `self`, ratios at or above 1 return `target`.
	/// In between every channel, luminosity included, is interpolated and truncated.
	#[must_use]
	pub fn blend(self, target: Colour, ratio: f32) -> Colour {
		if ratio.is_nan() || ratio <= 0.0 {
			return self;
		}
		if ratio >= 1.0 {
			return target;
		}

		let mix = |from: u8, to: u8| ((f32::from(to) - f32::from(from)) * ratio + f32::from(from)) as u8;

		Colour {
			r: mix(self.r, target.r),
			g: mix(self.g, target.g),
			b: mix(self.b, target.b),
			l: mix(self.l, target.l),
		}
	}
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
	let digit = |c: u8| (c as char).to_digit(16);
	let hi = digit(pair[0])?;
	let lo = digit(pair[1])?;
	Some((hi * 16 + lo) as u8)
}

impl fmt::Display for Colour {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"R: {} G: {} B: {} L: {} (#{:02X}{:02X}{:02X}{:02X})",
			self.r, self.g, self.b, self.l, self.r, self.g, self.b, self.l
		)
	}
}

impl FromStr for Colour {
	type Err = Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(Self::from_hex(s))
	}
}
