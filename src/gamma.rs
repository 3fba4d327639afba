//! Gamma correction for the colour channels.
//!
//! LEDs respond linearly to their PWM duty cycle while the eye doesn't, so
//! channel values are pushed through a 2.8 gamma curve before they hit the wire.

use crate::colour::Colour;

/// Gamma 2.8, one entry per channel value.
pub static GAMMA_TABLE: [u8; 256] = [
	0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
	0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, //
	1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, //
	2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5, 5, 5, //
	5, 6, 6, 6, 6, 7, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, //
	10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, //
	17, 17, 18, 18, 19, 19, 20, 20, 21, 21, 22, 22, 23, 24, 24, 25, //
	25, 26, 27, 27, 28, 29, 29, 30, 31, 32, 32, 33, 34, 35, 35, 36, //
	37, 38, 39, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 50, //
	51, 52, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 66, 67, 68, //
	69, 70, 72, 73, 74, 75, 77, 78, 79, 81, 82, 83, 85, 86, 87, 89, //
	90, 92, 93, 95, 96, 98, 99, 101, 102, 104, 105, 107, 109, 110, 112, 114, //
	115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142, //
	144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175, //
	177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213, //
	215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255, //
];

/// Function used to replace the built-in correction.
pub type GammaFn = fn(Colour) -> Colour;

/// Applies [`GAMMA_TABLE`] to red, green and blue. Luminosity passes through.
pub fn table_gamma(colour: Colour) -> Colour {
	Colour {
		r: GAMMA_TABLE[usize::from(colour.r)],
		g: GAMMA_TABLE[usize::from(colour.g)],
		b: GAMMA_TABLE[usize::from(colour.b)],
		l: colour.l,
	}
}

/// How colours are corrected before being written into the frame.
#[derive(Debug, Clone, Copy, Default)]
pub enum Gamma {
	/// Channels are written as set.
	Disabled,
	/// The built-in 2.8 curve.
	#[default]
	Table,
	Custom(GammaFn),
}

impl Gamma {
	pub fn apply(self, colour: Colour) -> Colour {
		match self {
			Gamma::Disabled => colour,
			Gamma::Table => table_gamma(colour),
			Gamma::Custom(gamma) => gamma(colour),
		}
	}

	pub fn is_enabled(self) -> bool {
		!matches!(self, Gamma::Disabled)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_endpoints() {
		assert_eq!(GAMMA_TABLE[0], 0);
		assert_eq!(GAMMA_TABLE[255], 255);
	}

	#[test]
	fn table_is_monotonic() {
		assert!(GAMMA_TABLE.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn table_gamma_keeps_luminosity() {
		let corrected = table_gamma(Colour::new(128, 64, 255, 77));
		assert_eq!(corrected, Colour::new(GAMMA_TABLE[128], GAMMA_TABLE[64], 255, 77));
		assert_eq!(corrected.r, 37);
		assert_eq!(corrected.g, 5);
	}

	#[test]
	fn strategies() {
		let colour = Colour::new(100, 150, 200, 9);

		assert_eq!(Gamma::Disabled.apply(colour), colour);
		assert_eq!(Gamma::default().apply(colour), table_gamma(colour));

		let invert: GammaFn = |c: Colour| Colour::new(255 - c.r, 255 - c.g, 255 - c.b, c.l);
		assert_eq!(Gamma::Custom(invert).apply(colour), Colour::new(155, 105, 55, 9));

		assert!(!Gamma::Disabled.is_enabled());
		assert!(Gamma::Table.is_enabled());
	}
}
