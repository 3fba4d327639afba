#![no_std]

/// Start frame: four zero bytes before the first LED record.
pub const HEADER_LEN: usize = 4;
/// Every LED record is a brightness byte followed by three colour bytes.
pub const BYTES_PER_LED: usize = 4;

/// The top 3 bits of every brightness byte must be set.
pub const BRIGHTNESS_HEADER: u8 = 0xE0;
/// Only the top 5 bits of a luminosity value make it onto the wire.
pub const BRIGHTNESS_SHIFT: u8 = 3;

/// Each LED delays the clock by half a cycle, so 16 LEDs eat one byte of clock edges.
pub const LEDS_PER_FOOTER_BYTE: usize = 16;
pub const FOOTER_PADDING: usize = 2;
pub const FOOTER_FILL: u8 = 0x00;

/// Number of trailing bytes needed to shift the last record through the chain.
pub const fn footer_len(leds: usize) -> usize {
	leds.saturating_sub(1).div_ceil(LEDS_PER_FOOTER_BYTE) + FOOTER_PADDING
}

/// Total size of a frame for `leds` LEDs, header and footer included.
pub const fn frame_len(leds: usize) -> usize {
	HEADER_LEN + BYTES_PER_LED * leds + footer_len(leds)
}

/// Offset of the first byte of the record for the LED at `position`.
pub const fn record_offset(position: usize) -> usize {
	HEADER_LEN + BYTES_PER_LED * position
}

pub const fn brightness_byte(luminosity: u8) -> u8 {
	(luminosity >> BRIGHTNESS_SHIFT) | BRIGHTNESS_HEADER
}
