use std::{borrow::Borrow, io::Write, time::Duration};
#[cfg(feature = "timings")]
use std::time::Instant;

use serial_dotstar_shared::{brightness_byte, frame_len, record_offset, BYTES_PER_LED, FOOTER_FILL};
use serialport::SerialPort;
use tracing::{debug, info, trace, warn};

use crate::{colour::Colour, Config, Error, Result, WriteResult};

/// A DotStar strip behind a byte sink.
///
/// Colours are encoded into the outgoing frame as soon as they are set, [`SerialDotStar::update`]
/// only has to hand the frame to the sink.
///
/// Not meant to be shared between threads without external locking.
pub struct SerialDotStar<W = Box<dyn SerialPort>> {
	config: Config,
	sink:   W,

	/// Colours as set by the caller, before brightness scaling and gamma correction.
	colours:    Vec<Colour>,
	/// The wire image sent on the next update.
	frame:      Vec<u8>,
	brightness: u8,
}

impl SerialDotStar {
	/// Opens the given serial device and uses it as the sink.
	pub fn open(serial_device: String, config: Config) -> Result<Self> {
		let baud_rate = 921_600;

		let builder = serialport::new(&serial_device, baud_rate).timeout(Duration::from_millis(10));
		let port = builder.open()?;
		info!(device = %serial_device, baud_rate, "opened serial device");

		Self::new(port, config)
	}
}

impl<W: Write> SerialDotStar<W> {
	/// Create a new instance writing to `sink`, with every LED off.
	pub fn new(sink: W, config: Config) -> Result<Self> {
		if config.leds == 0 {
			return Err(Error::InvalidLedCount);
		}

		let mut frame = vec![0u8; frame_len(config.leds)];
		frame[record_offset(config.leds)..].fill(FOOTER_FILL);

		let mut strip = Self {
			config,
			sink,

			colours: vec![Colour::OFF; config.leds],
			frame,
			brightness: 255,
		};
		strip.encode_all();

		debug!(
			leds = config.leds,
			frame_len = strip.frame.len(),
			order = %config.order,
			gamma = ?config.gamma,
			"created dotstar controller"
		);

		Ok(strip)
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn led_count(&self) -> usize {
		self.config.leds
	}

	/// The frame as it will be sent by the next [`SerialDotStar::update`].
	pub fn frame(&self) -> &[u8] {
		&self.frame
	}

	pub fn sink(&self) -> &W {
		&self.sink
	}

	pub fn sink_mut(&mut self) -> &mut W {
		&mut self.sink
	}

	pub fn into_inner(self) -> W {
		self.sink
	}

	/// Sends the frame to the sink in a single write.
	///
	/// A short write is an error, nothing is resent.
	pub fn update(&mut self) -> Result<WriteResult> {
		#[cfg(feature = "timings")]
		let start = Instant::now();

		let expected = self.frame.len();
		trace!(bytes = expected, "sending frame");

		let written = self.sink.write(&self.frame)?;
		if written != expected {
			warn!(written, expected, "sink accepted a partial frame");
			return Err(Error::IncompleteWrite { written, expected });
		}
		self.sink.flush()?;

		#[cfg(feature = "timings")]
		return Ok(start.elapsed());

		#[cfg(not(feature = "timings"))]
		Ok(())
	}

	/// Sets the colour of one LED. Positions past the end of the strip are ignored.
	pub fn set_colour(&mut self, position: usize, colour: Colour) {
		let Some(slot) = self.colours.get_mut(position) else {
			return;
		};

		*slot = colour;
		self.encode(position);
	}

	/// Sets LEDs in order starting at 0, colours beyond the end of the strip are ignored.
	pub fn set_colours<I>(&mut self, colours: I)
	where
		I: IntoIterator,
		I::Item: Borrow<Colour>,
	{
		let leds = self.config.leds;
		for (position, colour) in colours.into_iter().take(leds).enumerate() {
			self.set_colour(position, *colour.borrow());
		}
	}

	/// The colour last set for `position`, or [`Colour::default`] if out of range.
	pub fn get_colour(&self, position: usize) -> Colour {
		self.colours.get(position).copied().unwrap_or_default()
	}

	/// Copy of all colours currently set.
	pub fn snapshot(&self) -> Vec<Colour> {
		self.colours.clone()
	}

	pub fn fill(&mut self, colour: Colour) {
		self.colours.fill(colour);
		self.encode_all();
	}

	/// Turns every LED off. Doesn't send anything.
	pub fn clear(&mut self) {
		self.fill(Colour::OFF);
	}

	/// Scales the luminosity of every LED, 255 leaves them untouched.
	///
	/// Only the top 5 bits reach the strip, so steps smaller than 8 may not be visible.
	pub fn set_global_brightness(&mut self, brightness: u8) {
		self.brightness = brightness;
		self.encode_all();
	}

	pub fn global_brightness(&self) -> u8 {
		self.brightness
	}

	fn encode_all(&mut self) {
		for position in 0..self.config.leds {
			self.encode(position);
		}
	}

	fn encode(&mut self, position: usize) {
		let colour = self.colours[position];

		// taken before gamma so custom corrections can't touch it
		let luminosity = if self.brightness == 255 {
			colour.l
		} else {
			(u16::from(self.brightness) * u16::from(colour.l) / 255) as u8
		};
		let colour = self.config.gamma.apply(colour);

		let order = self.config.order;
		let start = record_offset(position);
		let record = &mut self.frame[start..start + BYTES_PER_LED];

		record[0] = brightness_byte(luminosity);
		record[order.red()] = colour.r;
		record[order.green()] = colour.g;
		record[order.blue()] = colour.b;
	}
}
