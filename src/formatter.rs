mod fraction;
mod spec;
pub mod error;

pub use spec::Zone;

use tracing::{event, Level};

use crate::clock::{Clock, SystemClock};
use crate::{TimestampError, DEFAULT_FORMAT, ERROR_SENTINEL};

/// Renders the current time according to a format specification:
/// a zone prefix ('L' local, 'U' UTC) followed by a strftime pattern.
///
/// The first '.' of the rendered text is a decimal point, and every '.'
/// directly after it becomes a digit of the current nanosecond count, so
/// `"L%T...."` renders something like `09:39:20.123`.
#[derive(Debug)]
pub struct Formatter<C: Clock = SystemClock> {
	spec: String,
	recommended_len: usize, // 0 while the format is unusable
	probe_error: Option<TimestampError>,
	buf: String,
	buf_len: usize, // Recommended length the buffer was last sized for
	clock: C
}

impl Formatter<SystemClock> {
	/// A formatter reading the system clock, configured with `DEFAULT_FORMAT`
	pub fn new() -> Self {
		Self::with_clock(SystemClock)
	}

	pub fn with_format(spec: &str) -> Result<Self, TimestampError> {
		Self::with_format_and_clock(spec, SystemClock)
	}
}

impl Default for Formatter<SystemClock> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Clock> Formatter<C> {
	pub fn with_clock(clock: C) -> Self {
		let mut formatter = Self::unconfigured(clock);
		// A failed probe leaves recommended_len at 0, which now() reports
		let _ = formatter.set_format(DEFAULT_FORMAT);
		formatter
	}

	pub fn with_format_and_clock(spec: &str, clock: C) -> Result<Self, TimestampError> {
		let mut formatter = Self::unconfigured(clock);
		formatter.set_format(spec)?;
		Ok(formatter)
	}

	fn unconfigured(clock: C) -> Self {
		Formatter {
			spec: String::new(),
			recommended_len: 0,
			probe_error: None,
			buf: String::new(),
			buf_len: 0,
			clock
		}
	}

	/// Replace the format specification and measure it with a throwaway render.
	///
	/// The new format is stored even when the probe fails; it then stays
	/// unusable (every `now()` fails) until a working format is set.
	/// Returns the recommended buffer size: the probed length plus 9.
	pub fn set_format(&mut self, spec: &str) -> Result<usize, TimestampError> {
		self.spec = spec.to_owned();
		self.recommended_len = 0;
		match self.probe() {
			Ok(measured) => {
				self.recommended_len = measured + 9;
				self.probe_error = None;
				event!(Level::DEBUG, "Timestamp format set to {:?} ({} bytes recommended)", spec, self.recommended_len);
				Ok(self.recommended_len)
			},
			Err(e) => {
				event!(Level::WARN, "Unusable timestamp format {:?}: {}", spec, e);
				self.probe_error = Some(e.clone());
				Err(e)
			}
		}
	}

	// Each format character is assumed to expand to at most 3 bytes, plus slack.
	// Wide expansions such as %c can exceed this and are rejected.
	fn probe(&self) -> Result<usize, TimestampError> {
		let capacity = 3 * self.spec.len() + 8;
		let mut scratch = String::new();
		scratch.try_reserve_exact(capacity)?;
		render_into(&self.spec, &self.clock, &mut scratch, capacity)?;
		Ok(scratch.len())
	}

	/// The current format specification
	pub fn format(&self) -> &str {
		&self.spec
	}

	/// Buffer size recommended for the current format, 0 if it is unusable
	pub fn recommended_len(&self) -> usize {
		self.recommended_len
	}

	pub fn clock(&self) -> &C {
		&self.clock
	}

	/// Render the current time into a caller-owned buffer.
	///
	/// `capacity` plays the part of a C buffer size: the rendered text plus a
	/// terminator must fit in it. On failure `buf` is left empty.
	pub fn render<'b>(&self, buf: &'b mut String, capacity: usize) -> Result<&'b str, TimestampError> {
		render_into(&self.spec, &self.clock, buf, capacity)?;
		Ok(buf.as_str())
	}

	/// Render the current time into the formatter's own buffer.
	///
	/// The buffer is reallocated only when the recommended size has changed
	/// since it was last sized; strings returned before a format change are
	/// copies the caller must make, the buffer itself is reused.
	pub fn now(&mut self) -> Result<&str, TimestampError> {
		if self.recommended_len == 0 {
			return Err(self.probe_error.clone()
				.unwrap_or_else(|| TimestampError::InvalidArgument("no usable format".into())));
		}
		if self.buf_len != self.recommended_len {
			let mut buf = String::new();
			buf.try_reserve_exact(self.recommended_len)?;
			event!(Level::TRACE, "Timestamp buffer resized from {} to {} bytes", self.buf_len, self.recommended_len);
			self.buf = buf;
			self.buf_len = self.recommended_len;
		}

		if let Err(e) = render_into(&self.spec, &self.clock, &mut self.buf, self.buf_len) {
			event!(Level::DEBUG, "Failed to render timestamp: {}", e);
			return Err(e);
		}
		Ok(self.buf.as_str())
	}

	/// Like `now()`, but any failure yields `ERROR_SENTINEL`
	pub fn now_or_sentinel(&mut self) -> &str {
		match self.now() {
			Ok(s) => s,
			Err(_) => ERROR_SENTINEL
		}
	}
}

fn render_into<C: Clock>(spec: &str, clock: &C, buf: &mut String, capacity: usize) -> Result<(), TimestampError> {
	buf.clear();
	let rendered = try_render(spec, clock, buf, capacity);
	if rendered.is_err() {
		buf.clear();
	}
	rendered
}

fn try_render<C: Clock>(spec: &str, clock: &C, buf: &mut String, capacity: usize) -> Result<(), TimestampError> {
	if capacity == 0 {
		return Err(TimestampError::InvalidArgument("buffer capacity is zero".into()));
	}
	let instant = clock.now()?;
	let (zone, pattern) = spec::split(spec)?;
	spec::render_pattern(zone, pattern, instant, buf)?;

	// Room is needed for the text and a terminator
	if buf.is_empty() || buf.len() + 1 > capacity {
		return Err(TimestampError::Capacity { needed: buf.len(), capacity });
	}
	fraction::substitute(buf, instant.nanos);
	Ok(())
}
