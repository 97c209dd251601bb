//! tmstr - timestamp strings with an adjustable format and sub-second digits.
//!
//! A format specification is a zone prefix, `L` for local time or `U` for
//! UTC, followed by a strftime pattern. Dots written directly after the
//! first decimal point in the output are replaced by digits of the current
//! nanosecond count:
//!
//! ```
//! let mut formatter = tmstr::Formatter::with_format("L%F %T.......").unwrap();
//! let stamp = formatter.now().unwrap(); // e.g. "2024-05-11 14:33:34.123456"
//! assert_eq!(stamp.len(), 26);
//! ```
//!
//! `%Z` renders `UTC` for `U` formats and the host's numeric offset, such as
//! `+02:00`, for `L` formats; zone abbreviations like `EDT` are not available.
//!
//! The free functions [`now`], [`render`] and [`set_format`] share one
//! process-wide formatter and report failures with [`ERROR_SENTINEL`].

use std::sync::Mutex;

use lazy_static::lazy_static;

pub mod clock;
pub mod formatter;

pub use clock::{Clock, FixedClock, Instant, SystemClock};
pub use formatter::error::TimestampError;
pub use formatter::{Formatter, Zone};

/// e.g. "Thu Apr 17 09:39:20 +02:00 2025".
/// With the `L` prefix `%Z` is the numeric UTC offset, not a zone abbreviation.
pub const DEFAULT_FORMAT: &str = "L%a %b %d %H:%M:%S %Z %Y";
/// e.g. "2024-05-11 14:33:34"
pub const SORTABLE_FORMAT: &str = "L%F %T";
/// Returned in place of a timestamp by the process-wide functions
pub const ERROR_SENTINEL: &str = "*** ERROR in tmstr_r()";

lazy_static! {
	static ref GLOBAL: Mutex<Formatter> = Mutex::new(Formatter::new());
}

/// Current time in the process-wide format, or `ERROR_SENTINEL`
pub fn now() -> String {
	match GLOBAL.lock() {
		Ok(mut formatter) => formatter.now_or_sentinel().to_owned(),
		Err(_) => ERROR_SENTINEL.to_owned()
	}
}

/// Render the process-wide format into `buf`, returning it or `ERROR_SENTINEL`
pub fn render(buf: &mut String, capacity: usize) -> &str {
	let formatter = match GLOBAL.lock() {
		Ok(f) => f,
		Err(_) => return ERROR_SENTINEL
	};
	formatter.render(buf, capacity).unwrap_or(ERROR_SENTINEL)
}

/// Replace the process-wide format.
/// Returns the recommended buffer size, or 0 if the format is unusable.
pub fn set_format(spec: &str) -> usize {
	match GLOBAL.lock() {
		Ok(mut formatter) => formatter.set_format(spec).unwrap_or(0),
		Err(_) => 0
	}
}
