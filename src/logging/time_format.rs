use std::fmt::{self, Write};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use tmstr::{Formatter, ERROR_SENTINEL};

// Log lines carry sortable local timestamps with millisecond digits
const LOG_FORMAT: &str = "L%F %T....";

/// Log timestamps rendered by a tmstr formatter
pub struct Timer(Formatter);

impl FormatTime for Timer {
	fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
		let mut buf = String::new();
		let stamp = self.0.render(&mut buf, self.0.recommended_len()).unwrap_or(ERROR_SENTINEL);
		w.write_str(stamp)
	}
}

// Create a timer using tmstr's log timestamp formatting.
pub fn timer() -> Timer {
	Timer(Formatter::with_format(LOG_FORMAT).unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_millisecond_timestamp() {
		let mut out = String::new();
		timer().format_time(&mut Writer::new(&mut out)).unwrap();
		// YYYY-MM-DD HH:MM:SS.mmm
		assert_eq!(out.len(), 23);
		assert_eq!(&out[19..20], ".");
		assert!(out[20..].bytes().all(|b| b.is_ascii_digit()));
	}
}
