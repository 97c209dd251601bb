use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone, Utc};

use crate::clock::Instant;
use crate::TimestampError;

/// Calendar representation selected by a format's first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
	Local, // 'L'
	Utc // 'U'
}

impl Zone {
	pub fn from_prefix(c: char) -> Option<Self> {
		match c {
			'L' => Some(Self::Local),
			'U' => Some(Self::Utc),
			_ => None
		}
	}

	pub fn prefix(&self) -> char {
		match self {
			Self::Local => 'L',
			Self::Utc => 'U'
		}
	}
}

/// Split a format specification into its zone and strftime pattern
pub fn split(spec: &str) -> Result<(Zone, &str), TimestampError> {
	let mut chars = spec.chars();
	let first = chars.next();
	match first.and_then(Zone::from_prefix) {
		Some(zone) => Ok((zone, chars.as_str())),
		None => Err(TimestampError::InvalidPrefix(first))
	}
}

/// Append `pattern` rendered at `instant` in `zone` to `out`
pub fn render_pattern(zone: Zone, pattern: &str, instant: Instant, out: &mut String) -> Result<(), TimestampError> {
	// chrono reports unknown specifiers as Item::Error and fails while writing them
	let items: Vec<Item> = StrftimeItems::new(pattern).collect();
	if items.iter().any(|item| matches!(item, Item::Error)) {
		return Err(TimestampError::InvalidPattern(pattern.into()));
	}

	let utc = Utc.timestamp_opt(instant.secs, instant.nanos).single()
		.ok_or_else(|| TimestampError::Clock(format!("{}s is outside the supported calendar range", instant.secs)))?;
	let written = match zone {
		Zone::Utc => write!(out, "{}", utc.format_with_items(items.iter())),
		Zone::Local => write!(out, "{}", utc.with_timezone(&Local).format_with_items(items.iter()))
	};
	written.map_err(|_| TimestampError::InvalidPattern(pattern.into()))
}

#[cfg(test)]
mod tests {
	use super::*;

	// Thu Apr 17 13:39:20 UTC 2025
	const THURSDAY: i64 = 1_744_897_160;

	#[test]
	fn split_prefix() {
		assert_eq!(split("L%F %T").unwrap(), (Zone::Local, "%F %T"));
		assert_eq!(split("U%T").unwrap(), (Zone::Utc, "%T"));
		assert_eq!(split("U").unwrap(), (Zone::Utc, ""));
		assert_eq!(split("X%T"), Err(TimestampError::InvalidPrefix(Some('X'))));
		assert_eq!(split("l%T"), Err(TimestampError::InvalidPrefix(Some('l'))));
		assert_eq!(split(""), Err(TimestampError::InvalidPrefix(None)));
	}

	#[test]
	fn prefix_round_trips() {
		for zone in [Zone::Local, Zone::Utc] {
			assert_eq!(Zone::from_prefix(zone.prefix()), Some(zone));
		}
	}

	#[test]
	fn renders_utc() {
		let mut out = String::new();
		render_pattern(Zone::Utc, "%a %b %d %H:%M:%S %Z %Y", Instant::new(THURSDAY, 0), &mut out).unwrap();
		assert_eq!(out, "Thu Apr 17 13:39:20 UTC 2025");
	}

	#[test]
	fn renders_local() {
		let mut out = String::new();
		render_pattern(Zone::Local, "%F %T", Instant::new(THURSDAY, 0), &mut out).unwrap();
		let expected = Local.timestamp_opt(THURSDAY, 0).unwrap().format("%F %T").to_string();
		assert_eq!(out, expected);
	}

	#[test]
	fn local_zone_name_is_numeric_offset() {
		let mut out = String::new();
		render_pattern(Zone::Local, "%Z", Instant::new(THURSDAY, 0), &mut out).unwrap();
		let offset = Local.timestamp_opt(THURSDAY, 0).unwrap().offset().to_string();
		assert_eq!(out, offset);
		assert!(out.starts_with('+') || out.starts_with('-'), "{}", out);
	}

	#[test]
	fn rejects_unknown_specifier() {
		let mut out = String::new();
		let err = render_pattern(Zone::Utc, "%F %Q", Instant::new(THURSDAY, 0), &mut out).unwrap_err();
		assert_eq!(err, TimestampError::InvalidPattern("%F %Q".into()));
	}

	#[test]
	fn rejects_out_of_range_instant() {
		let mut out = String::new();
		let err = render_pattern(Zone::Utc, "%F", Instant::new(i64::MAX, 0), &mut out).unwrap_err();
		assert!(matches!(err, TimestampError::Clock(_)));
	}
}
