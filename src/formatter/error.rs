use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::Display;

use crate::ERROR_SENTINEL;

/// A failure to produce a timestamp string.
/// Every variant displays with the error sentinel text as its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
	/// Zero-capacity buffer
	InvalidArgument(String),
	/// The format's first character is neither `L` nor `U` (None for an empty format)
	InvalidPrefix(Option<char>),
	/// The strftime pattern contains an unknown or malformed specifier
	InvalidPattern(String),
	/// The wall clock could not be read or converted to calendar time
	Clock(String),
	/// Rendered output was empty or did not fit the buffer
	Capacity { needed: usize, capacity: usize },
	Allocation(TryReserveError)
}

impl Display for TimestampError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidArgument(e) => write!(f, "{}: invalid argument: {}", ERROR_SENTINEL, e),
			Self::InvalidPrefix(Some(c)) => write!(f, "{}: invalid format prefix '{}' (expected 'L' or 'U')", ERROR_SENTINEL, c),
			Self::InvalidPrefix(None) => write!(f, "{}: empty format", ERROR_SENTINEL),
			Self::InvalidPattern(p) => write!(f, "{}: invalid strftime pattern \"{}\"", ERROR_SENTINEL, p),
			Self::Clock(e) => write!(f, "{}: clock unavailable: {}", ERROR_SENTINEL, e),
			Self::Capacity { needed: 0, .. } => write!(f, "{}: pattern rendered empty output", ERROR_SENTINEL),
			Self::Capacity { needed, capacity } => {
				write!(f, "{}: rendered {} bytes into a buffer of {}", ERROR_SENTINEL, needed, capacity)
			},
			Self::Allocation(e) => write!(f, "{}: {}", ERROR_SENTINEL, e)
		}
	}
}

impl Error for TimestampError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Allocation(e) => Some(e),
			_ => None
		}
	}
}

impl From<TryReserveError> for TimestampError {
	fn from(e: TryReserveError) -> Self {
		Self::Allocation(e)
	}
}
