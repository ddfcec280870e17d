//! Date formatting
//!
//! Dates coming from the server are rendered with Spanish locale conventions
//! (`DD/MM/YYYY HH:MM`). Parsing accepts the shapes the backend emits:
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `2024-03-05T14:07:00+01:00` (RFC 3339) | converted to the target zone |
//! | `Tue, 5 Mar 2024 14:07:00 +0100` (RFC 2822) | converted to the target zone |
//! | `2024-03-05T14:07[:00[.123]]`, `2024-03-05 14:07[:00]` | wall-clock time in the target zone |
//! | `2024-03-05` | midnight UTC, converted to the target zone |

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// Output format used by [`format_date`].
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Placeholder returned for input that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S%.f",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S%.f",
	"%Y-%m-%d %H:%M",
];

/// Formats a date-like string in the local time zone.
///
/// Returns [`INVALID_DATE`] when the input cannot be parsed.
pub fn format_date(input: &str) -> String {
	format_date_in(input, &Local)
}

/// Formats a date-like string in an explicit time zone.
pub fn format_date_in<Tz>(input: &str, tz: &Tz) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	match parse_date(input, tz) {
		Some(date) => date.format(DATE_FORMAT).to_string(),
		None => INVALID_DATE.to_string(),
	}
}

/// Parses a date-like string into a zoned date time.
///
/// Wall-clock times that do not exist in `tz` (DST gaps) yield `None`;
/// ambiguous ones resolve to the earlier instant.
pub fn parse_date<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
	let input = input.trim();
	if input.is_empty() {
		return None;
	}

	if let Ok(date) = DateTime::parse_from_rfc3339(input) {
		return Some(date.with_timezone(tz));
	}
	if let Ok(date) = DateTime::parse_from_rfc2822(input) {
		return Some(date.with_timezone(tz));
	}

	for format in NAIVE_DATETIME_FORMATS {
		if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
			return tz.from_local_datetime(&naive).earliest();
		}
	}

	// Bare dates are UTC midnight, matching how browsers read ISO dates.
	let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
	let midnight = date.and_hms_opt(0, 0, 0)?;
	Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}
