//! File size formatting

/// Units used by [`format_file_size`], in ascending order.
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const BASE: u64 = 1024;

/// Formats a byte count as a human-readable size.
///
/// The magnitude is base 1024 and rounded half-up to two decimals; trailing
/// zeros are dropped. Sizes beyond the last unit stay expressed in `GB`.
///
/// ```
/// use portal_format::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1024), "1 KB");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
	if bytes == 0 {
		return format!("0 {}", SIZE_UNITS[0]);
	}

	let mut exponent = 0;
	let mut divisor = 1u64;
	while exponent + 1 < SIZE_UNITS.len() && bytes / divisor >= BASE {
		divisor *= BASE;
		exponent += 1;
	}

	let value = bytes as f64 / divisor as f64;
	let rounded = (value * 100.0).round() / 100.0;
	format!("{} {}", rounded, SIZE_UNITS[exponent])
}
