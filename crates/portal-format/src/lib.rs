//! Portal Format - presentation helpers for server-rendered pages
//!
//! Small, pure formatting functions used by the portal frontend. They never
//! fail: malformed input produces a placeholder string instead of an error,
//! which keeps them safe to call from inline markup.
//!
//! - [`format_date`]: renders a date-like string as `DD/MM/YYYY HH:MM`
//! - [`format_file_size`]: renders a byte count with a base-1024 unit
//!
//! ## Example
//!
//! ```
//! use portal_format::{format_date_in, format_file_size};
//!
//! assert_eq!(format_file_size(1536), "1.5 KB");
//! assert_eq!(format_date_in("2024-03-05T14:07:00Z", &chrono::Utc), "05/03/2024 14:07");
//! ```
//!
//! On `wasm32` both helpers are also exported to JavaScript as `formatDate`
//! and `formatFileSize`.

#![warn(missing_docs)]

pub mod date;
pub mod file_size;

pub use date::{DATE_FORMAT, INVALID_DATE, format_date, format_date_in, parse_date};
pub use file_size::{SIZE_UNITS, format_file_size};

#[cfg(target_arch = "wasm32")]
mod js {
	use wasm_bindgen::prelude::*;

	/// JavaScript binding for [`format_date`](crate::format_date).
	#[wasm_bindgen(js_name = formatDate)]
	pub fn format_date_js(input: &str) -> String {
		crate::format_date(input)
	}

	/// JavaScript binding for [`format_file_size`](crate::format_file_size).
	///
	/// JavaScript numbers are truncated towards zero; negative values clamp
	/// to zero.
	#[wasm_bindgen(js_name = formatFileSize)]
	pub fn format_file_size_js(bytes: f64) -> String {
		crate::format_file_size(bytes.max(0.0) as u64)
	}
}
