//! Logging abstraction layer for portal-pages
//!
//! Logging macros that work across WASM and native targets. On `wasm32` they
//! write to the browser console; natively they write to stderr, which is what
//! the unit tests see.
//!
//! ## Macro Overview
//!
//! | Macro | Enabled when | WASM | Non-WASM |
//! |-------|--------------|------|----------|
//! | `debug_log!` | `debug-behaviors` feature + `debug_assertions` | `console.debug` | `eprintln!` |
//! | `info_log!` | always | `console.info` | `eprintln!` |
//! | `warn_log!` | always | `console.warn` | `eprintln!` |
//! | `error_log!` | always | `console.error` | `eprintln!` |
//!
//! Attach failures and clipboard rejections are reported through
//! `error_log!`/`warn_log!`, so those stay on in release builds.
//!
//! ## Example
//!
//! ```ignore
//! use portal_pages::{debug_log, info_log, warn_log, error_log};
//!
//! debug_log!("tooltip created for {:?}", anchor_id);
//! info_log!("{} behaviors attached", count);
//! warn_log!("clipboard write rejected: {}", reason);
//! error_log!("failed to attach {}: {}", behavior, error);
//! ```

/// Logs a debug message (requires `debug-behaviors` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-behaviors", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-behaviors` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(
	debug_assertions,
	feature = "debug-behaviors",
	not(target_arch = "wasm32")
))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("[DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-behaviors")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message
///
/// # Example
///
/// ```ignore
/// info_log!("Portal de Seguros - page behaviors attached");
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// Logs an error message
///
/// # Example
///
/// ```ignore
/// error_log!("failed to attach {}: {}", behavior, error);
/// ```
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}
