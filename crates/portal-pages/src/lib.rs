//! Portal Pages - WASM page behaviors for the server-rendered portal
//!
//! The portal's HTML is rendered on the server; this crate adds the small
//! client-side behaviors the templates opt into through marker classes and
//! data attributes, plus a few helpers callable from inline scripts.
//!
//! ## Architecture
//!
//! - [`behaviors`]: the Page Behavior Attacher and its eleven behaviors
//! - [`notification`]: notification banners
//! - [`csrf`]: CSRF-aware requests
//! - [`config`]: delays, thresholds and strings for all of the above
//! - [`error`]: error types
//! - [`logging`]: console logging macros
//!
//! Every behavior keeps its decisions (validity, visibility, placement,
//! counter text, ...) in plain Rust compiled for all targets; the DOM wiring
//! is compiled for `wasm32` only.
//!
//! ## Markup contract
//!
//! | Marker | Behavior |
//! |--------|----------|
//! | `.alert` | fades out after 5 s |
//! | `form[data-confirm]` | asks before submitting |
//! | `.password-toggle` (`data-toggle-target`) | shows/hides a password |
//! | `form [required]` | `valid`/`invalid` classes on blur |
//! | `[data-copy]` | copies text to the clipboard |
//! | `.user-dropdown .dropdown-menu` | click-to-open on mobile |
//! | `textarea` | grows with its content |
//! | `form button[type=submit]` | spinner while submitting |
//! | `[data-table-search]` | filters a table's rows |
//! | `[data-tooltip]` | hover tooltip |
//! | `[data-char-count]` | remaining characters |
//!
//! ## Usage
//!
//! ```ignore
//! // From JavaScript, once the module is loaded:
//! //   import init, { initPortal, showNotification } from "./portal.js";
//! //   await init();
//! //   initPortal();
//! //   showNotification("Cliente guardado", "success");
//! ```

#![warn(missing_docs)]

#[macro_use]
pub mod logging;

pub mod behaviors;
pub mod config;
pub mod csrf;
pub mod error;
pub mod notification;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[doc(hidden)]
pub use web_sys as __web_sys;

pub use behaviors::{AttachReport, Behavior, attach_isolated};
#[cfg(target_arch = "wasm32")]
pub use behaviors::{attach_page_behaviors, start};
pub use config::{Messages, PageConfig};
pub use csrf::{FetchError, FetchOptions, fetch_with_csrf, get_csrf_token};
pub use error::BehaviorError;
pub use notification::Notification;
#[cfg(target_arch = "wasm32")]
pub use notification::show_notification;

#[cfg(target_arch = "wasm32")]
mod js {
	use wasm_bindgen::prelude::*;

	use crate::{Notification, PageConfig, dom};

	fn to_js(err: crate::BehaviorError) -> JsValue {
		JsValue::from_str(&err.to_string())
	}

	/// `initPortal()`: attaches the page behaviors once the DOM is parsed.
	#[wasm_bindgen(js_name = initPortal)]
	pub fn init_portal() -> Result<(), JsValue> {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		crate::start().map_err(to_js)
	}

	/// `showNotification(message, kind = "info")`.
	#[wasm_bindgen(js_name = showNotification)]
	pub fn show_notification_js(message: &str, kind: Option<String>) -> Result<(), JsValue> {
		let document = dom::document().map_err(to_js)?;
		let config = PageConfig::from_document(&document);
		let notification = Notification::new(message).with_kind(kind.unwrap_or_default());
		crate::show_notification(&notification, &config)
			.map(|_| ())
			.map_err(to_js)
	}
}

#[cfg(target_arch = "wasm32")]
pub use js::init_portal;
