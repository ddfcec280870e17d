//! # Portal Web
//!
//! Client-side code for the insurance portal's server-rendered pages,
//! compiled to WebAssembly.
//!
//! Pages work without this module; once it loads it enhances the markup the
//! server rendered (alerts, forms, tables, dropdowns, ...) and exposes a few
//! helpers to inline scripts.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - page behaviors, notifications and CSRF-aware requests
//! - `format` (default) - date and file-size formatting
//! - `console_error_panic_hook` - readable panic messages in the console
//! - `debug-behaviors` - verbose behavior logging in debug builds
//!
//! ## JavaScript API
//!
//! | Export | Description |
//! |--------|-------------|
//! | `initPortal()` | attaches page behaviors (also run on load) |
//! | `fetchWithCSRF(url, options)` | `fetch` with the `X-CSRFToken` header |
//! | `showNotification(message, kind)` | shows a dismissable banner |
//! | `formatDate(value)` | `DD/MM/YYYY HH:MM` |
//! | `formatFileSize(bytes)` | `"1.5 KB"` |

#[cfg(feature = "pages")]
pub use portal_pages as pages;

#[cfg(feature = "format")]
pub use portal_format as format;

/// WASM entry point: attaches page behaviors when the module is loaded.
#[cfg(all(target_arch = "wasm32", feature = "pages"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
	portal_pages::init_portal()
}
