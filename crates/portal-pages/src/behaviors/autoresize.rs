//! Auto-resize text areas
//!
//! Every `textarea` grows to fit its content on input: the height is reset
//! to `auto` and then pinned to the content's scroll height.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the resizable text areas.
pub const SELECTOR: &str = "textarea";

/// CSS height that fits content of the given scroll height.
pub fn fitted_height(scroll_height: i32) -> String {
	format!("{}px", scroll_height)
}

#[cfg(target_arch = "wasm32")]
fn resize(textarea: &web_sys::Element) -> Result<(), BehaviorError> {
	dom::set_style(textarea, "height", "auto")?;
	dom::set_style(textarea, "height", &fitted_height(textarea.scroll_height()))
}

/// Binds the resize handler to every text area.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, _config: &PageConfig) -> Result<usize, BehaviorError> {
	let textareas = dom::query_all(document, SELECTOR)?;
	for textarea in &textareas {
		let target = textarea.clone();
		dom::listen(textarea, "input", move |_| {
			if let Err(err) = resize(&target) {
				warn_log!("auto-resize failed: {}", err);
			}
		})?;
	}
	Ok(textareas.len())
}
