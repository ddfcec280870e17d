//! Password visibility toggle
//!
//! Clicking a `.password-toggle` flips its password input between masked
//! and plain text and swaps the toggle's icon. The input is the element
//! named by `data-toggle-target`; toggles without that attribute fall back
//! to their preceding sibling.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};
use crate::config::Messages;

/// Selector of the toggle controls.
pub const SELECTOR: &str = ".password-toggle";

/// Attribute naming the id of the controlled input.
pub const TARGET_ATTRIBUTE: &str = "data-toggle-target";

/// Display mode of a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
	/// `type="password"`.
	Masked,
	/// `type="text"`.
	Plain,
}

impl Visibility {
	/// Reads the mode from an input's `type`.
	pub fn from_input_type(input_type: &str) -> Self {
		if input_type.eq_ignore_ascii_case("password") {
			Self::Masked
		} else {
			Self::Plain
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Masked => Self::Plain,
			Self::Plain => Self::Masked,
		}
	}

	/// Input `type` for this mode.
	pub fn input_type(self) -> &'static str {
		match self {
			Self::Masked => "password",
			Self::Plain => "text",
		}
	}

	/// Toggle icon shown while in this mode.
	pub fn icon(self, messages: &Messages) -> &str {
		match self {
			Self::Masked => &messages.icon_masked,
			Self::Plain => &messages.icon_plain,
		}
	}
}

/// How a toggle finds the input it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleTarget {
	/// The element with this id.
	ById(String),
	/// The toggle's preceding element sibling.
	PreviousSibling,
}

impl ToggleTarget {
	/// Interprets the value of [`TARGET_ATTRIBUTE`].
	pub fn from_attribute(value: Option<&str>) -> Self {
		match value.map(str::trim) {
			Some(id) if !id.is_empty() => Self::ById(id.to_string()),
			_ => Self::PreviousSibling,
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn resolve_input(
	document: &web_sys::Document,
	toggle: &web_sys::Element,
) -> Option<web_sys::HtmlInputElement> {
	use wasm_bindgen::JsCast;

	let target = ToggleTarget::from_attribute(toggle.get_attribute(TARGET_ATTRIBUTE).as_deref());
	let element = match target {
		ToggleTarget::ById(id) => document.get_element_by_id(&id),
		ToggleTarget::PreviousSibling => toggle.previous_element_sibling(),
	}?;
	element.dyn_into().ok()
}

/// Binds the toggle handler to every toggle control.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	let toggles = dom::query_all(document, SELECTOR)?;
	for toggle in &toggles {
		let target = toggle.clone();
		let document = document.clone();
		let messages = config.messages.clone();
		dom::listen(toggle, "click", move |_| {
			let Some(input) = resolve_input(&document, &target) else {
				warn_log!("password toggle has no input to control");
				return;
			};
			let next = Visibility::from_input_type(&input.type_()).toggled();
			input.set_type(next.input_type());
			target.set_text_content(Some(next.icon(&messages)));
		})?;
	}
	Ok(toggles.len())
}
