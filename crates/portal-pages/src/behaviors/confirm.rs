//! Confirm-before-submit
//!
//! Forms carrying `data-confirm` ask the user before submitting. An empty
//! attribute falls back to the configured default prompt.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of forms that require confirmation.
pub const SELECTOR: &str = "form[data-confirm]";

/// Attribute holding the confirmation prompt.
pub const ATTRIBUTE: &str = "data-confirm";

/// Picks the prompt for a form, falling back to `default` when empty.
pub fn confirmation_message<'a>(attribute: Option<&'a str>, default: &'a str) -> &'a str {
	match attribute {
		Some(message) if !message.is_empty() => message,
		_ => default,
	}
}

/// What happens to a submit event once the user has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
	/// The submission goes ahead.
	Proceed,
	/// The submission is cancelled.
	Cancel,
}

impl SubmitDecision {
	/// Maps the user's answer to a decision.
	pub fn from_answer(accepted: bool) -> Self {
		if accepted { Self::Proceed } else { Self::Cancel }
	}

	/// Returns true if the submit event's default action must be prevented.
	pub fn prevents_default(self) -> bool {
		self == Self::Cancel
	}
}

/// Binds the confirmation prompt to every marked form.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	let window = dom::window()?;
	let forms = dom::query_all(document, SELECTOR)?;
	for form in &forms {
		let target = form.clone();
		let window = window.clone();
		let default = config.messages.confirm_default.clone();
		dom::listen(form, "submit", move |event| {
			let attribute = target.get_attribute(ATTRIBUTE);
			let message = confirmation_message(attribute.as_deref(), &default);
			let accepted = window.confirm_with_message(message).unwrap_or_else(|err| {
				warn_log!("confirm() unavailable: {}", crate::error::js_reason(&err));
				false
			});
			if SubmitDecision::from_answer(accepted).prevents_default() {
				event.prevent_default();
			}
		})?;
	}
	Ok(forms.len())
}
