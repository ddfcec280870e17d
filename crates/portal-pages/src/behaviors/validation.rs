//! Required-field validation
//!
//! Required fields inside forms are checked when they lose focus. Once a
//! field has been marked invalid it is re-checked on every input, so valid
//! typing never flickers but fixing an error clears it immediately.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the validated fields.
pub const SELECTOR: &str =
	"form input[required], form select[required], form textarea[required]";

/// Class applied to fields that failed validation.
pub const INVALID_CLASS: &str = "invalid";

/// Class applied to fields that passed validation.
pub const VALID_CLASS: &str = "valid";

/// Validity of a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
	/// Non-blank value.
	Valid,
	/// Empty or whitespace-only value.
	Invalid,
}

impl Validity {
	/// Validates a required field's value.
	pub fn of(value: &str) -> Self {
		if value.trim().is_empty() {
			Self::Invalid
		} else {
			Self::Valid
		}
	}

	/// Class to add for this state.
	pub fn class(self) -> &'static str {
		match self {
			Self::Valid => VALID_CLASS,
			Self::Invalid => INVALID_CLASS,
		}
	}

	/// Class to remove for this state.
	pub fn opposite_class(self) -> &'static str {
		match self {
			Self::Valid => INVALID_CLASS,
			Self::Invalid => VALID_CLASS,
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn apply(field: &web_sys::Element) {
	let Some(value) = dom::field_value(field) else {
		return;
	};
	let validity = Validity::of(&value);
	let classes = field.class_list();
	let updated = classes
		.add_1(validity.class())
		.and_then(|()| classes.remove_1(validity.opposite_class()));
	if let Err(err) = updated {
		warn_log!("validation classes not updated: {}", crate::error::js_reason(&err));
	}
}

/// Binds validation to every required field inside a form.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, _config: &PageConfig) -> Result<usize, BehaviorError> {
	let fields = dom::query_all(document, SELECTOR)?;
	for field in &fields {
		let target = field.clone();
		dom::listen(field, "blur", move |_| apply(&target))?;

		let target = field.clone();
		dom::listen(field, "input", move |_| {
			// Typing only clears an error; it never flags a field mid-edit.
			if target.class_list().contains(INVALID_CLASS) {
				apply(&target);
			}
		})?;
	}
	Ok(fields.len())
}
