//! Clipboard copy
//!
//! Clicking a `[data-copy]` control writes the attribute value to the system
//! clipboard. On success the control's label switches to a confirmation for
//! a short while. A rejected write leaves the label alone and logs a warning.

use super::loading::RestoreTimer;
#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the copy controls.
pub const SELECTOR: &str = "[data-copy]";

/// Attribute holding the text to copy.
pub const ATTRIBUTE: &str = "data-copy";

/// Tracks the label a copy control must return to.
///
/// Only the first copy of a burst records the label, so quick repeated
/// clicks never capture the confirmation text as the "original". Each copy
/// brings its own restore timer; a newer copy cancels the pending one, so
/// the confirmation always stays up for the full delay after the last copy.
#[derive(Debug)]
pub struct CopyFeedback<T> {
	original: Option<String>,
	timer: Option<T>,
}

impl<T> Default for CopyFeedback<T> {
	fn default() -> Self {
		Self {
			original: None,
			timer: None,
		}
	}
}

impl<T: RestoreTimer> CopyFeedback<T> {
	/// Creates an idle tracker.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `current_label` unless a copy is already being acknowledged,
	/// and makes `timer` the one that restores it.
	pub fn begin(&mut self, current_label: String, timer: T) {
		if self.original.is_none() {
			self.original = Some(current_label);
		}
		if let Some(pending) = self.timer.replace(timer) {
			pending.cancel();
		}
	}

	/// Takes the label to restore once the restore timer fires; `None` if
	/// already restored.
	pub fn finish(&mut self) -> Option<String> {
		if let Some(timer) = self.timer.take() {
			timer.release();
		}
		self.original.take()
	}

	/// Returns true while the confirmation label is showing.
	pub fn is_active(&self) -> bool {
		self.original.is_some()
	}
}

#[cfg(target_arch = "wasm32")]
type SharedFeedback = std::rc::Rc<std::cell::RefCell<CopyFeedback<gloo_timers::callback::Timeout>>>;

#[cfg(target_arch = "wasm32")]
fn clipboard(window: &web_sys::Window) -> Option<web_sys::Clipboard> {
	use wasm_bindgen::JsCast;

	// Undefined outside secure contexts.
	let navigator = window.navigator();
	let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into()).ok()?;
	if clipboard.is_undefined() || clipboard.is_null() {
		return None;
	}
	Some(clipboard.unchecked_into())
}

#[cfg(target_arch = "wasm32")]
async fn copy(button: web_sys::Element, feedback: SharedFeedback, copied: String, feedback_ms: u32) {
	use gloo_timers::callback::Timeout;

	let Ok(window) = dom::window() else {
		return;
	};
	let Some(clipboard) = clipboard(&window) else {
		warn_log!("clipboard unavailable (insecure context?)");
		return;
	};
	let text = button.get_attribute(ATTRIBUTE).unwrap_or_default();
	let promise = clipboard.write_text(&text);

	if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
		warn_log!("clipboard write rejected: {}", crate::error::js_reason(&err));
		return;
	}

	let label = button.text_content().unwrap_or_default();
	let timer = {
		let button = button.clone();
		let feedback = std::rc::Rc::clone(&feedback);
		Timeout::new(feedback_ms, move || {
			let original = feedback.borrow_mut().finish();
			if let Some(original) = original {
				button.set_text_content(Some(&original));
			}
		})
	};
	feedback.borrow_mut().begin(label, timer);
	button.set_text_content(Some(&copied));
}

/// Binds the copy handler to every copy control.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	use std::cell::RefCell;
	use std::rc::Rc;

	let buttons = dom::query_all(document, SELECTOR)?;
	for button in &buttons {
		let target = button.clone();
		let feedback: SharedFeedback = Rc::new(RefCell::new(CopyFeedback::new()));
		let copied = config.messages.copied.clone();
		let feedback_ms = config.copy_feedback_ms;
		dom::listen(button, "click", move |_| {
			wasm_bindgen_futures::spawn_local(copy(
				target.clone(),
				Rc::clone(&feedback),
				copied.clone(),
				feedback_ms,
			));
		})?;
	}
	Ok(buttons.len())
}
