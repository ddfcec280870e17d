//! Loading state on submit
//!
//! Submitting a form disables its submit buttons and replaces their content
//! with a spinner. A button is restored by whichever happens first:
//!
//! - the submit turned out to be cancelled (for example a declined
//!   confirmation);
//! - the page is shown again from the back/forward cache (`pageshow`);
//! - the configured upper-bound timer fires.
//!
//! The restore timer is owned by the button's [`LoadingState`] and cancelled
//! as soon as an earlier signal restores the button.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the submit buttons that get a loading state.
pub const BUTTON_SELECTOR: &str = "form button[type=\"submit\"]";

/// Attribute the original button markup is saved to.
pub const ORIGINAL_TEXT_ATTRIBUTE: &str = "data-original-text";

/// Class of the spinner element inserted into a loading button.
pub const SPINNER_CLASS: &str = "loading-spinner";

/// Why a loading button is being restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreReason {
	/// The submit event was cancelled.
	Cancelled,
	/// The page was shown again from the back/forward cache.
	PageShow,
	/// The upper-bound timer fired.
	Timeout,
}

/// Handle of a pending restore timer.
pub trait RestoreTimer {
	/// Stops the timer before it fires.
	fn cancel(self);

	/// Releases a timer whose callback is running.
	fn release(self);
}

#[cfg(target_arch = "wasm32")]
impl RestoreTimer for gloo_timers::callback::Timeout {
	fn cancel(self) {
		drop(gloo_timers::callback::Timeout::cancel(self));
	}

	fn release(self) {
		// The callback is already executing; dropping it here would free the
		// closure mid-call.
		let _id = gloo_timers::callback::Timeout::forget(self);
	}
}

/// Loading state of one submit button.
#[derive(Debug)]
pub struct LoadingState<T> {
	original: Option<String>,
	timer: Option<T>,
}

impl<T> Default for LoadingState<T> {
	fn default() -> Self {
		Self {
			original: None,
			timer: None,
		}
	}
}

impl<T: RestoreTimer> LoadingState<T> {
	/// Creates an idle state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns true while the button shows the spinner.
	pub fn is_loading(&self) -> bool {
		self.original.is_some()
	}

	/// Enters the loading state.
	///
	/// Returns false, cancelling `timer`, if the button is already loading;
	/// the markup saved by the first submit is kept.
	pub fn begin(&mut self, original_markup: String, timer: T) -> bool {
		if self.is_loading() {
			timer.cancel();
			return false;
		}
		self.original = Some(original_markup);
		self.timer = Some(timer);
		true
	}

	/// Leaves the loading state, returning the markup to restore.
	///
	/// The pending timer is cancelled unless it is the one restoring.
	pub fn restore(&mut self, reason: RestoreReason) -> Option<String> {
		let original = self.original.take()?;
		if let Some(timer) = self.timer.take() {
			match reason {
				RestoreReason::Timeout => timer.release(),
				RestoreReason::Cancelled | RestoreReason::PageShow => timer.cancel(),
			}
		}
		Some(original)
	}
}

#[cfg(target_arch = "wasm32")]
mod binding {
	use std::cell::RefCell;
	use std::rc::Rc;

	use gloo_timers::callback::Timeout;
	use wasm_bindgen::JsCast;
	use web_sys::{Document, Event, HtmlButtonElement};

	use super::*;

	type SharedState = Rc<RefCell<LoadingState<Timeout>>>;

	fn restore(button: &HtmlButtonElement, state: &SharedState, reason: RestoreReason) {
		let Some(original) = state.borrow_mut().restore(reason) else {
			return;
		};
		button.set_disabled(false);
		button.set_inner_html(&original);
		debug_log!("submit button restored ({:?})", reason);
	}

	fn render_loading(
		document: &Document,
		button: &HtmlButtonElement,
		label: &str,
	) -> Result<(), BehaviorError> {
		let spinner = document
			.create_element("span")
			.map_err(|e| BehaviorError::dom("createElement", &e))?;
		spinner.set_class_name(SPINNER_CLASS);
		let text = document.create_text_node(&format!(" {}", label));

		button.set_inner_html("");
		button
			.append_child(&spinner)
			.and_then(|_| button.append_child(&text))
			.map_err(|e| BehaviorError::dom("appendChild", &e))?;
		Ok(())
	}

	fn on_submit(
		event: Event,
		document: &Document,
		button: &HtmlButtonElement,
		state: &SharedState,
		config: &PageConfig,
	) -> Result<(), BehaviorError> {
		if event.default_prevented() {
			return Ok(());
		}

		let original = button.inner_html();
		let timer = {
			let button = button.clone();
			let state = Rc::clone(state);
			Timeout::new(config.loading_restore_ms, move || {
				restore(&button, &state, RestoreReason::Timeout)
			})
		};
		if !state.borrow_mut().begin(original.clone(), timer) {
			return Ok(());
		}

		button.set_disabled(true);
		button
			.set_attribute(ORIGINAL_TEXT_ATTRIBUTE, &original)
			.map_err(|e| BehaviorError::dom("setAttribute", &e))?;
		render_loading(document, button, &config.messages.processing)?;

		// Listeners registered after this one may still cancel the submit;
		// check again once dispatch has finished.
		let button = button.clone();
		let state = Rc::clone(state);
		dom::schedule(0, move || {
			if event.default_prevented() {
				restore(&button, &state, RestoreReason::Cancelled);
			}
		});
		Ok(())
	}

	pub fn attach(document: &Document, config: &PageConfig) -> Result<usize, BehaviorError> {
		let window = dom::window()?;
		let mut count = 0;
		for element in dom::query_all(document, BUTTON_SELECTOR)? {
			let Ok(Some(form)) = element.closest("form") else {
				continue;
			};
			let Ok(button) = element.dyn_into::<HtmlButtonElement>() else {
				continue;
			};
			let state: SharedState = Rc::new(RefCell::new(LoadingState::new()));

			{
				let document = document.clone();
				let button = button.clone();
				let state = Rc::clone(&state);
				let config = config.clone();
				dom::listen(&form, "submit", move |event| {
					if let Err(err) = on_submit(event, &document, &button, &state, &config) {
						warn_log!("loading state not applied: {}", err);
					}
				})?;
			}

			dom::listen(&window, "pageshow", move |_| {
				restore(&button, &state, RestoreReason::PageShow)
			})?;
			count += 1;
		}
		Ok(count)
	}
}

/// Binds the loading state to every submit button inside a form.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	binding::attach(document, config)
}
