//! Notification banners
//!
//! [`show_notification`] appends a dismissable banner to the page's flash
//! message container, creating the container at the top of `.main-content`
//! when the server did not render one. Banners fade out on their own after
//! the configured delay, the same way server-rendered alerts do.
//!
//! The message is inserted as text, never parsed as markup.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of the banner container.
pub const CONTAINER_SELECTOR: &str = ".flash-messages";

/// Class given to a lazily created container.
pub const CONTAINER_CLASS: &str = "flash-messages";

/// Selector of the region a new container is inserted into.
pub const MAIN_CONTENT_SELECTOR: &str = ".main-content";

/// Kind used when the caller does not pass one.
pub const DEFAULT_KIND: &str = "info";

/// A banner waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	/// Banner text.
	pub message: String,
	/// Banner kind (`info`, `success`, `danger`, ...).
	pub kind: String,
}

impl Notification {
	/// Creates an `info` notification.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind: DEFAULT_KIND.to_string(),
		}
	}

	/// Sets the kind; a blank kind keeps `info`.
	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		let kind = kind.into();
		if !kind.trim().is_empty() {
			self.kind = kind.trim().to_string();
		}
		self
	}

	/// Class attribute of the banner element.
	pub fn class_name(&self) -> String {
		format!("alert alert-{}", self.kind)
	}
}

#[cfg(target_arch = "wasm32")]
fn container(document: &web_sys::Document) -> Result<web_sys::Element, BehaviorError> {
	if let Ok(Some(existing)) = document.query_selector(CONTAINER_SELECTOR) {
		return Ok(existing);
	}

	let main = document
		.query_selector(MAIN_CONTENT_SELECTOR)
		.map_err(|e| BehaviorError::dom("querySelector", &e))?
		.ok_or_else(|| BehaviorError::MissingElement(MAIN_CONTENT_SELECTOR.to_string()))?;
	let created = document
		.create_element("div")
		.map_err(|e| BehaviorError::dom("createElement", &e))?;
	created.set_class_name(CONTAINER_CLASS);
	main.insert_before(&created, main.first_child().as_ref())
		.map_err(|e| BehaviorError::dom("insertBefore", &e))?;
	Ok(created)
}

/// Shows `notification` and schedules its dismissal.
///
/// Returns the banner element.
#[cfg(target_arch = "wasm32")]
pub fn show_notification(
	notification: &Notification,
	config: &PageConfig,
) -> Result<web_sys::Element, BehaviorError> {
	let document = dom::document()?;
	let container = container(&document)?;
	let create = |tag: &str| {
		document
			.create_element(tag)
			.map_err(|e| BehaviorError::dom("createElement", &e))
	};

	let banner = create("div")?;
	banner.set_class_name(&notification.class_name());

	let message = create("span")?;
	message.set_class_name("alert-message");
	message.set_text_content(Some(&notification.message));

	let close = create("button")?;
	close.set_class_name("alert-close");
	close
		.set_attribute("type", "button")
		.map_err(|e| BehaviorError::dom("setAttribute", &e))?;
	close.set_text_content(Some("\u{d7}"));
	let target = banner.clone();
	dom::listen(&close, "click", move |_| target.remove())?;

	banner
		.append_child(&message)
		.and_then(|_| banner.append_child(&close))
		.and_then(|_| container.append_child(&banner))
		.map_err(|e| BehaviorError::dom("appendChild", &e))?;

	let dismissed = banner.clone();
	let fade_ms = config.fade_ms;
	dom::schedule(config.notification_dismiss_ms, move || {
		dom::fade_out_and_remove(dismissed, fade_ms)
	});
	Ok(banner)
}
