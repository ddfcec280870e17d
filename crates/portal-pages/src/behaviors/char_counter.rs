//! Character counter
//!
//! Text areas carrying `data-char-count="<max>"` get a `small.char-counter`
//! sibling showing how many characters remain. The count turns red below the
//! warning threshold and may go negative.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom};
use crate::error::BehaviorError;

/// Selector of the counted text areas.
pub const SELECTOR: &str = "[data-char-count]";

/// Attribute holding the maximum length.
pub const ATTRIBUTE: &str = "data-char-count";

/// Classes of the counter node.
pub const COUNTER_CLASS: &str = "char-counter text-muted";

/// Counter colour below the warning threshold.
pub const DANGER_COLOR: &str = "var(--danger)";

/// Counter colour otherwise.
pub const NEUTRAL_COLOR: &str = "var(--gray)";

/// Parses the maximum length the way `parseInt` reads it: an optional sign
/// followed by leading digits, trailing text ignored.
pub fn parse_max(value: &str) -> Result<i64, BehaviorError> {
	let trimmed = value.trim_start();
	let digits_start = usize::from(trimmed.starts_with(['+', '-']));
	let digits_len = trimmed[digits_start..]
		.bytes()
		.take_while(u8::is_ascii_digit)
		.count();

	trimmed[..digits_start + digits_len]
		.parse()
		.map_err(|_| BehaviorError::InvalidAttribute {
			attribute: ATTRIBUTE,
			value: value.to_string(),
		})
}

/// What the counter node shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterDisplay {
	/// Characters left before the maximum.
	pub remaining: i64,
	/// Counter text.
	pub text: String,
	/// CSS colour of the counter.
	pub color: &'static str,
}

impl CounterDisplay {
	/// Computes the counter for `value` against `max`.
	///
	/// Characters are Unicode scalar values.
	pub fn compute(max: i64, value: &str, warning: i64, suffix: &str) -> Self {
		let length = i64::try_from(value.chars().count()).unwrap_or(i64::MAX);
		let remaining = max.saturating_sub(length);
		Self {
			remaining,
			text: format!("{} {}", remaining, suffix),
			color: if remaining < warning {
				DANGER_COLOR
			} else {
				NEUTRAL_COLOR
			},
		}
	}

	/// Returns true if the danger colour applies.
	pub fn is_danger(&self) -> bool {
		self.color == DANGER_COLOR
	}
}

#[cfg(target_arch = "wasm32")]
fn install(
	document: &web_sys::Document,
	textarea: &web_sys::Element,
	config: &PageConfig,
) -> Result<(), BehaviorError> {
	let max = parse_max(&textarea.get_attribute(ATTRIBUTE).unwrap_or_default())?;
	let parent = textarea
		.parent_node()
		.ok_or_else(|| BehaviorError::MissingElement(format!("parent of {}", SELECTOR)))?;
	let counter = document
		.create_element("small")
		.map_err(|e| BehaviorError::dom("createElement", &e))?;
	counter.set_class_name(COUNTER_CLASS);
	parent
		.append_child(&counter)
		.map_err(|e| BehaviorError::dom("appendChild", &e))?;

	let warning = config.char_counter_warning;
	let suffix = config.messages.chars_remaining.clone();
	let target = textarea.clone();
	let update = move || {
		let value = dom::field_value(&target).unwrap_or_default();
		let display = CounterDisplay::compute(max, &value, warning, &suffix);
		counter.set_text_content(Some(&display.text));
		if let Err(err) = dom::set_style(&counter, "color", display.color) {
			warn_log!("counter colour not set: {}", err);
		}
	};

	update();
	dom::listen(textarea, "input", move |_| update())
}

/// Creates a counter for every marked text area.
///
/// Text areas with an unreadable maximum are skipped with a warning.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	let mut count = 0;
	for textarea in dom::query_all(document, SELECTOR)? {
		match install(document, &textarea, config) {
			Ok(()) => count += 1,
			Err(err) => warn_log!("character counter skipped: {}", err),
		}
	}
	Ok(count)
}
