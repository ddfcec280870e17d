//! Page configuration
//!
//! Every delay, threshold and user-visible string used by the page behaviors
//! lives in [`PageConfig`]. The defaults reproduce the portal's stock
//! behavior; a page can override any subset with a JSON block:
//!
//! ```html
//! <script type="application/json" id="portal-config">
//!   { "alert_dismiss_ms": 8000, "disabled": ["tooltip"] }
//! </script>
//! ```
//!
//! Unknown keys are rejected so that typos surface as a logged warning
//! instead of being silently ignored.

use serde::{Deserialize, Serialize};

use crate::behaviors::Behavior;
use crate::error::BehaviorError;

/// Id of the `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "portal-config";

/// Timing, threshold and text settings for the page behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
	/// Delay before a server-rendered alert starts fading.
	pub alert_dismiss_ms: u32,
	/// Duration of the opacity fade before a banner is removed.
	pub fade_ms: u32,
	/// How long the "copied" label stays on a copy button.
	pub copy_feedback_ms: u32,
	/// Upper bound for how long a submit button stays disabled.
	pub loading_restore_ms: u32,
	/// Delay before a client-side notification starts fading.
	pub notification_dismiss_ms: u32,
	/// Viewport width at or below which dropdowns toggle on click.
	pub mobile_breakpoint_px: f64,
	/// Remaining-character count below which the counter turns red.
	pub char_counter_warning: i64,
	/// Vertical gap between a tooltip and its anchor.
	pub tooltip_gap_px: f64,
	/// User-visible strings.
	pub messages: Messages,
	/// Behaviors that must not be attached on this page.
	pub disabled: Vec<Behavior>,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			alert_dismiss_ms: 5000,
			fade_ms: 500,
			copy_feedback_ms: 2000,
			loading_restore_ms: 10_000,
			notification_dismiss_ms: 5000,
			mobile_breakpoint_px: 768.0,
			char_counter_warning: 20,
			tooltip_gap_px: 5.0,
			messages: Messages::default(),
			disabled: Vec::new(),
		}
	}
}

/// User-visible strings rendered by the behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Messages {
	/// Confirmation prompt used when `data-confirm` is empty.
	pub confirm_default: String,
	/// Label shown on a copy button after a successful copy.
	pub copied: String,
	/// Label shown next to the spinner while a form submits.
	pub processing: String,
	/// Suffix of the character counter text.
	pub chars_remaining: String,
	/// Toggle icon while the password is masked.
	pub icon_masked: String,
	/// Toggle icon while the password is shown in plain text.
	pub icon_plain: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			confirm_default: "¿Estás seguro?".to_string(),
			copied: "¡Copiado!".to_string(),
			processing: "Procesando...".to_string(),
			chars_remaining: "caracteres restantes".to_string(),
			icon_masked: "👁".to_string(),
			icon_plain: "🙈".to_string(),
		}
	}
}

impl PageConfig {
	/// Parses a configuration from JSON. Missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, BehaviorError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Returns true if the behavior has not been disabled.
	pub fn is_enabled(&self, behavior: Behavior) -> bool {
		!self.disabled.contains(&behavior)
	}

	/// Reads the configuration block from the current document.
	///
	/// Falls back to [`PageConfig::default`] when the block is absent or
	/// malformed; a malformed block is reported with `warn_log!`.
	#[cfg(target_arch = "wasm32")]
	pub fn from_document(document: &web_sys::Document) -> Self {
		let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
			return Self::default();
		};
		let json = element.text_content().unwrap_or_default();
		match Self::from_json(&json) {
			Ok(config) => config,
			Err(err) => {
				warn_log!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
				Self::default()
			}
		}
	}
}
