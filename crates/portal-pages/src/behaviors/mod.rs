//! Page Behavior Attacher
//!
//! Scans the server-rendered document for marker classes and data attributes
//! and binds the matching behavior to every element found. Each behavior
//! lives in its own module and is split in two layers:
//!
//! - a platform-independent decision layer (validity, visibility, placement,
//!   counter text, ...) compiled on every target;
//! - a `wasm32`-only `attach` function that wires DOM events to it.
//!
//! ## Isolation
//!
//! Behaviors are attached one by one through [`attach_isolated`]. A failure
//! while attaching one behavior is logged and recorded in the
//! [`AttachReport`]; the remaining behaviors are still attached.
//!
//! ## Ordering
//!
//! [`Behavior::ALL`] is the attach order. [`Behavior::ConfirmSubmit`] comes
//! before [`Behavior::SubmitLoading`] so that the loading listener sees a
//! declined confirmation as an already-cancelled submit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::BehaviorError;

pub mod alerts;
pub mod autoresize;
pub mod char_counter;
pub mod clipboard;
pub mod confirm;
pub mod dropdown;
pub mod loading;
pub mod password;
pub mod table_search;
pub mod tooltip;
pub mod validation;

/// One independent page behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Behavior {
	/// Fades out and removes `.alert` elements after a delay.
	AlertDismiss,
	/// Asks for confirmation before submitting `form[data-confirm]`.
	ConfirmSubmit,
	/// Switches a password input between masked and plain text.
	PasswordToggle,
	/// Marks required fields `valid`/`invalid` on blur.
	RequiredValidation,
	/// Copies `data-copy` to the clipboard.
	ClipboardCopy,
	/// Opens user dropdown menus on click on narrow viewports.
	MobileDropdown,
	/// Grows text areas to fit their content.
	AutoResize,
	/// Disables submit buttons while their form submits.
	SubmitLoading,
	/// Filters table rows by a search box.
	TableSearch,
	/// Shows `data-tooltip` text above its anchor on hover.
	Tooltip,
	/// Shows the remaining characters of `data-char-count` text areas.
	CharCounter,
}

impl Behavior {
	/// Every behavior, in attach order.
	pub const ALL: [Behavior; 11] = [
		Behavior::AlertDismiss,
		Behavior::ConfirmSubmit,
		Behavior::PasswordToggle,
		Behavior::RequiredValidation,
		Behavior::ClipboardCopy,
		Behavior::MobileDropdown,
		Behavior::AutoResize,
		Behavior::SubmitLoading,
		Behavior::TableSearch,
		Behavior::Tooltip,
		Behavior::CharCounter,
	];

	/// Kebab-case name, as used in the page configuration.
	pub fn name(self) -> &'static str {
		match self {
			Self::AlertDismiss => "alert-dismiss",
			Self::ConfirmSubmit => "confirm-submit",
			Self::PasswordToggle => "password-toggle",
			Self::RequiredValidation => "required-validation",
			Self::ClipboardCopy => "clipboard-copy",
			Self::MobileDropdown => "mobile-dropdown",
			Self::AutoResize => "auto-resize",
			Self::SubmitLoading => "submit-loading",
			Self::TableSearch => "table-search",
			Self::Tooltip => "tooltip",
			Self::CharCounter => "char-counter",
		}
	}

	/// CSS selector of the elements the behavior binds to.
	pub fn selector(self) -> &'static str {
		match self {
			Self::AlertDismiss => alerts::SELECTOR,
			Self::ConfirmSubmit => confirm::SELECTOR,
			Self::PasswordToggle => password::SELECTOR,
			Self::RequiredValidation => validation::SELECTOR,
			Self::ClipboardCopy => clipboard::SELECTOR,
			Self::MobileDropdown => dropdown::ROOT_SELECTOR,
			Self::AutoResize => autoresize::SELECTOR,
			Self::SubmitLoading => loading::BUTTON_SELECTOR,
			Self::TableSearch => table_search::SELECTOR,
			Self::Tooltip => tooltip::SELECTOR,
			Self::CharCounter => char_counter::SELECTOR,
		}
	}
}

impl fmt::Display for Behavior {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Outcome of attaching every behavior to a page.
#[derive(Debug, Default)]
pub struct AttachReport {
	/// Attached behaviors with the number of elements each one bound.
	pub attached: Vec<(Behavior, usize)>,
	/// Behaviors disabled by configuration.
	pub skipped: Vec<Behavior>,
	/// Behaviors whose attachment failed.
	pub failed: Vec<(Behavior, BehaviorError)>,
}

impl AttachReport {
	/// Returns true if no behavior failed.
	pub fn is_clean(&self) -> bool {
		self.failed.is_empty()
	}

	/// Total number of elements bound across all behaviors.
	pub fn bound_elements(&self) -> usize {
		self.attached.iter().map(|(_, count)| count).sum()
	}

	/// Number of elements bound by `behavior`, if it was attached.
	pub fn count_for(&self, behavior: Behavior) -> Option<usize> {
		self.attached
			.iter()
			.find(|(b, _)| *b == behavior)
			.map(|(_, count)| *count)
	}
}

/// Runs `attach` for every enabled behavior, containing failures.
///
/// `attach` returns the number of elements it bound.
pub fn attach_isolated<F>(config: &PageConfig, mut attach: F) -> AttachReport
where
	F: FnMut(Behavior) -> Result<usize, BehaviorError>,
{
	let mut report = AttachReport::default();
	for behavior in Behavior::ALL {
		if !config.is_enabled(behavior) {
			debug_log!("{} disabled by configuration", behavior);
			report.skipped.push(behavior);
			continue;
		}
		match attach(behavior) {
			Ok(count) => {
				debug_log!("{} bound to {} element(s)", behavior, count);
				report.attached.push((behavior, count));
			}
			Err(err) => {
				error_log!("failed to attach {}: {}", behavior, err);
				report.failed.push((behavior, err));
			}
		}
	}
	report
}

/// Attaches every enabled behavior to `document`.
#[cfg(target_arch = "wasm32")]
pub fn attach_page_behaviors(document: &web_sys::Document, config: &PageConfig) -> AttachReport {
	let report = attach_isolated(config, |behavior| match behavior {
		Behavior::AlertDismiss => alerts::attach(document, config),
		Behavior::ConfirmSubmit => confirm::attach(document, config),
		Behavior::PasswordToggle => password::attach(document, config),
		Behavior::RequiredValidation => validation::attach(document, config),
		Behavior::ClipboardCopy => clipboard::attach(document, config),
		Behavior::MobileDropdown => dropdown::attach(document, config),
		Behavior::AutoResize => autoresize::attach(document, config),
		Behavior::SubmitLoading => loading::attach(document, config),
		Behavior::TableSearch => table_search::attach(document, config),
		Behavior::Tooltip => tooltip::attach(document, config),
		Behavior::CharCounter => char_counter::attach(document, config),
	});
	info_log!(
		"Portal de Seguros - {} page behaviors attached to {} element(s)",
		report.attached.len(),
		report.bound_elements()
	);
	report
}

#[cfg(target_arch = "wasm32")]
thread_local! {
	static STARTED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

/// Attaches the page behaviors once the document structure is parsed.
///
/// Subsequent calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn start() -> Result<(), BehaviorError> {
	if STARTED.with(|started| started.replace(true)) {
		return Ok(());
	}

	let document = crate::dom::document()?;
	if document.ready_state() == "loading" {
		let target = document.clone();
		crate::dom::listen_once(&document, "DOMContentLoaded", move |_| {
			let config = PageConfig::from_document(&target);
			attach_page_behaviors(&target, &config);
		})
	} else {
		let config = PageConfig::from_document(&document);
		attach_page_behaviors(&document, &config);
		Ok(())
	}
}
