//! Mobile dropdown toggle
//!
//! On narrow viewports user dropdown menus open on click instead of hover.
//! A single document-level listener feeds every click to one
//! [`DropdownCoordinator`], which owns the currently open menu: clicking a
//! dropdown toggles it (closing any other), clicking anywhere else closes it.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of dropdown roots.
pub const ROOT_SELECTOR: &str = ".user-dropdown";

/// Selector of the menu inside a root.
pub const MENU_SELECTOR: &str = ".dropdown-menu";

/// Class that makes a menu visible.
pub const OPEN_CLASS: &str = "show";

/// Menu changes produced by a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
	/// Index of the dropdown whose menu must close.
	pub close: Option<usize>,
	/// Index of the dropdown whose menu must open.
	pub open: Option<usize>,
}

/// Owner of the currently open dropdown menu.
#[derive(Debug, Default)]
pub struct DropdownCoordinator {
	open: Option<usize>,
}

impl DropdownCoordinator {
	/// Creates a coordinator with every menu closed.
	pub fn new() -> Self {
		Self::default()
	}

	/// Index of the open dropdown, if any.
	pub fn open_menu(&self) -> Option<usize> {
		self.open
	}

	/// Handles a click.
	///
	/// `root` is the index of the dropdown containing the click target, if
	/// any. Dropdowns only toggle when `viewport_width <= breakpoint`.
	pub fn click(&mut self, root: Option<usize>, viewport_width: f64, breakpoint: f64) -> Transition {
		let previous = self.open;
		match root {
			Some(index) if viewport_width <= breakpoint => {
				if previous == Some(index) {
					self.open = None;
					Transition {
						close: Some(index),
						open: None,
					}
				} else {
					self.open = Some(index);
					Transition {
						close: previous,
						open: Some(index),
					}
				}
			}
			_ => {
				self.open = None;
				Transition {
					close: previous,
					open: None,
				}
			}
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn set_menu_open(root: &web_sys::Element, open: bool) {
	let Ok(Some(menu)) = root.query_selector(MENU_SELECTOR) else {
		return;
	};
	let classes = menu.class_list();
	let result = if open {
		classes.add_1(OPEN_CLASS)
	} else {
		classes.remove_1(OPEN_CLASS)
	};
	if let Err(err) = result {
		warn_log!("dropdown menu not updated: {}", crate::error::js_reason(&err));
	}
}

/// Installs the document-level click coordinator.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	use std::cell::RefCell;

	let roots = dom::query_all(document, ROOT_SELECTOR)?;
	if roots.is_empty() {
		return Ok(0);
	}

	let window = dom::window()?;
	let count = roots.len();
	let breakpoint = config.mobile_breakpoint_px;
	let coordinator = RefCell::new(DropdownCoordinator::new());
	dom::listen(document, "click", move |event| {
		let root = dom::event_element(&event)
			.and_then(|target| target.closest(ROOT_SELECTOR).ok().flatten())
			.and_then(|root| roots.iter().position(|candidate| *candidate == root));
		let width = dom::viewport_width(&window).unwrap_or(f64::INFINITY);

		let transition = coordinator.borrow_mut().click(root, width, breakpoint);
		if let Some(index) = transition.close {
			set_menu_open(&roots[index], false);
		}
		if let Some(index) = transition.open {
			set_menu_open(&roots[index], true);
		}
	})?;
	Ok(count)
}
