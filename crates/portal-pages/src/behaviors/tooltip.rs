//! Tooltip show/hide
//!
//! Hovering an element with `data-tooltip` shows its text in a `.tooltip`
//! node centered above the element. Every anchor owns a [`TooltipSlot`] that
//! holds the node it created, so leaving an anchor removes exactly that
//! anchor's tooltip.

#[cfg(target_arch = "wasm32")]
use crate::{config::PageConfig, dom, error::BehaviorError};

/// Selector of tooltip anchors.
pub const SELECTOR: &str = "[data-tooltip]";

/// Attribute holding the tooltip text.
pub const ATTRIBUTE: &str = "data-tooltip";

/// Class of the created tooltip node.
pub const CLASS: &str = "tooltip";

/// Viewport rectangle of an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
	/// Distance from the viewport top.
	pub top: f64,
	/// Distance from the viewport left edge.
	pub left: f64,
	/// Width in CSS pixels.
	pub width: f64,
}

/// Rendered size of a tooltip node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

/// Position of a tooltip node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
	/// CSS `top` in pixels.
	pub top: f64,
	/// CSS `left` in pixels.
	pub left: f64,
}

impl Placement {
	/// Centers a tooltip horizontally above `anchor`, `gap` pixels away.
	pub fn above(anchor: Rect, tooltip: Size, gap: f64) -> Self {
		Self {
			top: anchor.top - tooltip.height - gap,
			left: anchor.left + anchor.width / 2.0 - tooltip.width / 2.0,
		}
	}

	/// CSS value of [`Placement::top`].
	pub fn css_top(&self) -> String {
		format!("{}px", self.top)
	}

	/// CSS value of [`Placement::left`].
	pub fn css_left(&self) -> String {
		format!("{}px", self.left)
	}
}

/// The tooltip node owned by one anchor.
#[derive(Debug)]
pub struct TooltipSlot<T> {
	node: Option<T>,
}

impl<T> Default for TooltipSlot<T> {
	fn default() -> Self {
		Self { node: None }
	}
}

impl<T> TooltipSlot<T> {
	/// Creates an empty slot.
	pub fn new() -> Self {
		Self::default()
	}

	/// Stores a freshly shown node, returning a stale one to remove.
	pub fn show(&mut self, node: T) -> Option<T> {
		self.node.replace(node)
	}

	/// Takes the node to remove when the pointer leaves.
	pub fn hide(&mut self) -> Option<T> {
		self.node.take()
	}

	/// Returns true if the anchor currently shows a tooltip.
	pub fn is_showing(&self) -> bool {
		self.node.is_some()
	}
}

#[cfg(target_arch = "wasm32")]
fn show(
	document: &web_sys::Document,
	anchor: &web_sys::Element,
	gap: f64,
) -> Result<web_sys::Element, BehaviorError> {
	use wasm_bindgen::JsCast;

	let body = document.body().ok_or(BehaviorError::MissingGlobal("document.body"))?;
	let tooltip = document
		.create_element("div")
		.map_err(|e| BehaviorError::dom("createElement", &e))?;
	tooltip.set_class_name(CLASS);
	tooltip.set_text_content(anchor.get_attribute(ATTRIBUTE).as_deref());
	body.append_child(&tooltip)
		.map_err(|e| BehaviorError::dom("appendChild", &e))?;

	let rect = anchor.get_bounding_client_rect();
	let size = tooltip
		.dyn_ref::<web_sys::HtmlElement>()
		.map(|html| Size {
			width: f64::from(html.offset_width()),
			height: f64::from(html.offset_height()),
		})
		.unwrap_or(Size {
			width: 0.0,
			height: 0.0,
		});
	let placement = Placement::above(
		Rect {
			top: rect.top(),
			left: rect.left(),
			width: rect.width(),
		},
		size,
		gap,
	);
	dom::set_style(&tooltip, "top", &placement.css_top())?;
	dom::set_style(&tooltip, "left", &placement.css_left())?;
	Ok(tooltip)
}

/// Binds hover handlers to every tooltip anchor.
#[cfg(target_arch = "wasm32")]
pub fn attach(document: &web_sys::Document, config: &PageConfig) -> Result<usize, BehaviorError> {
	use std::cell::RefCell;
	use std::rc::Rc;

	let anchors = dom::query_all(document, SELECTOR)?;
	for anchor in &anchors {
		let slot: Rc<RefCell<TooltipSlot<web_sys::Element>>> = Rc::new(RefCell::new(TooltipSlot::new()));

		{
			let document = document.clone();
			let target = anchor.clone();
			let slot = Rc::clone(&slot);
			let gap = config.tooltip_gap_px;
			dom::listen(anchor, "mouseenter", move |_| match show(&document, &target, gap) {
				Ok(node) => {
					if let Some(stale) = slot.borrow_mut().show(node) {
						stale.remove();
					}
				}
				Err(err) => warn_log!("tooltip not shown: {}", err),
			})?;
		}

		dom::listen(anchor, "mouseleave", move |_| {
			if let Some(node) = slot.borrow_mut().hide() {
				node.remove();
			}
		})?;
	}
	Ok(anchors.len())
}
